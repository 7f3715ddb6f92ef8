//! Runs against a real database:
//! `DATABASE_URL=postgres://... cargo test --test postgres_store -- --ignored --test-threads=1`
//! The employee table is truncated, so point it at a disposable database.

use std::time::Duration;

use employee_service::model::employee::{CreateEmployee, UpdateEmployee};
use employee_service::storage::{PgStore, Storage};
use rust_decimal::Decimal;
use sqlx::PgPool;

async fn fresh_store() -> PgStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPool::connect(&url).await.unwrap();
    let store = PgStore::new(pool.clone(), Duration::from_secs(5));
    store.init().await.unwrap();
    // Second call must be a no-op.
    store.init().await.unwrap();
    sqlx::query("TRUNCATE employee RESTART IDENTITY")
        .execute(&pool)
        .await
        .unwrap();
    store
}

fn asha() -> CreateEmployee {
    CreateEmployee {
        name: "Asha".into(),
        position: "Engineer".into(),
        salary: Decimal::new(5000000, 2),
    }
}

#[actix_web::test]
#[ignore]
async fn create_then_get_round_trips() {
    let store = fresh_store().await;

    let created = store.create_employee(&asha()).await.unwrap();
    assert_ne!(created.id, 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get_employee_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Asha");
    assert_eq!(fetched.position, "Engineer");
    assert_eq!(fetched.salary, Decimal::from(50000));
    assert!(fetched.created_at <= fetched.updated_at);
}

#[actix_web::test]
#[ignore]
async fn missing_rows_are_none_and_deletes_succeed() {
    let store = fresh_store().await;

    assert!(store.get_employee_by_id(4242).await.unwrap().is_none());
    store.delete_employee(4242).await.unwrap();
    let changes = UpdateEmployee {
        position: Some("Lead".into()),
        salary: None,
    };
    assert!(store.update_employee(4242, &changes).await.unwrap().is_none());
}

#[actix_web::test]
#[ignore]
async fn update_keeps_fields_that_are_not_supplied() {
    let store = fresh_store().await;
    let created = store.create_employee(&asha()).await.unwrap();

    let untouched = store
        .update_employee(created.id, &UpdateEmployee::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.position, "Engineer");
    assert_eq!(untouched.salary, Decimal::from(50000));
    assert!(untouched.updated_at >= created.updated_at);

    let changes = UpdateEmployee {
        position: Some("Lead".into()),
        salary: Some(Decimal::from(60000)),
    };
    let updated = store
        .update_employee(created.id, &changes)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.position, "Lead");
    assert_eq!(updated.salary, Decimal::from(60000));
    assert_eq!(updated.created_at, created.created_at);
}

#[actix_web::test]
#[ignore]
async fn pages_are_bounded_by_limit() {
    let store = fresh_store().await;
    for _ in 0..5 {
        store.create_employee(&asha()).await.unwrap();
    }

    assert_eq!(store.get_employees(0, 2).await.unwrap().len(), 2);
    assert_eq!(store.get_employees(4, 2).await.unwrap().len(), 1);
    assert!(store.get_employees(5, 2).await.unwrap().is_empty());
}

#[actix_web::test]
#[ignore]
async fn salary_out_of_range_is_a_database_error() {
    let store = fresh_store().await;
    let too_big = CreateEmployee {
        salary: Decimal::from(1_000_000_000_i64),
        ..asha()
    };

    let err = store.create_employee(&too_big).await.unwrap_err();
    assert!(matches!(
        err,
        employee_service::storage::StorageError::Database(_)
    ));
}
