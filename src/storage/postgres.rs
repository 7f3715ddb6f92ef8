use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use super::{Storage, StorageError, StorageResult};
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};

const CREATE_EMPLOYEE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employee (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50),
        position VARCHAR(50),
        salary NUMERIC(10, 2),
        created_at TIMESTAMP,
        updated_at TIMESTAMP
    )
"#;

const EMPLOYEE_COLUMNS: &str = "id, name, position, salary, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Creates the employee table if it is missing.
    pub async fn init(&self) -> StorageResult<()> {
        self.timed(sqlx::query(CREATE_EMPLOYEE_TABLE).execute(&self.pool))
            .await?;
        info!("Employee table ready");
        Ok(())
    }

    async fn timed<T, F>(&self, fut: F) -> StorageResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        // An exhausted pool is a timeout too, whichever deadline fires first.
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(Err(sqlx::Error::PoolTimedOut)) | Err(_) => {
                Err(StorageError::Timeout(self.query_timeout))
            }
            Ok(res) => Ok(res?),
        }
    }
}

#[async_trait]
impl Storage for PgStore {
    #[instrument(skip(self, employee), fields(name = %employee.name))]
    async fn create_employee(&self, employee: &CreateEmployee) -> StorageResult<Employee> {
        let now = Utc::now().naive_utc();
        let sql = format!(
            "INSERT INTO employee (name, position, salary, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) RETURNING {EMPLOYEE_COLUMNS}"
        );

        let created = self
            .timed(
                sqlx::query_as::<_, Employee>(&sql)
                    .bind(&employee.name)
                    .bind(&employee.position)
                    .bind(employee.salary)
                    .bind(now)
                    .fetch_one(&self.pool),
            )
            .await?;

        debug!(employee_id = created.id, "Inserted employee");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_employee_by_id(&self, id: i32) -> StorageResult<Option<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = $1");

        self.timed(
            sqlx::query_as::<_, Employee>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    #[instrument(skip(self, changes))]
    async fn update_employee(
        &self,
        id: i32,
        changes: &UpdateEmployee,
    ) -> StorageResult<Option<Employee>> {
        let now = Utc::now().naive_utc();
        let sql = format!(
            "UPDATE employee \
             SET position = COALESCE($1, position), \
                 salary = COALESCE($2, salary), \
                 updated_at = $3 \
             WHERE id = $4 \
             RETURNING {EMPLOYEE_COLUMNS}"
        );

        let updated = self
            .timed(
                sqlx::query_as::<_, Employee>(&sql)
                    .bind(changes.position.as_deref())
                    .bind(changes.salary)
                    .bind(now)
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await?;

        if updated.is_none() {
            debug!(employee_id = id, "Update matched no rows");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_employee(&self, id: i32) -> StorageResult<()> {
        let result = self
            .timed(
                sqlx::query("DELETE FROM employee WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        debug!(
            employee_id = id,
            rows = result.rows_affected(),
            "Deleted employee"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_employees(&self, offset: u32, limit: u32) -> StorageResult<Vec<Employee>> {
        let sql = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee ORDER BY id LIMIT $1 OFFSET $2"
        );

        self.timed(
            sqlx::query_as::<_, Employee>(&sql)
                .bind(i64::from(limit))
                .bind(i64::from(offset))
                .fetch_all(&self.pool),
        )
        .await
    }
}
