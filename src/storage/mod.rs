//! Employee persistence.
//!
//! Handlers only see the [`Storage`] trait. `PgStore` backs the running
//! service; `InMemoryStore` backs tests and local experiments.

use std::time::Duration;

use async_trait::async_trait;

use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Operations any employee backend has to provide.
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    /// Inserts a row stamped with the current server time and returns it with
    /// its assigned id.
    async fn create_employee(&self, employee: &CreateEmployee) -> StorageResult<Employee>;

    /// `Ok(None)` when no row has this id.
    async fn get_employee_by_id(&self, id: i32) -> StorageResult<Option<Employee>>;

    /// Applies the supplied fields and bumps `updated_at`. `Ok(None)` when no
    /// row matched; that is not an error.
    async fn update_employee(
        &self,
        id: i32,
        changes: &UpdateEmployee,
    ) -> StorageResult<Option<Employee>>;

    /// Deleting an id that does not exist succeeds.
    async fn delete_employee(&self, id: i32) -> StorageResult<()>;

    /// One page of rows ordered by id.
    async fn get_employees(&self, offset: u32, limit: u32) -> StorageResult<Vec<Employee>>;
}
