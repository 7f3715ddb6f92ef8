//! In-memory employee store.
//!
//! Same operations as the Postgres store. Salaries are rounded to two decimal
//! places like the `numeric(10, 2)` column; the column's precision and the
//! `varchar(50)` length limits are not enforced. Useful for tests and for
//! running the handlers without a database.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{Storage, StorageError, StorageResult};
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Employee>,
    last_id: i32,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    table: RwLock<Table>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> StorageResult<usize> {
        let table = self.table.read().map_err(|_| StorageError::Poisoned)?;
        Ok(table.rows.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

// Postgres rounds numeric half away from zero.
fn to_column_scale(salary: Decimal) -> Decimal {
    salary.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[async_trait]
impl Storage for InMemoryStore {
    async fn create_employee(&self, employee: &CreateEmployee) -> StorageResult<Employee> {
        let mut table = self.table.write().map_err(|_| StorageError::Poisoned)?;
        let now = Utc::now().naive_utc();

        table.last_id += 1;
        let created = Employee {
            id: table.last_id,
            name: employee.name.clone(),
            position: employee.position.clone(),
            salary: to_column_scale(employee.salary),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_employee_by_id(&self, id: i32) -> StorageResult<Option<Employee>> {
        let table = self.table.read().map_err(|_| StorageError::Poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update_employee(
        &self,
        id: i32,
        changes: &UpdateEmployee,
    ) -> StorageResult<Option<Employee>> {
        let mut table = self.table.write().map_err(|_| StorageError::Poisoned)?;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(position) = &changes.position {
            row.position = position.clone();
        }
        if let Some(salary) = changes.salary {
            row.salary = to_column_scale(salary);
        }
        row.updated_at = Utc::now().naive_utc();
        Ok(Some(row.clone()))
    }

    async fn delete_employee(&self, id: i32) -> StorageResult<()> {
        let mut table = self.table.write().map_err(|_| StorageError::Poisoned)?;
        table.rows.remove(&id);
        Ok(())
    }

    async fn get_employees(&self, offset: u32, limit: u32) -> StorageResult<Vec<Employee>> {
        let table = self.table.read().map_err(|_| StorageError::Poisoned)?;
        Ok(table
            .rows
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
