use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Asha",
        "position": "Engineer",
        "salary": 50000.0,
        "created_at": "2026-01-01T09:30:00",
        "updated_at": "2026-01-01T09:30:00"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Asha")]
    pub name: String,

    #[schema(example = "Engineer")]
    pub position: String,

    #[schema(example = 50000.0, value_type = f64)]
    pub salary: Decimal,

    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,

    #[schema(value_type = String, format = DateTime)]
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Asha")]
    pub name: String,
    #[schema(example = "Engineer")]
    pub position: String,
    #[schema(example = 50000.0, value_type = f64)]
    pub salary: Decimal,
}

/// Partial update. A field left out (or sent as `null`) keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateEmployee {
    #[schema(example = "Lead", nullable = true)]
    #[serde(default)]
    pub position: Option<String>,
    #[schema(example = 60000.0, value_type = f64, nullable = true)]
    #[serde(default)]
    pub salary: Option<Decimal>,
}

impl UpdateEmployee {
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.salary.is_none()
    }
}
