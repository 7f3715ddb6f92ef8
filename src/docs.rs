use crate::api::error::ErrorBody;
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Service API",
        version = "1.0.0",
        description = r#"
## Employee Service

Create, read, update, delete and list employee records stored in PostgreSQL.

### Response Format
- JSON bodies, `application/json`
- Failures always look like `{"Error": "<message>"}`
- Listing is paged with mandatory `limit` and `offset` query parameters

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::list_employees
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            UpdateEmployee,
            ErrorBody
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
    )
)]
pub struct ApiDoc;
