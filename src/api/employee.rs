use crate::{
    api::error::ApiError,
    model::employee::{CreateEmployee, UpdateEmployee},
    storage::Storage,
};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::{debug, info};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Maximum number of rows to return
    #[param(example = 20)]
    pub limit: u32,
    /// Number of rows to skip
    #[param(example = 0)]
    pub offset: u32,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employee",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created", body = crate::model::employee::Employee),
        (status = 400, description = "Invalid JSON", body = crate::api::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorBody, example = json!({
            "Error": "Something went wrong, Contact with system admin"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn Storage>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let employee = store.create_employee(&payload).await?;

    info!(employee_id = employee.id, "Employee created");
    Ok(HttpResponse::Ok().json(employee))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employee/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 400, description = "Employee ID is not a number", body = crate::api::error::ErrorBody),
        (status = 404, description = "Employee not found", body = crate::api::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    match store.get_employee_by_id(employee_id).await? {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(ApiError::NotFound(employee_id)),
    }
}

/// Update Employee
///
/// Only the supplied fields change. Succeeds even when no employee has the ID.
#[utoipa::path(
    put,
    path = "/employee/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = String, example = json!("")),
        (status = 400, description = "Invalid JSON or employee ID", body = crate::api::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let updated = store.update_employee(employee_id, &body).await?;
    if updated.is_none() {
        debug!(employee_id, "No employee to update");
    }

    Ok(HttpResponse::Ok().json(""))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employee/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted (or never existed)", body = String, example = json!("")),
        (status = 400, description = "Employee ID is not a number", body = crate::api::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    store.delete_employee(employee_id).await?;

    info!(employee_id, "Employee deleted");
    Ok(HttpResponse::Ok().json(""))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of employees", body = [crate::model::employee::Employee]),
        (status = 400, description = "Missing or invalid limit/offset", body = crate::api::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<dyn Storage>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    debug!(offset = query.offset, limit = query.limit, "Fetching employees");

    let employees = store.get_employees(query.offset, query.limit).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(req.method().clone()))
}
