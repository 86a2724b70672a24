use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::{CreateProjectRequest, MessageResponse, ProjectsResponse, UpdateProjectRequest};
use std::sync::Arc;
use tracing::info;

use crate::database::projects as db;
use crate::database::Database;
use crate::handlers::error::{reject_blank, require_text, ApiError};
use crate::helpers::admin_gate::AdminGate;

pub async fn list_projects(db: web::Data<Arc<Database>>) -> Result<HttpResponse, ApiError> {
    let projects = db::list_projects(db.async_connection.clone()).await?;

    Ok(HttpResponse::Ok().json(ProjectsResponse { projects }))
}

pub async fn get_project(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let project = db::get_project(db.async_connection.clone(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn create_project(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = request.into_inner();
    require_text("title", &req.title)?;

    let project = db::insert_project(db.async_connection.clone(), &req).await?;

    info!("Created project {} ({})", project.id, project.title);
    Ok(HttpResponse::Created().json(project))
}

pub async fn update_project(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
    request: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let req = request.into_inner();
    reject_blank("title", req.title.as_ref())?;

    let project = db::update_project(db.async_connection.clone(), id, req).await?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn delete_project(
    db: web::Data<Arc<Database>>,
    gate: web::Data<AdminGate>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    gate.check(&req)?;
    let id = path.into_inner();

    db::delete_project(db.async_connection.clone(), id).await?;

    info!("Deleted project {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Project deleted successfully")))
}
