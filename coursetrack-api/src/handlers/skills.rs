use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::{CreateSkillRequest, MessageResponse, SkillsResponse, UpdateSkillRequest};
use std::sync::Arc;
use tracing::info;

use crate::database::skills as db;
use crate::database::Database;
use crate::handlers::error::{reject_blank, require_text, ApiError};
use crate::helpers::admin_gate::AdminGate;

pub async fn list_skills(db: web::Data<Arc<Database>>) -> Result<HttpResponse, ApiError> {
    let skills = db::list_skills(db.async_connection.clone()).await?;

    Ok(HttpResponse::Ok().json(SkillsResponse { skills }))
}

pub async fn get_skill(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let skill = db::get_skill(db.async_connection.clone(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(skill))
}

pub async fn create_skill(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateSkillRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = request.into_inner();
    require_text("name", &req.name)?;

    let skill = db::insert_skill(db.async_connection.clone(), &req).await?;

    info!("Created skill {} ({})", skill.id, skill.name);
    Ok(HttpResponse::Created().json(skill))
}

pub async fn update_skill(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
    request: web::Json<UpdateSkillRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let req = request.into_inner();
    reject_blank("name", req.name.as_ref())?;

    let skill = db::update_skill(db.async_connection.clone(), id, req).await?;

    Ok(HttpResponse::Ok().json(skill))
}

pub async fn delete_skill(
    db: web::Data<Arc<Database>>,
    gate: web::Data<AdminGate>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    gate.check(&req)?;
    let id = path.into_inner();

    db::delete_skill(db.async_connection.clone(), id).await?;

    info!("Deleted skill {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Skill deleted successfully")))
}
