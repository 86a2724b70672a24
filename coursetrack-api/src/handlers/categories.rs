//! Main category → main goal → sub goal checklist. Every child mutation
//! answers with the whole parent category so the client can re-render the
//! tree in one go.

use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::{
    CategoriesResponse, CreateMainCategoryRequest, CreateMainGoalRequest, CreateSubGoalRequest,
    MessageResponse, UpdateMainCategoryRequest, UpdateMainGoalRequest, UpdateSubGoalRequest,
};
use std::sync::Arc;
use tracing::info;

use crate::database::categories as db;
use crate::database::Database;
use crate::handlers::error::{reject_blank, require_text, ApiError};
use crate::helpers::admin_gate::AdminGate;
use crate::helpers::progress;

pub async fn list_categories(db: web::Data<Arc<Database>>) -> Result<HttpResponse, ApiError> {
    let categories = db::list_categories(db.async_connection.clone()).await?;

    Ok(HttpResponse::Ok().json(CategoriesResponse { categories }))
}

pub async fn get_category(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let category = db::get_category(db.async_connection.clone(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(category))
}

pub async fn create_category(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateMainCategoryRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = request.into_inner();
    require_text("name", &req.name)?;

    let category = db::insert_category(db.async_connection.clone(), &req).await?;

    info!("Created main category {} ({})", category.id, category.name);
    Ok(HttpResponse::Created().json(category))
}

pub async fn update_category(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
    request: web::Json<UpdateMainCategoryRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let req = request.into_inner();
    reject_blank("name", req.name.as_ref())?;

    let category = db::update_category(db.async_connection.clone(), id, req).await?;

    Ok(HttpResponse::Ok().json(category))
}

pub async fn delete_category(
    db: web::Data<Arc<Database>>,
    gate: web::Data<AdminGate>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    gate.check(&req)?;
    let id = path.into_inner();

    db::delete_category(db.async_connection.clone(), id).await?;

    info!("Deleted main category {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Main category deleted successfully")))
}

pub async fn create_goal(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
    request: web::Json<CreateMainGoalRequest>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();
    let req = request.into_inner();
    require_text("name", &req.name)?;

    let category = db::insert_goal(db.async_connection.clone(), category_id, &req).await?;

    info!("Added main goal to category {}", category_id);
    Ok(HttpResponse::Created().json(category))
}

pub async fn update_goal(
    db: web::Data<Arc<Database>>,
    path: web::Path<(i64, i64)>,
    request: web::Json<UpdateMainGoalRequest>,
) -> Result<HttpResponse, ApiError> {
    let (category_id, goal_id) = path.into_inner();
    let req = request.into_inner();
    reject_blank("name", req.name.as_ref())?;

    let category =
        db::update_goal(db.async_connection.clone(), category_id, goal_id, req).await?;

    Ok(HttpResponse::Ok().json(category))
}

pub async fn delete_goal(
    db: web::Data<Arc<Database>>,
    gate: web::Data<AdminGate>,
    path: web::Path<(i64, i64)>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    gate.check(&req)?;
    let (category_id, goal_id) = path.into_inner();

    let category = db::delete_goal(db.async_connection.clone(), category_id, goal_id).await?;

    info!("Deleted main goal {} of category {}", goal_id, category_id);
    Ok(HttpResponse::Ok().json(category))
}

pub async fn create_sub_goal(
    db: web::Data<Arc<Database>>,
    path: web::Path<(i64, i64)>,
    request: web::Json<CreateSubGoalRequest>,
) -> Result<HttpResponse, ApiError> {
    let (category_id, goal_id) = path.into_inner();
    let req = request.into_inner();
    require_text("name", &req.name)?;

    let category =
        db::insert_sub_goal(db.async_connection.clone(), category_id, goal_id, &req).await?;

    info!("Added sub goal to main goal {}", goal_id);
    Ok(HttpResponse::Created().json(category))
}

pub async fn update_sub_goal(
    db: web::Data<Arc<Database>>,
    path: web::Path<(i64, i64, i64)>,
    request: web::Json<UpdateSubGoalRequest>,
) -> Result<HttpResponse, ApiError> {
    let (category_id, goal_id, sub_goal_id) = path.into_inner();
    let req = request.into_inner();
    reject_blank("name", req.name.as_ref())?;

    let category = db::update_sub_goal(
        db.async_connection.clone(),
        category_id,
        goal_id,
        sub_goal_id,
        req,
    )
    .await?;

    Ok(HttpResponse::Ok().json(category))
}

pub async fn delete_sub_goal(
    db: web::Data<Arc<Database>>,
    gate: web::Data<AdminGate>,
    path: web::Path<(i64, i64, i64)>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    gate.check(&req)?;
    let (category_id, goal_id, sub_goal_id) = path.into_inner();

    let category = db::delete_sub_goal(
        db.async_connection.clone(),
        category_id,
        goal_id,
        sub_goal_id,
    )
    .await?;

    info!("Deleted sub goal {} of main goal {}", sub_goal_id, goal_id);
    Ok(HttpResponse::Ok().json(category))
}

pub async fn get_category_progress(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let category = db::get_category(db.async_connection.clone(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(progress::category_progress(&category)))
}

pub async fn get_overall_progress(
    db: web::Data<Arc<Database>>,
) -> Result<HttpResponse, ApiError> {
    let categories = db::list_categories(db.async_connection.clone()).await?;

    Ok(HttpResponse::Ok().json(progress::overall_progress(&categories)))
}
