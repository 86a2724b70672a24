use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use shared_types::{
    CourseStatus, CoursesResponse, CreateCourseRequest, MessageResponse, UpdateCourseRequest,
};
use std::sync::Arc;
use tracing::info;

use crate::database::courses as db;
use crate::database::Database;
use crate::handlers::error::{reject_blank, require_text, ApiError};
use crate::helpers::admin_gate::AdminGate;

#[derive(Deserialize)]
pub struct ListCoursesQuery {
    category: Option<String>,
    subcategory: Option<String>,
    status: Option<CourseStatus>,
}

pub async fn list_courses(
    db: web::Data<Arc<Database>>,
    query: web::Query<ListCoursesQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();

    let courses = db::list_courses(
        db.async_connection.clone(),
        query.category,
        query.subcategory,
        query.status,
    )
    .await?;

    Ok(HttpResponse::Ok().json(CoursesResponse { courses }))
}

pub async fn get_course(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let course = db::get_course(db.async_connection.clone(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(course))
}

pub async fn create_course(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = request.into_inner();
    require_text("name", &req.name)?;

    let course = db::insert_course(db.async_connection.clone(), &req).await?;

    info!("Created course {} ({})", course.id, course.name);
    Ok(HttpResponse::Created().json(course))
}

pub async fn update_course(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
    request: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let req = request.into_inner();
    reject_blank("name", req.name.as_ref())?;

    let course = db::update_course(db.async_connection.clone(), id, req).await?;

    info!("Updated course {}", id);
    Ok(HttpResponse::Ok().json(course))
}

pub async fn delete_course(
    db: web::Data<Arc<Database>>,
    gate: web::Data<AdminGate>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    gate.check(&req)?;
    let id = path.into_inner();

    db::delete_course(db.async_connection.clone(), id).await?;

    info!("Deleted course {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Course deleted successfully")))
}
