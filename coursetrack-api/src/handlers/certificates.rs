use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::{CertificatesResponse, CreateCertificateRequest, MessageResponse};
use std::sync::Arc;
use tracing::info;

use crate::database::certificates as db;
use crate::database::Database;
use crate::handlers::error::{require_text, ApiError};
use crate::helpers::admin_gate::AdminGate;

pub async fn list_certificates(db: web::Data<Arc<Database>>) -> Result<HttpResponse, ApiError> {
    let certificates = db::list_certificates(db.async_connection.clone()).await?;

    Ok(HttpResponse::Ok().json(CertificatesResponse { certificates }))
}

pub async fn get_certificate(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let certificate = db::get_certificate(db.async_connection.clone(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(certificate))
}

pub async fn create_certificate(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateCertificateRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = request.into_inner();
    require_text("image_url", &req.image_url)?;
    require_text("course_name", &req.course_name)?;

    let certificate = db::insert_certificate(db.async_connection.clone(), &req).await?;

    info!("Added certificate {} for {}", certificate.id, certificate.course_name);
    Ok(HttpResponse::Created().json(certificate))
}

pub async fn delete_certificate(
    db: web::Data<Arc<Database>>,
    gate: web::Data<AdminGate>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    gate.check(&req)?;
    let id = path.into_inner();

    db::delete_certificate(db.async_connection.clone(), id).await?;

    info!("Deleted certificate {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Certificate deleted successfully")))
}
