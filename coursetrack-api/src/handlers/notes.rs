use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::{
    AllNotesResponse, CreateNoteRequest, MessageResponse, NotesResponse, UpdateNoteRequest,
};
use std::sync::Arc;
use tracing::info;

use crate::database::notes as db;
use crate::database::Database;
use crate::handlers::error::{reject_blank, require_text, ApiError};
use crate::helpers::admin_gate::AdminGate;

pub async fn list_all_notes(db: web::Data<Arc<Database>>) -> Result<HttpResponse, ApiError> {
    let notes = db::list_all_notes(db.async_connection.clone()).await?;

    Ok(HttpResponse::Ok().json(AllNotesResponse { notes }))
}

pub async fn list_notes(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let notes = db::list_notes(db.async_connection.clone(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(NotesResponse { notes }))
}

pub async fn get_note(
    db: web::Data<Arc<Database>>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ApiError> {
    let (course_id, note_id) = path.into_inner();

    let note = db::get_note(db.async_connection.clone(), course_id, note_id).await?;

    Ok(HttpResponse::Ok().json(note))
}

pub async fn create_note(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
    request: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let course_id = path.into_inner();
    let req = request.into_inner();
    require_text("question", &req.question)?;
    require_text("answer", &req.answer)?;

    let note = db::insert_note(db.async_connection.clone(), course_id, &req).await?;

    info!("Added note {} to course {}", note.id, course_id);
    Ok(HttpResponse::Created().json(note))
}

pub async fn update_note(
    db: web::Data<Arc<Database>>,
    path: web::Path<(i64, i64)>,
    request: web::Json<UpdateNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let (course_id, note_id) = path.into_inner();
    let req = request.into_inner();
    reject_blank("question", req.question.as_ref())?;
    reject_blank("answer", req.answer.as_ref())?;

    let note = db::update_note(db.async_connection.clone(), course_id, note_id, req).await?;

    info!("Updated note {} of course {}", note_id, course_id);
    Ok(HttpResponse::Ok().json(note))
}

pub async fn delete_note(
    db: web::Data<Arc<Database>>,
    gate: web::Data<AdminGate>,
    path: web::Path<(i64, i64)>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    gate.check(&req)?;
    let (course_id, note_id) = path.into_inner();

    db::delete_note(db.async_connection.clone(), course_id, note_id).await?;

    info!("Deleted note {} of course {}", note_id, course_id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Note deleted successfully")))
}
