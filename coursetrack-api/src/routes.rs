use actix_web::{error, web, HttpRequest, ResponseError};

use crate::handlers::{
    categories, certificates, courses, health, notes, projects, skills, ApiError,
};

/// Renders body errors in the same `{message, error}` shape as handler errors
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let response = ApiError::Validation(err.to_string()).error_response();
    error::InternalError::from_response(err, response).into()
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> error::Error {
    let response = ApiError::Validation(format!("Invalid id: {}", err)).error_response();
    error::InternalError::from_response(err, response).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let response = ApiError::Validation(err.to_string()).error_response();
    error::InternalError::from_response(err, response).into()
}

/// Registers every route. Shared by the server binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/health", web::get().to(health::health))
        // Courses and their notes
        .route("/courses", web::get().to(courses::list_courses))
        .route("/courses", web::post().to(courses::create_course))
        .route("/courses/{id}", web::get().to(courses::get_course))
        .route("/courses/{id}", web::put().to(courses::update_course))
        .route("/courses/{id}", web::delete().to(courses::delete_course))
        .route("/courses/{course_id}/notes", web::get().to(notes::list_notes))
        .route("/courses/{course_id}/notes", web::post().to(notes::create_note))
        .route("/courses/{course_id}/notes/{note_id}", web::get().to(notes::get_note))
        .route("/courses/{course_id}/notes/{note_id}", web::put().to(notes::update_note))
        .route("/courses/{course_id}/notes/{note_id}", web::delete().to(notes::delete_note))
        .route("/notes", web::get().to(notes::list_all_notes))
        // Progress checklist
        .route("/main-category", web::get().to(categories::list_categories))
        .route("/main-category", web::post().to(categories::create_category))
        .route("/main-category/{category_id}", web::get().to(categories::get_category))
        .route("/main-category/{category_id}", web::put().to(categories::update_category))
        .route("/main-category/{category_id}", web::delete().to(categories::delete_category))
        .route(
            "/main-category/{category_id}/progress",
            web::get().to(categories::get_category_progress),
        )
        .route(
            "/main-category/{category_id}/main-goal",
            web::post().to(categories::create_goal),
        )
        .route(
            "/main-category/{category_id}/main-goal/{goal_id}",
            web::put().to(categories::update_goal),
        )
        .route(
            "/main-category/{category_id}/main-goal/{goal_id}",
            web::delete().to(categories::delete_goal),
        )
        .route(
            "/main-category/{category_id}/main-goal/{goal_id}/sub-goal",
            web::post().to(categories::create_sub_goal),
        )
        .route(
            "/main-category/{category_id}/main-goal/{goal_id}/sub-goal/{sub_goal_id}",
            web::put().to(categories::update_sub_goal),
        )
        .route(
            "/main-category/{category_id}/main-goal/{goal_id}/sub-goal/{sub_goal_id}",
            web::delete().to(categories::delete_sub_goal),
        )
        .route("/progress", web::get().to(categories::get_overall_progress))
        // Certificates, skills, projects
        .route("/certificate", web::get().to(certificates::list_certificates))
        .route("/certificate", web::post().to(certificates::create_certificate))
        .route("/certificate/{id}", web::get().to(certificates::get_certificate))
        .route("/certificate/{id}", web::delete().to(certificates::delete_certificate))
        .route("/skill", web::get().to(skills::list_skills))
        .route("/skill", web::post().to(skills::create_skill))
        .route("/skill/{id}", web::get().to(skills::get_skill))
        .route("/skill/{id}", web::put().to(skills::update_skill))
        .route("/skill/{id}", web::delete().to(skills::delete_skill))
        .route("/project", web::get().to(projects::list_projects))
        .route("/project", web::post().to(projects::create_project))
        .route("/project/{id}", web::get().to(projects::get_project))
        .route("/project/{id}", web::put().to(projects::update_project))
        .route("/project/{id}", web::delete().to(projects::delete_project));
}
