#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::TestDb;
use coursetrack_api::helpers::admin_gate::{AdminGate, ADMIN_PASSWORD_HEADER};
use serde_json::{json, Value};
use shared_types::{
    Certificate, CertificatesResponse, Course, ErrorResponse, MessageResponse, Project,
    ProjectsResponse, Skill, SkillLevel, SkillsResponse,
};

#[actix_web::test]
async fn certificate_lifecycle() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let mut ids = Vec::new();
    for course_name in ["Rust Fundamentals", "Async Rust"] {
        let req = test::TestRequest::post()
            .uri("/certificate")
            .set_json(json!({
                "image_url": format!("https://img.example.com/{}.png", course_name.len()),
                "course_name": course_name
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let certificate: Certificate = test::read_body_json(resp).await;
        ids.push(certificate.id);
    }

    let req = test::TestRequest::get().uri("/certificate").to_request();
    let listed: CertificatesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.certificates.len(), 2);
    assert_eq!(listed.certificates[0].course_name, "Async Rust");

    let req = test::TestRequest::get()
        .uri(&format!("/certificate/{}", ids[0]))
        .to_request();
    let fetched: Certificate = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.course_name, "Rust Fundamentals");

    let req = test::TestRequest::delete()
        .uri(&format!("/certificate/{}", ids[0]))
        .to_request();
    let body: MessageResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.message, "Certificate deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/certificate/{}", ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Certificate not found");
    assert_eq!(body.error, "Not Found");
}

#[actix_web::test]
async fn certificate_requires_image_url() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let req = test::TestRequest::post()
        .uri("/certificate")
        .set_json(json!({ "image_url": "", "course_name": "Go" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "image_url is required");
}

#[actix_web::test]
async fn skills_are_unique_by_name() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let req = test::TestRequest::post()
        .uri("/skill")
        .set_json(json!({ "name": "Rust", "icon": "SiRust" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let rust: Skill = test::read_body_json(resp).await;
    assert_eq!(rust.level, SkillLevel::Beginner);
    assert_eq!(rust.icon.as_deref(), Some("SiRust"));

    let req = test::TestRequest::post()
        .uri("/skill")
        .set_json(json!({ "name": "Rust", "level": "expert" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "A skill with this name already exists");

    let req = test::TestRequest::post()
        .uri("/skill")
        .set_json(json!({ "name": "actix", "level": "intermediate" }))
        .to_request();
    let actix: Skill = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/skill/{}", actix.id))
        .set_json(json!({ "name": "Rust" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/skill/{}", rust.id))
        .set_json(json!({ "level": "advanced", "description": "Ownership, traits, async" }))
        .to_request();
    let updated: Skill = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.level, SkillLevel::Advanced);
    assert_eq!(updated.name, "Rust");
    assert_eq!(updated.description.as_deref(), Some("Ownership, traits, async"));

    let req = test::TestRequest::get().uri("/skill").to_request();
    let listed: SkillsResponse = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = listed.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["actix", "Rust"]);
}

#[actix_web::test]
async fn skill_rejects_unknown_level() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let req = test::TestRequest::post()
        .uri("/skill")
        .set_json(json!({ "name": "SQL", "level": "wizard" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Bad Request");
}

#[actix_web::test]
async fn skill_get_and_delete() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let req = test::TestRequest::post()
        .uri("/skill")
        .set_json(json!({ "name": "SQLite", "level": "intermediate", "description": "Embedded SQL" }))
        .to_request();
    let created: Skill = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/skill/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Skill = test::read_body_json(resp).await;
    assert_eq!(fetched.name, "SQLite");
    assert_eq!(fetched.level, SkillLevel::Intermediate);

    let req = test::TestRequest::delete()
        .uri(&format!("/skill/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Skill deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/skill/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Skill not found");

    let req = test::TestRequest::delete()
        .uri(&format!("/skill/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/skill").to_request();
    let listed: SkillsResponse = test::call_and_read_body_json(&app, req).await;
    assert!(listed.skills.is_empty());
}

#[actix_web::test]
async fn explicit_null_clears_optional_fields() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let req = test::TestRequest::post()
        .uri("/project")
        .set_json(json!({
            "title": "Portfolio",
            "description": "Personal site",
            "live_link": "https://portfolio.example.com"
        }))
        .to_request();
    let project: Project = test::call_and_read_body_json(&app, req).await;
    assert!(project.live_link.is_some());

    let req = test::TestRequest::put()
        .uri(&format!("/project/{}", project.id))
        .set_json(json!({ "live_link": null }))
        .to_request();
    let updated: Project = test::call_and_read_body_json(&app, req).await;
    assert!(updated.live_link.is_none());
    assert_eq!(updated.description.as_deref(), Some("Personal site"));

    let req = test::TestRequest::post()
        .uri("/skill")
        .set_json(json!({ "name": "Docker", "icon": "SiDocker" }))
        .to_request();
    let skill: Skill = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/skill/{}", skill.id))
        .set_json(json!({ "icon": null }))
        .to_request();
    let updated: Skill = test::call_and_read_body_json(&app, req).await;
    assert!(updated.icon.is_none());
    assert_eq!(updated.name, "Docker");

    let req = test::TestRequest::post()
        .uri("/courses")
        .set_json(json!({ "name": "Kubernetes", "category": "DevOps", "subcategory": "Containers" }))
        .to_request();
    let course: Course = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/courses/{}", course.id))
        .set_json(json!({ "subcategory": null }))
        .to_request();
    let updated: Course = test::call_and_read_body_json(&app, req).await;
    assert!(updated.subcategory.is_none());
    assert_eq!(updated.category.as_deref(), Some("DevOps"));
}

#[actix_web::test]
async fn project_lifecycle() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let req = test::TestRequest::post()
        .uri("/project")
        .set_json(json!({
            "title": "Link shortener",
            "description": "Tiny URL service",
            "tech": ["rust", "sqlite"],
            "github_link": "https://github.com/someone/shortener"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let project: Project = test::read_body_json(resp).await;
    assert_eq!(project.tech, vec!["rust", "sqlite"]);
    assert!(project.live_link.is_none());

    let req = test::TestRequest::put()
        .uri(&format!("/project/{}", project.id))
        .set_json(json!({ "live_link": "https://sho.rt", "tech": ["rust", "sqlite", "actix"] }))
        .to_request();
    let updated: Project = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.title, "Link shortener");
    assert_eq!(updated.live_link.as_deref(), Some("https://sho.rt"));
    assert_eq!(updated.tech.len(), 3);

    let req = test::TestRequest::get().uri("/project").to_request();
    let listed: ProjectsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.projects.len(), 1);

    let req = test::TestRequest::put()
        .uri(&format!("/project/{}", project.id))
        .set_json(json!({ "title": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/project/{}", project.id))
        .to_request();
    let body: MessageResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.message, "Project deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/project/{}", project.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_reports_connected_database() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[actix_web::test]
async fn deletes_require_admin_password_when_configured() {
    let test_db = TestDb::new();
    let app = test_app!(
        test_db.db,
        AdminGate::new(Some("let-me-delete".to_string()))
    );

    let req = test::TestRequest::post()
        .uri("/courses")
        .set_json(json!({ "name": "Kept course" }))
        .to_request();
    let course: Course = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/courses/{}", course.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Unauthorized");

    let req = test::TestRequest::delete()
        .uri(&format!("/courses/{}", course.id))
        .insert_header((ADMIN_PASSWORD_HEADER, "wrong"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri(&format!("/courses/{}", course.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/courses/{}", course.id))
        .insert_header((ADMIN_PASSWORD_HEADER, "let-me-delete"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let test_db = TestDb::new();
    let app = test_app!(test_db.db);

    let req = test::TestRequest::post()
        .uri("/project")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Bad Request");
}
