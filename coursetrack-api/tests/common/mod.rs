use coursetrack_api::Database;
use std::sync::Arc;
use tempfile::TempDir;

/// Fresh SQLite database in a temporary directory
#[allow(dead_code)]
pub struct TestDb {
    _temp_dir: TempDir,
    pub db: Arc<Database>,
}

impl TestDb {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let db = Database::new(&temp_dir.path().join("coursetrack.sqlite3"))
            .expect("Failed to open test database");

        Self {
            _temp_dir: temp_dir,
            db: Arc::new(db),
        }
    }
}

/// Builds the full application around a test database, optionally with an
/// admin gate.
macro_rules! test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::new(
                    coursetrack_api::helpers::admin_gate::AdminGate::default(),
                ))
                .configure(coursetrack_api::routes::configure),
        )
        .await
    };
    ($db:expr, $gate:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::new($gate))
                .configure(coursetrack_api::routes::configure),
        )
        .await
    };
}
