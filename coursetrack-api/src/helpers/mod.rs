pub mod admin_gate;
pub mod database;
pub mod progress;
