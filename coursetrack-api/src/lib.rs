pub mod config;
pub mod database;
pub mod handlers;
pub mod helpers;
pub mod routes;

pub use database::Database;
