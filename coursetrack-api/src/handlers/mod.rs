pub mod categories;
pub mod certificates;
pub mod courses;
pub mod error;
pub mod health;
pub mod notes;
pub mod projects;
pub mod skills;

pub use error::ApiError;
