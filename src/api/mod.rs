// API routes and handlers

pub mod catalog;
pub mod errors;
pub mod health;
pub mod routes;

pub use errors::ApiError;
pub use routes::{create_routes, AppState};
