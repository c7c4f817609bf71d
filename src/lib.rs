pub mod api;
pub mod config;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
