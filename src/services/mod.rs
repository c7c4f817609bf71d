// Query building and the catalog listing pipeline

pub mod catalog_service;
pub mod filters;

pub use catalog_service::CatalogService;
pub use filters::{DashboardWindow, GymFilter, GymQuery, ProductFilter, ProductQuery};
