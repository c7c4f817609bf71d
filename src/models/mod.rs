// Stored records and their wire projections

pub mod gym;
pub mod package;
pub mod product;
pub mod projection;
pub mod workout_session;

pub use gym::*;
pub use package::*;
pub use product::*;
pub use projection::{project_all, Projection};
pub use workout_session::*;
