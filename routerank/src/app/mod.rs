pub mod analyze;
mod app_error;
pub mod report;
mod routerank_app;

pub use app_error::AppError;
pub use routerank_app::{App, RouterankAppArguments};
