pub mod http_handlers;
pub mod panel_service;

pub use http_handlers::*;
pub use panel_service::*;
