pub mod dashboard_service;
pub mod use_cases;

pub use dashboard_service::*;
pub use use_cases::*;
