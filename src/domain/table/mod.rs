//! Table aggregate: one page of (adjusted close, ticker) rows for the selection.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
