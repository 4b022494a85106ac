//! Market data aggregate: price records, the loaded table and the user's ticker selection.

pub mod entities;
pub mod repositories;
pub mod selection;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use selection::*;
pub use value_objects::*;
