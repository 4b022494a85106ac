//! Chart aggregate: the figure model, its value objects and the assembler.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
