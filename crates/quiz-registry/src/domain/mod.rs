//! # Domain Module
//!
//! Pure business logic for the Quiz Registry: persistent records, value
//! objects, validation invariants, and error types. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
