//! Domain layer for the weather.gov client
//!
//! Value objects and entities describing weather observations, forecasts and
//! alerts. Everything here is a plain value with pure derived predicates; no
//! type in this crate performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
