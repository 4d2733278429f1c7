//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod temperature;
mod wind;

pub use coordinates::{Coordinates, InvalidCoordinates};
pub use temperature::{Temperature, TemperatureUnit};
pub use wind::Wind;
