//! Dimension-aware scalar quantities for the metra linear algebra crates
//!
//! Provides type-level physical dimensions, unit-tagged quantities, and the element traits
//! shared by the vector and matrix types.

pub mod dimension;
pub mod quantity;
pub mod traits;
pub mod unit;

pub use dimension::{Compose, Dim, Dimension, Divide, Inverse, Product, Quotient, dims};
pub use quantity::{
    Acceleration, Angle, AngularAcceleration, AngularMomentum, AngularVelocity, Area, Density,
    Energy, Force, Frequency, FrequencyRate, Length, Mass, MomentOfInertia, Momentum, Power,
    Pressure, Quantity, Ratio, Temperature, Time, Torque, Velocity, Volume,
};
pub use traits::{CastFrom, Scalar};
pub use unit::Unit;
