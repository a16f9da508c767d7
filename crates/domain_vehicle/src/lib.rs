//! Vehicle Domain
//!
//! Vehicles are the parent records of the system: every policy and every
//! claim belongs to exactly one vehicle. Derived queries check that the
//! vehicle exists before looking at anything else.

pub mod vehicle;
pub mod ports;

pub use vehicle::{Vehicle, Owner};
pub use ports::VehiclePort;
