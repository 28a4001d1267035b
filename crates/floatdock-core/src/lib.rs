//! Pure math/data for the floating panel
//!
//! This crate contains the geometry primitives, density-independent unit
//! types, pointer event types, and the position bound function shared by the
//! rest of Floatdock. Nothing here holds state or talks to a host.

mod bounds;
mod geometry;
mod pointer;
mod unit;

pub use bounds::*;
pub use geometry::*;
pub use pointer::*;
pub use unit::*;
