//! Intermediate Representation module
//!
//! Linear three-address code: an append-only sequence of quadruples that a
//! later stage lowers to target code.

mod quad;
mod store;
mod temp;

pub use quad::{Quad, ASSIGN};
pub use store::{CapacityPolicy, CodeStore, DEFAULT_CAPACITY};
pub use temp::TempAllocator;
