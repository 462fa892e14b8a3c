//! Primitive types
//!
//! Primitives are simple, fixed-size, dependency-light building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full-featured
//! big-integer libraries.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer

mod u256;

/// Fixed-size unsigned integer primitive.
pub use u256::U256;
