//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, capitalising a nuclide symbol or checking that a set of energy
//! group boundaries is strictly ascending are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod slice_ext;
mod string_ext;

// Flatten
pub use error::{Error, Result};
pub use slice_ext::SliceExt;
pub use string_ext::StringExt;
