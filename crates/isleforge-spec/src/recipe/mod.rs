//! Recipe types.
//!
//! A recipe is the declarative half of a generation request: everything the
//! noise library and the terrain synthesizer need, except the seed.

pub mod heightmap;
pub mod noise;

pub use heightmap::*;
pub use noise::*;
