//! # Collections
//!
//! Generic container types shared by the domain model and the HTTP engine.

mod map;

pub use map::CollectionMap;
