//! Food catalog
//!
//! Static nutrition table and fuzzy lookup.

pub mod data;
pub mod matcher;

pub use matcher::{catalog, find_food, Catalog};
