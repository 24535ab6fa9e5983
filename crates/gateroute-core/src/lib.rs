//! **gateroute-core**: core types shared by the gateroute crates.
//!
//! This crate provides geometry primitives, the immutable terrain grid that
//! maps are made of, and the cost tables that give each terrain symbol its
//! traversal cost.

pub mod costs;
pub mod geom;
pub mod terrain;

pub use costs::{Cost, CostTable};
pub use geom::{Point, Range};
pub use terrain::{GridError, SymbolGrid};
