//! Optimal itineraries through a world grid and its gated sub-areas.
//!
//! A journey starts on the world grid, visits every [`SubArea`] exactly once
//! (walk to its gate, go from its entry to its target and back), then ends at
//! a fixed destination. [`RouteOptimizer`] tries every visiting order and
//! returns the cheapest as an [`Itinerary`].
//!
//! # Features
//!
//! - `parallel`: evaluate visiting orders on a `rayon` thread pool.
//! - `serde`: `Serialize`/`Deserialize` for [`Itinerary`], [`Leg`] and
//!   [`GridId`].

mod error;
mod itinerary;
mod legs;
mod optimizer;
mod permutations;
mod subarea;

pub use error::RouteError;
pub use itinerary::{Itinerary, Leg, cost_at};
pub use legs::LegTable;
pub use optimizer::{RouteOptimizer, find_optimal_itinerary};
pub use permutations::Permutations;
pub use subarea::{GridId, SubArea};
