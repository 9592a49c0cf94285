//! Isochrone computation
//!
//! An isochrone here is a circle: average speed of the transport mode times
//! the time budget, centered on the geocoded location. [`radius`] does the
//! arithmetic; [`Planner`] runs the whole search flow.

pub mod planner;
pub mod radius;

pub use planner::Planner;
pub use radius::{format_radius, radius, radius_for};
