// Linkfolio - app/mod.rs
//
// Application layer: the profile store and its persistence.
// Dependencies: core layer, platform paths.

pub mod persist;
pub mod store;
