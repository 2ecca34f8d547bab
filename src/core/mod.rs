// Linkfolio - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library and serde only.
// Must NOT depend on: platform, app, or any I/O crate directly.

pub mod catalog;
pub mod filter;
pub mod model;
pub mod share;
