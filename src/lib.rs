// Linkfolio - lib.rs
//
// Library entry point: the headless logic layer of the Link portfolio
// app. The embedding shell constructs a `ProfileStore` at startup, runs
// discovery queries over its feed, and renders the results; everything
// visual stays on the shell's side of the boundary.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
