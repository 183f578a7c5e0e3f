// minecraft-check - lib.rs
//
// Library entry point, exposing all non-binary modules for integration
// testing and potential future programmatic use.

pub mod core;
pub mod platform;
pub mod report;
pub mod util;
