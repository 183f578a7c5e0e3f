// minecraft-check - core/mod.rs
//
// Core scanning logic layer.
// Must NOT depend on: report, platform, or any network crate.

pub mod filter;
pub mod model;
pub mod parser;
pub mod scan;
