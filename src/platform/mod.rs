// minecraft-check - platform/mod.rs
//
// Platform integration: config directory resolution and settings loading.

pub mod config;
