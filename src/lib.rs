// src/lib.rs
//! Liveness probing for a tracker's configured API, HTTP and UDP bindings.
pub mod checker;
pub mod config;
pub mod endpoint;
pub mod probe;
