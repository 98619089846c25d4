// src/endpoint/mod.rs
mod address;
mod service;

pub use address::{parse_bind_address, BindAddress};
pub use service::{collect_endpoints, Endpoint, ServiceKind};
