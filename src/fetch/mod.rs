pub mod client;
pub mod error;

pub use client::{build_client, probe_registry, spawn_load, LoadOutcome, ProbeReport};
pub use error::FetchError;
