//! Application layer: use cases composed from the domain and infrastructure

pub mod use_cases;
