// src/services/mod.rs
pub mod normalizer;
pub mod session;
pub mod upstream;
