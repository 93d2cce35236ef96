//! # Rochambeau
//!
//! Headless runner for the cyclic-dominance arena engine in
//! [`rochambeau_core`]. The binary wires configuration, logging and the
//! stepping driver together; this library exposes the same pieces for tests
//! and embedding.

pub mod app;

pub use rochambeau_core as engine;
pub use rochambeau_data as data;
