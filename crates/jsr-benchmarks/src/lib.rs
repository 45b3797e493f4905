//! jsr-rs benchmarking suite
//!
//! Benchmarks for decoding registry documents and for the query helpers
//! that run over them.

pub mod common;

pub use common::*;
