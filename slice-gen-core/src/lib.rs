//! Random substring fixture generation library.
//!
//! This crate provides the pieces needed to build test data for
//! string-search benchmarks:
//! - Loading a large source text once
//! - Extracting random contiguous slices of fixed lengths
//! - Sampling many fixed-length patterns with replacement
//! - Recording runs so they can be replayed from a seed
//!
//! The `slice-gen` binary drives these from the command line.

/// Source loading, sampling, run plan, generator and manifest.
pub mod fixture;

/// I/O utilities (text reading, fixture writing, path helpers).
pub mod io;
