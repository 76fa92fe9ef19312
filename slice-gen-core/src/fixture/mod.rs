//! Fixture generation for string-search benchmarks.
//!
//! This module cuts fixtures out of one large source text:
//! - Single contiguous slices (`string{L}.txt`)
//! - Files of independently sampled patterns (`patterns{L}.txt`)
//! - An optional manifest recording the seed and offsets of a run

/// Run driver writing every fixture of a plan.
///
/// Owns the source and a seeded random generator, so a run can be replayed.
pub mod generator;

/// Record of a run (seed, files, offsets), serialized with `postcard`.
pub mod manifest;

/// Run configuration: source, output folder, lengths, count, seed.
pub mod plan;

/// Random offset draws, slice extraction and pattern sampling.
///
/// Every function takes the random generator explicitly.
pub mod sampler;

/// Character-indexed, immutable source text.
pub mod source;
