use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::plan::FixturePlan;
use super::source::SourceText;

/// Kind of fixture file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureKind {
	/// A single slice, written verbatim.
	Slice,
	/// Several patterns, one per line.
	Patterns,
}

/// One written file and the offsets that produced it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ManifestEntry {
	pub path: PathBuf,
	pub kind: FixtureKind,
	/// Length of every slice in the file, in characters.
	pub length: usize,
	/// Start offsets in generation order. Holds exactly one offset for a `Slice`.
	pub offsets: Vec<usize>,
}

impl ManifestEntry {
	/// Rebuilds the slices of this entry from the source they were cut from.
	///
	/// # Errors
	/// Returns an error if an offset does not fit the given source.
	pub fn contents<'a>(&self, source: &'a SourceText) -> Result<Vec<&'a str>, String> {
		self.offsets
			.iter()
			.map(|offset| source.slice(*offset, self.length))
			.collect()
	}
}

/// Record of one fixture run.
///
/// Together with the source file, the seed is enough to replay the run, and
/// the offsets are enough to audit it without replaying.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Manifest {
	/// Plan the run was started with.
	pub plan: FixturePlan,
	/// Seed actually used, even when none was configured.
	pub seed: u64,
	/// Length of the (trimmed) source, in characters.
	pub source_len: usize,
	/// Files in the order they were written.
	pub entries: Vec<ManifestEntry>,
}

impl Manifest {
	pub fn new(plan: FixturePlan, seed: u64, source_len: usize) -> Self {
		Self { plan, seed, source_len, entries: Vec::new() }
	}

	/// Serializes the manifest to `path` with `postcard`.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(path, bytes)?;
		Ok(())
	}

	/// Loads a manifest previously written by `save`.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
		let bytes = std::fs::read(path)?;
		Ok(postcard::from_bytes(&bytes)?)
	}
}
