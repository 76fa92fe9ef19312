use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::io::build_output_path;

/// Default source file name.
pub const DEFAULT_SOURCE: &str = "string1000000.txt";

/// Default lengths of the single-slice files.
pub const DEFAULT_SLICE_LENGTHS: [usize; 6] = [500_000, 100_000, 50_000, 10_000, 5_000, 1_000];

/// Default lengths of the pattern files.
pub const DEFAULT_PATTERN_LENGTHS: [usize; 5] = [500, 400, 300, 200, 100];

/// Default number of patterns written per pattern file.
pub const DEFAULT_PATTERN_COUNT: usize = 100;

/// Everything a fixture run needs to know, apart from the source content.
///
/// # Invariants
/// - Slice files are written in `slice_lengths` order, then pattern files
///   in `pattern_lengths` order
/// - Output file names depend only on the lengths, never on the content
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FixturePlan {
	/// Source text file.
	pub source: PathBuf,

	/// Folder receiving every generated file.
	pub out_dir: PathBuf,

	/// One `string{L}.txt` file is written per entry.
	pub slice_lengths: Vec<usize>,

	/// One `patterns{L}.txt` file is written per entry.
	pub pattern_lengths: Vec<usize>,

	/// Number of lines in each pattern file.
	pub pattern_count: usize,

	/// Seed for the random generator. `None` draws one from the OS.
	pub seed: Option<u64>,
}

impl Default for FixturePlan {
	fn default() -> Self {
		Self {
			source: PathBuf::from(DEFAULT_SOURCE),
			out_dir: PathBuf::from("."),
			slice_lengths: DEFAULT_SLICE_LENGTHS.to_vec(),
			pattern_lengths: DEFAULT_PATTERN_LENGTHS.to_vec(),
			pattern_count: DEFAULT_PATTERN_COUNT,
			seed: None,
		}
	}
}

impl FixturePlan {
	/// Path of the slice file for `length`: `{out_dir}/string{length}.txt`.
	pub fn slice_path(&self, length: usize) -> PathBuf {
		build_output_path(&self.out_dir, "string", length, "txt")
	}

	/// Path of the pattern file for `length`: `{out_dir}/patterns{length}.txt`.
	pub fn pattern_path(&self, length: usize) -> PathBuf {
		build_output_path(&self.out_dir, "patterns", length, "txt")
	}

	/// All output paths in the order they are written.
	pub fn output_paths(&self) -> Vec<PathBuf> {
		self.slice_lengths
			.iter()
			.map(|l| self.slice_path(*l))
			.chain(self.pattern_lengths.iter().map(|l| self.pattern_path(*l)))
			.collect()
	}
}
