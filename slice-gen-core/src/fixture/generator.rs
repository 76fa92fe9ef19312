use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::{write_lines, write_text};
use super::manifest::{FixtureKind, Manifest, ManifestEntry};
use super::plan::FixturePlan;
use super::sampler::{pick_offset, sample_offsets, slices_at};
use super::source::SourceText;

/// Writes slice and pattern fixtures cut from one source text.
///
/// # Responsibilities
/// - Own the source text and the random generator for a whole run
/// - Write each fixture file and record the offsets it was built from
///
/// All randomness flows from `seed`, so two generators built with the same
/// seed over the same source write identical files.
#[derive(Debug)]
pub struct FixtureGenerator {
	source: SourceText,
	seed: u64,
	rng: StdRng,
}

impl FixtureGenerator {
	/// Creates a generator over `source`.
	///
	/// When `seed` is `None`, a seed is drawn from the thread-local generator
	/// and kept so the run can be replayed later.
	pub fn new(source: SourceText, seed: Option<u64>) -> Self {
		let seed = seed.unwrap_or_else(|| rand::rng().random());
		debug!("Using seed {}", seed);
		Self { source, seed, rng: StdRng::seed_from_u64(seed) }
	}

	/// Loads the plan's source file and creates a generator with the plan's seed.
	///
	/// # Errors
	/// Returns an error if the source file cannot be read.
	pub fn from_plan(plan: &FixturePlan) -> Result<Self, Box<dyn std::error::Error>> {
		let source = SourceText::load(&plan.source)
			.map_err(|e| format!("Cannot read source {}: {}", plan.source.display(), e))?;
		info!("Loaded {} ({} characters)", plan.source.display(), source.len());
		Ok(Self::new(source, plan.seed))
	}

	pub fn seed(&self) -> u64 {
		self.seed
	}

	pub fn source(&self) -> &SourceText {
		&self.source
	}

	/// Writes one slice of `length` characters to `path`.
	///
	/// # Errors
	/// Returns an error if `length` exceeds the source or the write fails.
	pub fn write_slice<P: AsRef<Path>>(
		&mut self,
		path: P,
		length: usize,
	) -> Result<ManifestEntry, Box<dyn std::error::Error>> {
		let path = path.as_ref();
		let offset = pick_offset(self.source.len(), length, &mut self.rng)?;
		write_text(path, self.source.slice(offset, length)?)?;

		info!("Wrote {} (slice of {} at offset {})", path.display(), length, offset);
		Ok(ManifestEntry {
			path: path.to_path_buf(),
			kind: FixtureKind::Slice,
			length,
			offsets: vec![offset],
		})
	}

	/// Writes `count` patterns of `length` characters to `path`, one per line.
	///
	/// # Errors
	/// Returns an error if `length` exceeds the source or the write fails.
	pub fn write_patterns<P: AsRef<Path>>(
		&mut self,
		path: P,
		count: usize,
		length: usize,
	) -> Result<ManifestEntry, Box<dyn std::error::Error>> {
		let path = path.as_ref();
		let offsets = sample_offsets(self.source.len(), count, length, &mut self.rng)?;
		write_lines(path, &slices_at(&self.source, &offsets, length)?)?;

		info!("Wrote {} ({} patterns of {})", path.display(), count, length);
		debug!("Pattern offsets for {}: {:?}", path.display(), offsets);
		Ok(ManifestEntry {
			path: path.to_path_buf(),
			kind: FixtureKind::Patterns,
			length,
			offsets,
		})
	}

	/// Writes every fixture of `plan`: slice files first, then pattern files.
	///
	/// # Behavior
	/// - Files are written one after the other, in plan order.
	/// - The first failure stops the run: files already written stay on disk,
	///   later ones are not created.
	///
	/// # Notes
	/// - `plan.source` and `plan.seed` are not read here; they are used by
	///   `from_plan`. The plan is still copied into the manifest as given.
	pub fn run(&mut self, plan: &FixturePlan) -> Result<Manifest, Box<dyn std::error::Error>> {
		info!("Writing fixtures to {}", plan.out_dir.display());
		let mut manifest = Manifest::new(plan.clone(), self.seed, self.source.len());

		for length in &plan.slice_lengths {
			let entry = self.write_slice(plan.slice_path(*length), *length)?;
			manifest.entries.push(entry);
		}

		for length in &plan.pattern_lengths {
			let entry = self.write_patterns(plan.pattern_path(*length), plan.pattern_count, *length)?;
			manifest.entries.push(entry);
		}

		Ok(manifest)
	}
}
