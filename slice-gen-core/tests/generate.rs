use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slice_gen_core::fixture::generator::FixtureGenerator;
use slice_gen_core::fixture::manifest::{FixtureKind, Manifest};
use slice_gen_core::fixture::plan::FixturePlan;
use slice_gen_core::fixture::source::SourceText;

/// Writes a random lowercase source of `len` characters, followed by a newline.
fn write_source(dir: &Path, len: usize) -> String {
	let mut rng = StdRng::seed_from_u64(2024);
	let text: String = (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect();
	fs::write(dir.join("source.txt"), format!("{text}\n")).unwrap();
	text
}

fn small_plan(dir: &Path, seed: Option<u64>) -> FixturePlan {
	FixturePlan {
		source: dir.join("source.txt"),
		out_dir: dir.to_path_buf(),
		slice_lengths: vec![2_000, 1_500, 10],
		pattern_lengths: vec![50, 1],
		pattern_count: 100,
		seed,
	}
}

#[test]
fn slices_and_patterns_are_substrings_of_the_source() {
	let dir = tempfile::tempdir().unwrap();
	let text = write_source(dir.path(), 2_000);
	let plan = small_plan(dir.path(), None);

	let mut generator = FixtureGenerator::from_plan(&plan).unwrap();
	generator.run(&plan).unwrap();

	for length in &plan.slice_lengths {
		let slice = fs::read_to_string(plan.slice_path(*length)).unwrap();
		assert_eq!(slice.chars().count(), *length);
		assert!(text.contains(&slice));
	}
	// Full source length always yields the whole (trimmed) source.
	assert_eq!(fs::read_to_string(plan.slice_path(2_000)).unwrap(), text);

	for length in &plan.pattern_lengths {
		let content = fs::read_to_string(plan.pattern_path(*length)).unwrap();
		assert!(content.ends_with('\n'));
		let lines: Vec<&str> = content.lines().collect();
		assert_eq!(lines.len(), 100);
		for line in lines {
			assert_eq!(line.chars().count(), *length);
			assert!(text.contains(line));
		}
	}
}

#[test]
fn same_seed_writes_identical_files() {
	let first = tempfile::tempdir().unwrap();
	let second = tempfile::tempdir().unwrap();
	write_source(first.path(), 3_000);
	write_source(second.path(), 3_000);

	for dir in [first.path(), second.path()] {
		let plan = small_plan(dir, Some(11));
		FixtureGenerator::from_plan(&plan).unwrap().run(&plan).unwrap();
	}

	let a = small_plan(first.path(), Some(11));
	let b = small_plan(second.path(), Some(11));
	for (left, right) in a.output_paths().iter().zip(b.output_paths()) {
		assert_eq!(fs::read(left).unwrap(), fs::read(right).unwrap());
	}
}

#[test]
fn reruns_keep_names_and_lengths() {
	let dir = tempfile::tempdir().unwrap();
	write_source(dir.path(), 2_500);
	let plan = small_plan(dir.path(), None);

	let mut sizes = Vec::new();
	for _ in 0..2 {
		FixtureGenerator::from_plan(&plan).unwrap().run(&plan).unwrap();
		let run: Vec<u64> = plan
			.output_paths()
			.iter()
			.map(|p| fs::metadata(p).unwrap().len())
			.collect();
		sizes.push(run);
	}
	assert_eq!(sizes[0], sizes[1]);
}

#[test]
fn manifest_replays_written_content() {
	let dir = tempfile::tempdir().unwrap();
	write_source(dir.path(), 2_000);
	let plan = small_plan(dir.path(), Some(5));

	let mut generator = FixtureGenerator::from_plan(&plan).unwrap();
	let manifest = generator.run(&plan).unwrap();
	let manifest_path = dir.path().join("fixtures.manifest");
	manifest.save(&manifest_path).unwrap();

	let loaded = Manifest::load(&manifest_path).unwrap();
	assert_eq!(loaded, manifest);
	assert_eq!(loaded.plan, plan);
	assert_eq!(loaded.seed, 5);
	assert_eq!(loaded.source_len, 2_000);
	assert_eq!(loaded.entries.len(), 5);

	let source = SourceText::load(&plan.source).unwrap();
	for entry in &loaded.entries {
		let parts = entry.contents(&source).unwrap();
		let written = fs::read_to_string(&entry.path).unwrap();
		match entry.kind {
			FixtureKind::Slice => assert_eq!(written, parts.concat()),
			FixtureKind::Patterns => assert_eq!(written.lines().collect::<Vec<_>>(), parts),
		}
	}
}

#[test]
fn failure_keeps_earlier_files_and_skips_later_ones() {
	let dir = tempfile::tempdir().unwrap();
	write_source(dir.path(), 100);
	let plan = FixturePlan {
		slice_lengths: vec![10, 500, 20],
		pattern_lengths: vec![5],
		..small_plan(dir.path(), Some(1))
	};

	let mut generator = FixtureGenerator::from_plan(&plan).unwrap();
	assert!(generator.run(&plan).is_err());

	assert!(plan.slice_path(10).exists());
	assert!(!plan.slice_path(500).exists());
	assert!(!plan.slice_path(20).exists());
	assert!(!plan.pattern_path(5).exists());
}

#[test]
fn missing_source_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let plan = small_plan(dir.path(), None);
	assert!(FixtureGenerator::from_plan(&plan).is_err());
}

#[test]
fn unwritable_output_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	write_source(dir.path(), 200);
	let plan = FixturePlan {
		out_dir: dir.path().join("does-not-exist"),
		slice_lengths: vec![10],
		..small_plan(dir.path(), Some(3))
	};

	let mut generator = FixtureGenerator::from_plan(&plan).unwrap();
	assert!(generator.run(&plan).is_err());
}

#[test]
fn default_plan_writes_the_benchmark_fixture_set() {
	let dir = tempfile::tempdir().unwrap();
	let text = write_source(dir.path(), 1_000_000);
	let plan = FixturePlan {
		source: dir.path().join("source.txt"),
		out_dir: dir.path().to_path_buf(),
		seed: Some(1_000_000),
		..FixturePlan::default()
	};

	let manifest = FixtureGenerator::from_plan(&plan).unwrap().run(&plan).unwrap();
	assert_eq!(manifest.entries.len(), 11);

	for length in [500_000, 100_000, 50_000, 10_000, 5_000, 1_000] {
		let slice = fs::read_to_string(dir.path().join(format!("string{length}.txt"))).unwrap();
		assert_eq!(slice.len(), length);
		assert!(text.contains(&slice));
	}
	for length in [500, 400, 300, 200, 100] {
		let content = fs::read_to_string(dir.path().join(format!("patterns{length}.txt"))).unwrap();
		assert_eq!(content.lines().count(), 100);
		assert!(content.lines().all(|l| l.len() == length));
	}
}
