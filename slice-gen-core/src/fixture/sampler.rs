use rand::Rng;

use super::source::SourceText;

/// Fails when a slice of `length` characters cannot fit in the source.
fn check_length(source_len: usize, length: usize) -> Result<(), String> {
	if length > source_len {
		return Err(format!(
			"Requested length {} exceeds source length {}",
			length, source_len
		));
	}
	Ok(())
}

/// Draws a uniformly random start offset for a slice of `length` characters.
///
/// The offset lies in `[0, source_len - length]`, both ends included.
///
/// # Errors
/// Returns an error if `length > source_len`.
pub fn pick_offset<R: Rng + ?Sized>(
	source_len: usize,
	length: usize,
	rng: &mut R,
) -> Result<usize, String> {
	check_length(source_len, length)?;
	Ok(rng.random_range(0..=source_len - length))
}

/// Draws `count` independent start offsets, with replacement.
///
/// # Errors
/// Returns an error if `length > source_len`, even when `count` is 0.
pub fn sample_offsets<R: Rng + ?Sized>(
	source_len: usize,
	count: usize,
	length: usize,
	rng: &mut R,
) -> Result<Vec<usize>, String> {
	check_length(source_len, length)?;
	Ok((0..count)
		.map(|_| rng.random_range(0..=source_len - length))
		.collect())
}

/// Cuts one slice of `length` characters per offset, keeping offset order.
pub fn slices_at<'a>(
	source: &'a SourceText,
	offsets: &[usize],
	length: usize,
) -> Result<Vec<&'a str>, String> {
	offsets
		.iter()
		.map(|offset| source.slice(*offset, length))
		.collect()
}

/// Extracts one contiguous slice of `length` characters at a random offset.
///
/// Requesting the full source length always returns the whole source.
pub fn extract_slice<'a, R: Rng + ?Sized>(
	source: &'a SourceText,
	length: usize,
	rng: &mut R,
) -> Result<&'a str, String> {
	let offset = pick_offset(source.len(), length, rng)?;
	source.slice(offset, length)
}

/// Samples `count` patterns of `length` characters, in generation order.
///
/// Patterns are drawn independently: they may overlap and duplicates are kept.
pub fn sample_patterns<'a, R: Rng + ?Sized>(
	source: &'a SourceText,
	count: usize,
	length: usize,
	rng: &mut R,
) -> Result<Vec<&'a str>, String> {
	let offsets = sample_offsets(source.len(), count, length, rng)?;
	slices_at(source, &offsets, length)
}
