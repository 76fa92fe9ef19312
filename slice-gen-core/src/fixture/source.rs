use std::path::Path;

use crate::io::read_text;

/// Immutable source text that fixtures are cut from.
///
/// Lengths and offsets are counted in characters, not bytes, so a slice of
/// length `n` always holds `n` characters whatever the encoding width.
///
/// # Invariants
/// - `text` never changes after construction
/// - When present, `boundaries` holds the byte offset of every character
///   followed by `text.len()`, so it has `len() + 1` entries
#[derive(Debug, Clone)]
pub struct SourceText {
	text: String,
	/// Byte offsets of each character. `None` for pure ASCII text,
	/// where character and byte offsets coincide.
	boundaries: Option<Vec<usize>>,
}

impl SourceText {
	/// Wraps an in-memory string.
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into();
		let boundaries = if text.is_ascii() {
			None
		} else {
			Some(
				text.char_indices()
					.map(|(i, _)| i)
					.chain(std::iter::once(text.len()))
					.collect(),
			)
		};
		Self { text, boundaries }
	}

	/// Loads a source file fully into memory.
	///
	/// Line endings are normalized to `\n`, then surrounding whitespace and
	/// newlines are stripped.
	pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
		let text = read_text(path)?;
		Ok(Self::new(text.trim()))
	}

	/// Number of characters in the source.
	pub fn len(&self) -> usize {
		match &self.boundaries {
			Some(b) => b.len() - 1,
			None => self.text.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// Returns the `length` characters starting at character `offset`.
	///
	/// # Errors
	/// Returns an error if the range runs past the end of the source.
	pub fn slice(&self, offset: usize, length: usize) -> Result<&str, String> {
		let end = offset
			.checked_add(length)
			.filter(|end| *end <= self.len())
			.ok_or_else(|| {
				format!(
					"Slice {}..{} out of range for source of length {}",
					offset,
					offset.saturating_add(length),
					self.len()
				)
			})?;

		Ok(match &self.boundaries {
			Some(b) => &self.text[b[offset]..b[end]],
			None => &self.text[offset..end],
		})
	}
}
