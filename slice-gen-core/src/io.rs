use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Reads a whole UTF-8 text file into memory.
///
/// Line endings are normalized: `\r\n` and lone `\r` both become `\n`.
/// Trimming is left to the caller.
pub fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	if contents.contains('\r') {
		contents = contents.replace("\r\n", "\n").replace('\r', "\n");
	}
	Ok(contents)
}

/// Overwrites `path` with `content` exactly.
///
/// No newline is appended.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
	let mut file = File::create(path)?;
	file.write_all(content.as_bytes())?;
	file.flush()
}

/// Overwrites `path` with one entry per line.
///
/// Every entry, including the last one, is followed by `\n`.
pub fn write_lines<P, S>(path: P, lines: &[S]) -> io::Result<()>
where
	P: AsRef<Path>,
	S: AsRef<str>,
{
	let mut writer = BufWriter::new(File::create(path)?);
	for line in lines {
		writer.write_all(line.as_ref().as_bytes())?;
		writer.write_all(b"\n")?;
	}
	writer.flush()
}

/// Builds a fixture path from a folder, a file stem, a length and an extension.
///
/// Example:
/// `data` + `"string"` + `1000` + `"txt"` → `data/string1000.txt`
pub fn build_output_path<P: AsRef<Path>>(
	folder: P,
	stem: &str,
	length: usize,
	extension: &str,
) -> PathBuf {
	let mut output = folder.as_ref().join(format!("{stem}{length}"));
	output.set_extension(extension);
	output
}
