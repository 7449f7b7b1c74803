// Copyright 2025 Gabriel Bjørnager Jensen.

//! Decodes a text file into runes, prints them, and encodes them back into `<path>.out`.

use std::env::args_os;
use std::error::Error;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use utf8codec::{MAX_SEQUENCE_LEN, Rune, Runes, encode};

fn read_runes(path: &Path) -> Result<Vec<Rune>, Box<dyn Error>> {
	let file = File::open(path).map_err(|e| format!("failed to open in file: {e}"))?;

	let mut runes = Vec::new();

	for line in BufReader::new(file).split(b'\n') {
		let mut line = line?;
		line.push(b'\n');

		for rune in Runes::new(&line) {
			runes.push(rune?);
		}
	}

	Ok(runes)
}

fn write_runes(path: &Path, runes: &[Rune]) -> Result<(), Box<dyn Error>> {
	let file = File::create(path).map_err(|e| format!("failed to open out file: {e}"))?;

	let mut output = BufWriter::new(file);
	let mut buf    = [0x00; MAX_SEQUENCE_LEN];

	for &rune in runes {
		let len = encode(rune, &mut buf).map_err(io::Error::from)?;
		output.write_all(&buf[..len])?;
	}

	output.flush()?;
	Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
	let argv: Vec<OsString> = args_os().skip(0x1).collect();

	let [path] = argv.as_slice() else {
		return Err("usage: reader <path>".into());
	};

	let path  = Path::new(path);
	let runes = read_runes(path)?;

	let mut stdout = io::stdout().lock();

	for rune in &runes {
		write!(stdout, "{rune:x} ")?;
	}

	writeln!(stdout)?;

	let mut out_path = path.as_os_str().to_owned();
	out_path.push(".out");

	write_runes(Path::new(&out_path), &runes)
}
