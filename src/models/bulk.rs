use std::io::{self, BufRead, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

/// Action descriptor preceding every document line in a `_bulk` body:
/// an unconditional index operation with no explicit document id.
pub const ACTION_INDEX: &str = "{\"index\": {}}";

/// Reads newline-delimited documents and pairs each with the action
/// descriptor, preserving input order. Lines are opaque, nothing is
/// parsed or validated here.
pub fn actions_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut actions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        actions.push(ACTION_INDEX.to_string());
        actions.push(line);
    }
    Ok(actions)
}

pub fn encode_plain(actions: &[String]) -> Vec<u8> {
    let mut body = Vec::new();
    for line in actions {
        body.extend_from_slice(line.as_bytes());
        body.push(b'\n');
    }
    body
}

pub fn encode_gzip(actions: &[String]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for line in actions {
        encoder.write_all(line.as_bytes())?;
        encoder.write_all(b"\n")?;
    }
    encoder.finish()
}
