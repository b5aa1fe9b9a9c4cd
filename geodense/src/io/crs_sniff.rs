//! Discovery of the `crs` member of a GeoJSON document without parsing it.

use geodense_types::geo::CrsIdentifier;
use regex::Regex;
use std::io::{ErrorKind, Read};
use std::sync::OnceLock;

use crate::error::GeodenseError;

const CHUNK_SIZE: usize = 64 * 1024;
const WINDOW_SIZE: usize = 4 * 1024;
const CRS_KEY: &[u8] = b"\"crs\"";

/// Scans `reader` for the `"crs"` key and returns the CRS named by the OGC URN following it.
///
/// The stream is read in chunks of 64 KiB until the key is found. Only the 4 KiB starting at the
/// key are searched for the URN. Returns `None` if there is no key or no URN close enough to it.
pub fn sniff_crs<R: Read>(mut reader: R) -> Result<Option<CrsIdentifier>, GeodenseError> {
    let mut buffer = Vec::with_capacity(CHUNK_SIZE + WINDOW_SIZE);
    let mut chunk = vec![0u8; CHUNK_SIZE];

    loop {
        let read = read_chunk(&mut reader, &mut chunk)?;
        buffer.extend_from_slice(&chunk[..read]);

        if let Some(position) = find(&buffer, CRS_KEY) {
            buffer.drain(..position);
            while buffer.len() < WINDOW_SIZE {
                let read = read_chunk(&mut reader, &mut chunk)?;
                if read == 0 {
                    break;
                }
                buffer.extend_from_slice(&chunk[..read]);
            }
            buffer.truncate(WINDOW_SIZE);

            return Ok(parse_urn(&String::from_utf8_lossy(&buffer)));
        }

        if read == 0 {
            return Ok(None);
        }

        // The key may be split between two chunks.
        let overlap_start = buffer.len().saturating_sub(CRS_KEY.len() - 1);
        buffer.drain(..overlap_start);
    }
}

fn read_chunk<R: Read>(reader: &mut R, chunk: &mut [u8]) -> Result<usize, GeodenseError> {
    loop {
        match reader.read(chunk) {
            Ok(read) => return Ok(read),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

fn parse_urn(window: &str) -> Option<CrsIdentifier> {
    let captures = urn_regex().captures(window)?;
    Some(CrsIdentifier::new(&captures["authority"], &captures["code"]))
}

fn urn_regex() -> &'static Regex {
    static URN: OnceLock<Regex> = OnceLock::new();
    URN.get_or_init(|| {
        Regex::new(
            r#"(?i:urn:ogc:def:crs):(?P<authority>[^:"\s]+):(?P<version>[^:"\s]*):(?P<code>[^:"\s]+)"#,
        )
        .expect("invalid urn regex")
    })
}
