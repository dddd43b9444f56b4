//! Output routing for completed payloads
//!
//! A finished buffer goes to the console (summary line, optional hex dump)
//! or to a binary file. When one command fans out over several devices, the
//! requested output path is rewritten per device so the batch never clobbers
//! its own files.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::buffer::VERSION_TAG_LEN;
use crate::error::{Error, Result};

/// Bytes rendered per hex dump line.
const DUMP_BYTES_PER_LINE: usize = 16;

/// Version value currently present in a payload (little-endian bytes 0..4).
///
/// After a successful call this is whatever the driver left there; the
/// summary line reports it so a stale driver echoing an unexpected revision
/// is visible.
pub fn payload_version(payload: &[u8]) -> u32 {
    let mut tag = [0u8; VERSION_TAG_LEN];
    tag.copy_from_slice(&payload[..VERSION_TAG_LEN]);
    u32::from_le_bytes(tag)
}

/// Render a payload as upper-case hex, 16 bytes per line with an offset
/// column.
pub fn hex_dump<W: Write>(w: &mut W, payload: &[u8]) -> io::Result<()> {
    for (line, chunk) in payload.chunks(DUMP_BYTES_PER_LINE).enumerate() {
        write!(w, "{:04X}:", line * DUMP_BYTES_PER_LINE)?;
        for byte in chunk {
            write!(w, " {:02X}", byte)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Output file path for one device of a batch.
///
/// With a single selected device the requested path is used as-is. With
/// several, `_gpu<index>` is inserted before the extension (or appended when
/// there is none) so every device writes a distinct file.
pub fn per_device_path(base: &Path, index: usize, multi: bool) -> PathBuf {
    if !multi {
        return base.to_path_buf();
    }

    let mut name = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(&format!("_gpu{}", index));
    if let Some(ext) = base.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    base.with_file_name(name)
}

/// Write a payload to a file. A failed write aborts the device's iteration;
/// nothing is retried.
pub fn write_payload(path: &Path, payload: &[u8]) -> Result<()> {
    let wrap = |source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(payload).map_err(wrap)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_version_little_endian() {
        let mut payload = vec![0u8; 16];
        payload[..4].copy_from_slice(&[0x01, 0x01, 0x00, 0x00]);
        assert_eq!(payload_version(&payload), 0x0000_0101);
    }

    #[test]
    fn test_hex_dump_format() {
        let payload: Vec<u8> = (0..20).map(|i| 0xA0 + i).collect();
        let mut out = Vec::new();
        hex_dump(&mut out, &payload).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "0000: A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 AA AB AC AD AE AF"
        );
        assert_eq!(lines[1], "0010: B0 B1 B2 B3");
    }

    #[test]
    fn test_single_device_path_unmodified() {
        let base = Path::new("out/base.bin");
        assert_eq!(per_device_path(base, 0, false), PathBuf::from("out/base.bin"));
    }

    #[test]
    fn test_multi_device_path_suffix_before_extension() {
        let base = Path::new("out/base.bin");
        assert_eq!(
            per_device_path(base, 2, true),
            PathBuf::from("out/base_gpu2.bin")
        );
    }

    #[test]
    fn test_multi_device_path_without_extension() {
        let base = Path::new("capture");
        assert_eq!(per_device_path(base, 1, true), PathBuf::from("capture_gpu1"));
    }

    #[test]
    fn test_multi_device_paths_distinct() {
        let base = Path::new("base.bin");
        let a = per_device_path(base, 0, true);
        let b = per_device_path(base, 1, true);
        assert_ne!(a, b);
        assert!(a.to_string_lossy().contains("_gpu0"));
        assert!(b.to_string_lossy().contains("_gpu1"));
    }

    #[test]
    fn test_write_payload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        write_payload(&path, &[1, 2, 3, 4]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_write_payload_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.bin");
        assert!(matches!(
            write_payload(&path, &[0]),
            Err(Error::WriteFile { .. })
        ));
    }
}
