//! Payload buffer lifecycle
//!
//! Every driver call gets a fresh buffer of exactly the descriptor's payload
//! size. The lifecycle is fixed: allocate zeroed, optionally seed from a
//! file of exactly matching length, stamp the version tag, then run the
//! operation's prepare hook. The version stamp is unconditional: a file
//! captured from an older driver (or tampered with) must never smuggle a
//! different version past the restamp.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::{OperationDescriptor, PrepareArgs};

/// Length of the version tag at the start of every payload.
pub const VERSION_TAG_LEN: usize = 4;

/// Build a ready-to-invoke payload for one device iteration.
///
/// Fails without any driver call on an unreadable input file or a length
/// mismatch; the file must be exactly `op.payload_size` bytes.
pub fn prepare_payload(
    op: &OperationDescriptor,
    input: Option<&Path>,
    args: &PrepareArgs,
) -> Result<Vec<u8>> {
    let mut payload = vec![0u8; op.payload_size];

    if let Some(path) = input {
        let data = fs::read(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        if data.len() != op.payload_size {
            return Err(Error::PayloadSizeMismatch {
                path: path.to_path_buf(),
                expected: op.payload_size,
                actual: data.len() as u64,
            });
        }
        payload.copy_from_slice(&data);
    }

    // Always restamp, even over file-loaded content
    payload[..VERSION_TAG_LEN].copy_from_slice(&op.version_tag.to_le_bytes());

    if let Some(prepare) = op.prepare {
        prepare(&mut payload, args);
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::EntryPoint;
    use crate::registry::version_tag;
    use std::io::Write;

    fn patch_marker(payload: &mut [u8], _: &PrepareArgs) {
        payload[8] = 0x5A;
    }

    fn test_op(prepare: Option<crate::registry::PrepareFn>) -> OperationDescriptor {
        OperationDescriptor {
            name: "probe",
            description: "test operation",
            payload_size: 16,
            version_tag: version_tag(16, 1),
            mutating: false,
            entry: EntryPoint::ClockGetBoostLock,
            prepare,
        }
    }

    #[test]
    fn test_fresh_payload_is_zeroed_and_stamped() {
        let op = test_op(None);
        let payload = prepare_payload(&op, None, &PrepareArgs::default()).unwrap();
        assert_eq!(payload.len(), 16);
        assert_eq!(&payload[..4], &op.version_tag.to_le_bytes());
        assert!(payload[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_file_seed_keeps_body_but_restamps_version() {
        let op = test_op(None);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // Wrong version tag up front, recognizable body behind it
        let mut content = vec![0xFFu8; 16];
        content[4..].fill(0xAB);
        file.write_all(&content).unwrap();

        let payload = prepare_payload(&op, Some(file.path()), &PrepareArgs::default()).unwrap();
        assert_eq!(&payload[..4], &op.version_tag.to_le_bytes());
        assert!(payload[4..].iter().all(|&b| b == 0xAB));
    }

    #[test]
    fn test_short_and_long_files_are_rejected() {
        let op = test_op(None);
        for len in [15usize, 17] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(&vec![0u8; len]).unwrap();
            match prepare_payload(&op, Some(file.path()), &PrepareArgs::default()) {
                Err(Error::PayloadSizeMismatch {
                    expected, actual, ..
                }) => {
                    assert_eq!(expected, 16);
                    assert_eq!(actual, len as u64);
                }
                other => panic!("expected size mismatch for {} bytes, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let op = test_op(None);
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");
        assert!(matches!(
            prepare_payload(&op, Some(&missing), &PrepareArgs::default()),
            Err(Error::ReadFile { .. })
        ));
    }

    #[test]
    fn test_prepare_hook_runs_after_stamp() {
        let op = test_op(Some(patch_marker));
        let payload = prepare_payload(&op, None, &PrepareArgs::default()).unwrap();
        assert_eq!(&payload[..4], &op.version_tag.to_le_bytes());
        assert_eq!(payload[8], 0x5A);
    }
}
