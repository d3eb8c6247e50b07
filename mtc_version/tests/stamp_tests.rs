use crc32fast::Hasher;

extern crate mtc_version;

use mtc_version::types::CheckSum;
use mtc_version::types::stamp::STAMP_MAGIC;
use mtc_version::*;

#[test]
fn test_stamp_roundtrip() {
    for identity in [
        VersionIdentity::new(2, 5, 0, 9, ""),
        VersionIdentity::new(2, 6, 1, 1234, "RC3"),
        VersionIdentity::CURRENT,
    ] {
        let bytes = encode_stamp(&identity).expect("encode_stamp failed");
        assert!(bytes.starts_with(&STAMP_MAGIC));
        assert!(bytes.len() <= MAX_STAMP_LEN);

        let decoded = decode_stamp(&bytes, false).expect("decode_stamp failed");
        assert_eq!(decoded, identity);
        assert_eq!(
            VersionInfo::new(decoded).format_full(),
            VersionInfo::new(identity).format_full()
        );
    }
}

#[test]
fn test_stamp_detects_corruption() {
    let identity = VersionIdentity::new(2, 5, 0, 9, "RC1");
    let mut bytes = encode_stamp(&identity).unwrap();

    // flip a byte of the release candidate tag ("RC1" -> "RD1")
    let pos = bytes
        .windows(3)
        .position(|w| w == b"RC1")
        .expect("tag not found in stamp");
    bytes[pos + 1] = b'D';

    assert!(matches!(
        decode_stamp(&bytes, false),
        Err(VersionError::InvalidChecksum(_))
    ));

    let forced = decode_stamp(&bytes, true).expect("decode with ignore_checksum failed");
    assert_eq!(forced.release_candidate(), "RD1");
}

#[test]
fn test_stamp_rejects_bad_input() {
    assert!(matches!(
        decode_stamp(&[], false),
        Err(VersionError::InvalidStamp(_))
    ));
    assert!(matches!(
        decode_stamp(&STAMP_MAGIC, false),
        Err(VersionError::InvalidStamp(_))
    ));

    let mut bytes = encode_stamp(&VersionIdentity::new(2, 5, 0, 9, "")).unwrap();
    bytes[1] = b'X';
    assert!(matches!(
        decode_stamp(&bytes, false),
        Err(VersionError::InvalidStamp(_))
    ));

    let mut bytes = encode_stamp(&VersionIdentity::new(2, 5, 0, 9, "")).unwrap();
    let n = bytes.len();
    bytes[n - CheckSum::SIZE] = 0x01; // checksum delimiter
    assert!(matches!(
        decode_stamp(&bytes, false),
        Err(VersionError::InvalidChecksum(_))
    ));

    assert!(matches!(
        decode_stamp(&vec![0u8; MAX_STAMP_LEN + 1], false),
        Err(VersionError::InvalidStamp(_))
    ));
}

/// Seals `header` with a valid CRC32 trailer.
fn seal(header: &[u8]) -> Vec<u8> {
    let mut hasher = Hasher::new();
    hasher.update(header);
    let mut bytes = header.to_vec();
    bytes.extend(CheckSum::DELIMITER);
    bytes.extend(hasher.finalize().to_le_bytes());
    bytes
}

#[test]
fn test_stamp_rejects_oversized_string_length() {
    let mut header = STAMP_MAGIC.to_vec();
    header.extend([2, 5, 0, 9]);
    header.push(0xFD); // varint marker for a u64 length
    header.extend((1u64 << 40).to_le_bytes());
    header.extend([0u8; 20]);
    let bytes = seal(&header);
    assert!(bytes.len() <= MAX_STAMP_LEN);

    assert!(matches!(
        decode_stamp(&bytes, false),
        Err(VersionError::InvalidStamp(_))
    ));
    assert!(matches!(
        decode_stamp(&bytes, true),
        Err(VersionError::InvalidStamp(_))
    ));
}

#[test]
fn test_stamp_rejects_invalid_decoded_tag() {
    let bytes = encode_stamp(&VersionIdentity::new(2, 5, 0, 9, "RC1")).unwrap();
    let pos = bytes
        .windows(3)
        .position(|w| w == b"RC1")
        .expect("tag not found in stamp");

    let mut header = bytes[..bytes.len() - CheckSum::SIZE].to_vec();
    header[pos + 2] = b'\n';
    let sealed = seal(&header);

    assert!(matches!(
        decode_stamp(&sealed, false),
        Err(VersionError::InvalidStamp(_))
    ));
}

#[test]
fn test_stamp_rejects_long_release_candidate() {
    let long = "R".repeat(65);
    let identity = VersionIdentity::from_parts(2, 5, 0, 9, long).unwrap();
    assert!(matches!(
        encode_stamp(&identity),
        Err(VersionError::InvalidStamp(_))
    ));
}
