use bincode::{Decode, Encode};

pub mod stamp;

pub use stamp::VersionStamp;

/// Trailer written after every stamp, `00 00 00 00 CheckSum 00 00 00 00` + crc32.
#[repr(C)]
#[derive(Encode, Decode, Clone, Debug)]
pub struct CheckSum {
    pub del: [u8; 16],
    pub crc32: u32,
}

impl CheckSum {
    pub const DELIMITER: [u8; 16] = [
        0x00, 0x00, 0x00, 0x00, 0x43, 0x68, 0x65, 0x63, 0x6B, 0x53, 0x75, 0x6D, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Encoded size with the legacy (fixed int) bincode config.
    pub const SIZE: usize = 20;

    pub fn new(crc32: u32) -> Self {
        CheckSum {
            del: Self::DELIMITER,
            crc32,
        }
    }
}
