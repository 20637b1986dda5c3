use byteorder::{BigEndian, ByteOrder};

use crate::id3::specs::{ID3_MAGIC, ID3_MAJOR_VERSION, ID3_REVISION};

/// Size of the tag header, and of every frame header.
pub const HEADER_SIZE: usize = 10;

/// Largest value a 4-byte synchsafe integer can hold.
pub const SYNCHSAFE_MAX: u32 = (1 << 28) - 1;

/// Encode a 28-bit value as a synchsafe integer (7 bits per byte, MSB first).
/// Bits above 28 are dropped; callers check against [`SYNCHSAFE_MAX`].
pub fn encode_synchsafe28(value: u32) -> [u8; 4] {
    [
        ((value >> 21) & 0x7F) as u8,
        ((value >> 14) & 0x7F) as u8,
        ((value >> 7) & 0x7F) as u8,
        (value & 0x7F) as u8,
    ]
}

/// Decode a synchsafe integer. The high bit of each byte is ignored.
pub fn decode_synchsafe28(data: [u8; 4]) -> u32 {
    data.iter()
        .fold(0u32, |acc, &b| (acc << 7) | (b as u32 & 0x7F))
}

/// Encode a frame payload size as a plain big-endian integer.
pub fn encode_uint32(value: u32) -> [u8; 4] {
    let mut buf = [0u8; 4];
    BigEndian::write_u32(&mut buf, value);
    buf
}

pub fn decode_uint32(data: [u8; 4]) -> u32 {
    BigEndian::read_u32(&data)
}

/// The 10-byte tag header. Revision and flags are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    /// Tag size excluding this header (frames + padding).
    pub size: u32,
}

impl TagHeader {
    pub fn new(size: u32) -> Self {
        TagHeader { size }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..3].copy_from_slice(ID3_MAGIC);
        out[3] = ID3_MAJOR_VERSION;
        out[4] = ID3_REVISION;
        out[5] = 0; // flags
        out[6..10].copy_from_slice(&encode_synchsafe28(self.size));
        out
    }
}
