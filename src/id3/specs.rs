/// Tag identifier written at offset 0.
pub const ID3_MAGIC: &[u8; 3] = b"ID3";
pub const ID3_MAJOR_VERSION: u8 = 3;
pub const ID3_REVISION: u8 = 0;

/// Zero bytes reserved after the last frame so editors can rewrite frames in place.
pub const DEFAULT_PADDING: usize = 4096;

/// Frame identifier for attached pictures.
pub const PICTURE_FRAME_ID: &[u8; 4] = b"APIC";

/// APIC picture type "Cover (front)".
pub const PICTURE_TYPE_COVER_FRONT: u8 = 0x03;

/// Cover art handed over by the catalogue is always JPEG.
pub const DEFAULT_PICTURE_MIME: &str = "image/jpeg";

/// MIME type of the composed artifact.
pub const TAGGED_AUDIO_MIME: &str = "audio/mpeg";

const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Text encoding byte that starts every text-bearing frame payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Encoding {
    Latin1 = 0,
    /// UTF-16 with byte-order mark; always written little-endian.
    Utf16 = 1,
}

/// Encode text without a terminator.
///
/// `Latin1` maps code points above U+00FF to `?`. `Utf16` writes the
/// little-endian BOM followed by UTF-16LE code units.
pub fn encode_text(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Latin1 => text
            .chars()
            .map(|c| if c as u32 <= 0xFF { c as u8 } else { b'?' })
            .collect(),
        Encoding::Utf16 => {
            let mut result = Vec::with_capacity(2 + text.len() * 2);
            result.extend_from_slice(&UTF16_LE_BOM);
            for unit in text.encode_utf16() {
                result.extend_from_slice(&unit.to_le_bytes());
            }
            result
        }
    }
}

/// Byte length of `encode_text(text, encoding)` without encoding it.
pub fn encoded_len(text: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Latin1 => text.chars().count(),
        Encoding::Utf16 => UTF16_LE_BOM.len() + text.encode_utf16().count() * 2,
    }
}
