use std::fmt;
use std::str::FromStr;

use crate::common::error::{FisherError, Result};
use crate::id3::header::{encode_uint32, HEADER_SIZE};
use crate::id3::specs::{
    self, Encoding, DEFAULT_PICTURE_MIME, PICTURE_FRAME_ID, PICTURE_TYPE_COVER_FRONT,
};

/// A 4-character frame identifier (`TIT2`, `TRCK`, `APIC`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId([u8; 4]);

impl FrameId {
    pub const APIC: FrameId = FrameId(*PICTURE_FRAME_ID);

    /// Accepts exactly four characters from `A-Z` and `0-9`.
    pub fn new(id: &str) -> Result<Self> {
        let bytes = id.as_bytes();
        if bytes.len() != 4
            || !bytes.iter().all(|&b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(FisherError::InvalidFrameId(id.to_string()));
        }
        Ok(FrameId([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("XXXX")
    }
}

impl FromStr for FrameId {
    type Err = FisherError;

    fn from_str(s: &str) -> Result<Self> {
        FrameId::new(s)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One metadata value destined for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataField {
    /// Written as Latin-1 decimal digits (track number, year, ...).
    Numeric { id: FrameId, value: u64 },
    /// Written as UTF-16LE with BOM.
    Text { id: FrameId, value: String },
    /// Front cover picture in an `APIC` frame with an empty description.
    Picture { mime_type: String, data: Vec<u8> },
}

impl MetadataField {
    pub fn numeric(id: &str, value: u64) -> Result<Self> {
        Ok(MetadataField::Numeric {
            id: value_frame_id(id)?,
            value,
        })
    }

    pub fn text(id: &str, value: impl Into<String>) -> Result<Self> {
        Ok(MetadataField::Text {
            id: value_frame_id(id)?,
            value: value.into(),
        })
    }

    /// Front cover art in the catalogue's default format (JPEG).
    pub fn cover(data: Vec<u8>) -> Self {
        MetadataField::Picture {
            mime_type: DEFAULT_PICTURE_MIME.to_string(),
            data,
        }
    }

    /// Front cover art with an explicit MIME type.
    pub fn picture(mime_type: &str, data: Vec<u8>) -> Result<Self> {
        let valid = !mime_type.is_empty()
            && mime_type.bytes().all(|b| b.is_ascii_graphic());
        if !valid {
            return Err(FisherError::InvalidMimeType(mime_type.to_string()));
        }
        Ok(MetadataField::Picture {
            mime_type: mime_type.to_string(),
            data,
        })
    }

    pub fn id(&self) -> FrameId {
        match self {
            MetadataField::Numeric { id, .. } | MetadataField::Text { id, .. } => *id,
            MetadataField::Picture { .. } => FrameId::APIC,
        }
    }

    /// Number of payload bytes `encode` will produce.
    pub fn payload_len(&self) -> usize {
        match self {
            MetadataField::Numeric { value, .. } => 1 + itoa::Buffer::new().format(*value).len(),
            MetadataField::Text { value, .. } => 1 + specs::encoded_len(value, Encoding::Utf16),
            MetadataField::Picture { mime_type, data } => {
                1 + specs::encoded_len(mime_type, Encoding::Latin1) + 3 + data.len()
            }
        }
    }

    /// Serialize the frame payload.
    pub fn encode(&self) -> EncodedFrame {
        let mut payload = Vec::with_capacity(self.payload_len());
        match self {
            MetadataField::Numeric { value, .. } => {
                payload.push(Encoding::Latin1 as u8);
                payload.extend_from_slice(itoa::Buffer::new().format(*value).as_bytes());
            }
            MetadataField::Text { value, .. } => {
                payload.push(Encoding::Utf16 as u8);
                payload.extend_from_slice(&specs::encode_text(value, Encoding::Utf16));
            }
            MetadataField::Picture { mime_type, data } => {
                payload.push(Encoding::Latin1 as u8);
                payload.extend_from_slice(&specs::encode_text(mime_type, Encoding::Latin1));
                payload.push(0); // MIME terminator
                payload.push(PICTURE_TYPE_COVER_FRONT);
                payload.push(0); // empty description
                payload.extend_from_slice(data);
            }
        }
        EncodedFrame {
            id: self.id(),
            payload,
        }
    }
}

// Text and numeric values must not claim the picture frame id.
fn value_frame_id(id: &str) -> Result<FrameId> {
    let id = FrameId::new(id)?;
    if id == FrameId::APIC {
        return Err(FisherError::UnsupportedValue {
            id: id.to_string(),
            reason: "APIC only holds picture data".into(),
        });
    }
    Ok(id)
}

/// A serialized frame payload, ready to be framed by the tag writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    pub id: FrameId,
    pub payload: Vec<u8>,
}

impl EncodedFrame {
    /// Bytes written after the frame header.
    pub fn realized_len(&self) -> usize {
        self.payload.len()
    }

    /// Frame header plus payload.
    pub fn declared_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }

    /// Append the 10-byte frame header and the payload to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.id.as_bytes());
        out.extend_from_slice(&encode_uint32(self.payload.len() as u32));
        out.extend_from_slice(&[0, 0]); // flags
        out.extend_from_slice(&self.payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_id_validation() {
        assert!(FrameId::new("TIT2").is_ok());
        assert!("TPE1".parse::<FrameId>().is_ok());
        for bad in ["TIT", "TIT22", "tit2", "TI T", "TÏT2", ""] {
            assert!(
                matches!(FrameId::new(bad), Err(FisherError::InvalidFrameId(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn apic_is_reserved_for_pictures() {
        assert!(matches!(
            MetadataField::text("APIC", "x"),
            Err(FisherError::UnsupportedValue { .. })
        ));
        assert!(matches!(
            MetadataField::numeric("APIC", 1),
            Err(FisherError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn rejects_bad_mime() {
        assert!(MetadataField::picture("", vec![]).is_err());
        assert!(MetadataField::picture("image/jpeg\0", vec![]).is_err());
        assert!(MetadataField::picture("image/pñg", vec![]).is_err());
        assert!(MetadataField::picture("image/png", vec![]).is_ok());
    }

    #[test]
    fn numeric_payload() {
        let frame = MetadataField::numeric("TYER", 2024).unwrap().encode();
        assert_eq!(frame.payload, vec![0x00, b'2', b'0', b'2', b'4']);
        assert_eq!(frame.declared_size(), 15);
    }

    #[test]
    fn numeric_zero() {
        let frame = MetadataField::numeric("TRCK", 0).unwrap().encode();
        assert_eq!(frame.payload, vec![0x00, b'0']);
    }

    #[test]
    fn text_payload() {
        let frame = MetadataField::text("TPE1", "Artist").unwrap().encode();
        assert_eq!(&frame.payload[..3], &[0x01, 0xFF, 0xFE]);
        assert_eq!(frame.payload.len(), 3 + 12);
        assert_eq!(&frame.payload[3..5], &[b'A', 0]);
        assert_eq!(frame.declared_size(), 25);
    }

    #[test]
    fn empty_text_keeps_bom() {
        let frame = MetadataField::text("TIT2", "").unwrap().encode();
        assert_eq!(frame.payload, vec![0x01, 0xFF, 0xFE]);
    }

    #[test]
    fn picture_payload() {
        let image = vec![0xAB; 100];
        let frame = MetadataField::cover(image.clone()).encode();
        assert_eq!(frame.id, FrameId::APIC);
        assert_eq!(frame.declared_size(), 124);
        assert_eq!(frame.payload[0], 0x00);
        assert_eq!(&frame.payload[1..11], b"image/jpeg");
        assert_eq!(&frame.payload[11..14], &[0x00, 0x03, 0x00]);
        assert_eq!(&frame.payload[14..], &image[..]);
    }

    #[test]
    fn payload_len_matches_encoding() {
        let fields = [
            MetadataField::numeric("TRCK", u64::MAX).unwrap(),
            MetadataField::text("TIT2", "Пора домой \u{1F3B5}").unwrap(),
            MetadataField::picture("image/png", vec![1, 2, 3]).unwrap(),
        ];
        for field in &fields {
            assert_eq!(field.payload_len(), field.encode().realized_len());
        }
    }

    #[test]
    fn frame_header_layout() {
        let frame = MetadataField::numeric("TRCK", 7).unwrap().encode();
        let mut out = Vec::new();
        frame.write_to(&mut out);
        assert_eq!(&out[..4], b"TRCK");
        assert_eq!(&out[4..8], &[0, 0, 0, 2]);
        assert_eq!(&out[8..10], &[0, 0]);
        assert_eq!(&out[10..], &[0x00, b'7']);
    }
}
