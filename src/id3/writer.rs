use crate::common::error::{FisherError, Result};
use crate::id3::frames::EncodedFrame;
use crate::id3::header::{TagHeader, HEADER_SIZE, SYNCHSAFE_MAX};
use crate::id3::tags::TagSpec;

/// Tag header and frames, without the padding region.
#[derive(Debug, Clone)]
pub struct RenderedTag {
    /// 10-byte header followed by every frame header and payload.
    pub bytes: Vec<u8>,
    /// Value of the header's size field: frames plus padding.
    pub tag_size: u32,
    /// Offset where padding begins (equals `bytes.len()`).
    pub frames_end: usize,
}

impl RenderedTag {
    /// Offset of the first audio byte in the composed output.
    pub fn audio_offset(&self) -> usize {
        HEADER_SIZE + self.tag_size as usize
    }

    pub fn padding(&self) -> usize {
        self.audio_offset() - self.frames_end
    }
}

/// Encode all fields in order and lay out the tag header and frames.
pub fn render_tag(spec: &TagSpec, padding: usize) -> Result<RenderedTag> {
    let frames: Vec<EncodedFrame> = spec.fields().iter().map(|f| f.encode()).collect();

    let frames_size: u64 = frames.iter().map(|f| f.declared_size() as u64).sum();
    let total = frames_size + padding as u64;
    if total > SYNCHSAFE_MAX as u64 {
        return Err(FisherError::TagTooLarge {
            size: total,
            max: SYNCHSAFE_MAX,
        });
    }
    let tag_size = total as u32;

    let mut bytes = Vec::with_capacity(HEADER_SIZE + frames_size as usize);
    bytes.extend_from_slice(&TagHeader::new(tag_size).to_bytes());

    for frame in &frames {
        tracing::trace!(
            frame = %frame.id,
            payload = frame.realized_len(),
            "writing frame"
        );
        frame.write_to(&mut bytes);
    }

    let frames_end = bytes.len();
    Ok(RenderedTag {
        bytes,
        tag_size,
        frames_end,
    })
}
