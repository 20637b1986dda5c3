use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::common::error::{FisherError, Result};
use crate::common::util;
use crate::config::TagConfig;
use crate::id3::header::HEADER_SIZE;
use crate::id3::tags::TagSpec;
use crate::id3::writer::render_tag;

/// Audio with a freshly synthesized tag in front of it.
///
/// Layout: `[tag header][frames][zero padding][audio]`. The buffer is owned
/// exclusively; dropping the value releases it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedAudio {
    data: Vec<u8>,
    tag_size: u32,
    frames_end: usize,
    mime_type: &'static str,
}

impl TaggedAudio {
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size field of the tag header (frames + padding).
    pub fn tag_size(&self) -> u32 {
        self.tag_size
    }

    /// Start of the padding region.
    pub fn frames_end(&self) -> usize {
        self.frames_end
    }

    /// Offset of the first audio byte.
    pub fn audio_offset(&self) -> usize {
        HEADER_SIZE + self.tag_size as usize
    }

    pub fn audio(&self) -> &[u8] {
        &self.data[self.audio_offset()..]
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// `data:` URI suitable for handing to a download action.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }

    /// Write the artifact to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        util::write_new(path, &self.data)
    }
}

/// Prepend a tag built from `spec` to `audio`.
pub fn compose(audio: &[u8], spec: &TagSpec, config: &TagConfig) -> Result<TaggedAudio> {
    let tag = render_tag(spec, config.padding)?;
    let audio_offset = tag.audio_offset();
    let total = audio_offset
        .checked_add(audio.len())
        .ok_or(FisherError::AllocationFailed { requested: usize::MAX })?;

    let mut data = Vec::new();
    data.try_reserve_exact(total)
        .map_err(|_| FisherError::AllocationFailed { requested: total })?;

    data.extend_from_slice(&tag.bytes);
    data.resize(audio_offset, 0);
    data.extend_from_slice(audio);

    tracing::debug!(
        frames = spec.len(),
        tag_size = tag.tag_size,
        padding = tag.padding(),
        audio = audio.len(),
        total,
        "composed tagged audio"
    );

    Ok(TaggedAudio {
        data,
        tag_size: tag.tag_size,
        frames_end: tag.frames_end,
        mime_type: config.audio_mime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id3::frames::MetadataField;

    #[test]
    fn audio_follows_padding() {
        let spec = TagSpec::new().with(MetadataField::numeric("TRCK", 1).unwrap());
        let audio = [0xFF, 0xFB, 0x90, 0x64];
        let out = compose(&audio, &spec, &TagConfig::default().with_padding(8)).unwrap();
        assert_eq!(out.len(), 10 + 12 + 8 + 4);
        assert_eq!(out.frames_end(), 22);
        assert!(out.as_bytes()[22..30].iter().all(|&b| b == 0));
        assert_eq!(out.audio(), &audio);
    }

    #[test]
    fn data_uri_carries_mime() {
        let out = compose(b"abc", &TagSpec::new(), &TagConfig::default().with_padding(0)).unwrap();
        let uri = out.to_data_uri();
        assert!(uri.starts_with("data:audio/mpeg;base64,"));
        let encoded = uri.trim_start_matches("data:audio/mpeg;base64,");
        assert_eq!(STANDARD.decode(encoded).unwrap(), out.as_bytes());
    }
}
