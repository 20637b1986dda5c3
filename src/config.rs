use crate::id3::specs::{DEFAULT_PADDING, TAGGED_AUDIO_MIME};

/// Knobs for tag synthesis. The defaults produce the layout every caller
/// expects; lowering `padding` is the escape hatch when a large output
/// buffer cannot be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagConfig {
    /// Zero bytes reserved between the last frame and the audio payload.
    pub padding: usize,
    /// MIME type reported for the composed artifact.
    pub audio_mime: &'static str,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            padding: DEFAULT_PADDING,
            audio_mime: TAGGED_AUDIO_MIME,
        }
    }
}

impl TagConfig {
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_audio_mime(mut self, mime: &'static str) -> Self {
        self.audio_mime = mime;
        self
    }
}
