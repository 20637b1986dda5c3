use crate::common::error::{FisherError, Result};
use crate::id3::frames::{FrameId, MetadataField};
use crate::id3::header::HEADER_SIZE;

/// A metadata value as handed over by the catalogue layer, before it is
/// bound to a frame kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Integer(i64),
    Text(String),
    /// Cover image bytes; only valid under the `APIC` key.
    Image(Vec<u8>),
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Integer(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(v: Vec<u8>) -> Self {
        RawValue::Image(v)
    }
}

impl RawValue {
    /// Bind this value to a frame kind according to its key.
    pub fn into_field(self, id: &str) -> Result<MetadataField> {
        let is_picture = FrameId::new(id)? == FrameId::APIC;
        match (self, is_picture) {
            (RawValue::Image(data), true) => Ok(MetadataField::cover(data)),
            (RawValue::Integer(v), false) => {
                let value = u64::try_from(v).map_err(|_| FisherError::UnsupportedValue {
                    id: id.to_string(),
                    reason: format!("negative integer {}", v),
                })?;
                MetadataField::numeric(id, value)
            }
            (RawValue::Text(s), false) => MetadataField::text(id, s),
            (RawValue::Image(_), false) => Err(FisherError::UnsupportedValue {
                id: id.to_string(),
                reason: "image data outside APIC".into(),
            }),
            (_, true) => Err(FisherError::UnsupportedValue {
                id: id.to_string(),
                reason: "APIC requires image data".into(),
            }),
        }
    }
}

/// Ordered list of fields; frames are written in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSpec {
    fields: Vec<MetadataField>,
}

impl TagSpec {
    pub fn new() -> Self {
        TagSpec::default()
    }

    /// Build from `(frame id, value)` pairs, keeping their order.
    pub fn from_raw<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, RawValue)>,
        K: AsRef<str>,
    {
        let mut spec = TagSpec::new();
        for (id, value) in entries {
            spec.push(value.into_field(id.as_ref())?);
        }
        Ok(spec)
    }

    /// Append a field. A field with an id already present replaces the
    /// earlier one in its original position.
    pub fn push(&mut self, field: MetadataField) {
        let id = field.id();
        match self.fields.iter_mut().find(|f| f.id() == id) {
            Some(slot) => *slot = field,
            None => self.fields.push(field),
        }
    }

    pub fn with(mut self, field: MetadataField) -> Self {
        self.push(field);
        self
    }

    pub fn get(&self, id: FrameId) -> Option<&MetadataField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn remove(&mut self, id: FrameId) -> Option<MetadataField> {
        let pos = self.fields.iter().position(|f| f.id() == id)?;
        Some(self.fields.remove(pos))
    }

    pub fn fields(&self) -> &[MetadataField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total bytes of all frames including their headers, excluding padding.
    pub fn frames_size(&self) -> u64 {
        self.fields
            .iter()
            .map(|f| (HEADER_SIZE + f.payload_len()) as u64)
            .sum()
    }
}

impl FromIterator<MetadataField> for TagSpec {
    fn from_iter<T: IntoIterator<Item = MetadataField>>(iter: T) -> Self {
        let mut spec = TagSpec::new();
        for field in iter {
            spec.push(field);
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_bind_by_key() {
        let spec = TagSpec::from_raw(vec![
            ("TIT2", RawValue::from("Song")),
            ("TRCK", RawValue::from(3i64)),
            ("APIC", RawValue::from(vec![1u8, 2, 3])),
        ])
        .unwrap();
        let ids: Vec<String> = spec.fields().iter().map(|f| f.id().to_string()).collect();
        assert_eq!(ids, ["TIT2", "TRCK", "APIC"]);
        assert_eq!(
            spec.get(FrameId::APIC),
            Some(&MetadataField::Picture {
                mime_type: "image/jpeg".into(),
                data: vec![1, 2, 3],
            })
        );
    }

    #[test]
    fn raw_value_mismatches_are_rejected() {
        assert!(RawValue::from(-1i64).into_field("TRCK").is_err());
        assert!(RawValue::from(vec![0u8]).into_field("TIT2").is_err());
        assert!(RawValue::from("cover").into_field("APIC").is_err());
        assert!(matches!(
            RawValue::from("x").into_field("TT2"),
            Err(FisherError::InvalidFrameId(_))
        ));
    }

    #[test]
    fn duplicate_id_replaces_in_place() {
        let mut spec = TagSpec::new();
        spec.push(MetadataField::text("TIT2", "old").unwrap());
        spec.push(MetadataField::text("TPE1", "artist").unwrap());
        spec.push(MetadataField::text("TIT2", "new").unwrap());
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.fields()[0], MetadataField::text("TIT2", "new").unwrap());
    }

    #[test]
    fn remove_field() {
        let mut spec = TagSpec::new().with(MetadataField::numeric("TYER", 2024).unwrap());
        let id = FrameId::new("TYER").unwrap();
        assert!(spec.remove(id).is_some());
        assert!(spec.is_empty());
        assert!(spec.remove(id).is_none());
    }

    #[test]
    fn frames_size_counts_headers() {
        let spec: TagSpec = vec![
            MetadataField::numeric("TYER", 2024).unwrap(),
            MetadataField::text("TPE1", "Artist").unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(spec.frames_size(), 15 + 25);
    }
}
