pub mod common;
pub mod config;
pub mod id3;
pub mod page;
pub mod release;

pub use common::error::{FisherError, Result};
pub use config::TagConfig;
pub use id3::compose::{compose, TaggedAudio};
pub use id3::frames::{FrameId, MetadataField};
pub use id3::tags::{RawValue, TagSpec};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;


#[cfg(feature = "python")]
mod python_bindings {
use super::*;
use pyo3::prelude::*;
use pyo3::exceptions::PyTypeError;
use pyo3::types::{PyBytes, PyDict, PyInt, PyString};

/// Convert a Python frame dict (`{"TIT2": "Title", "TRCK": 3, "APIC": b"..."}`)
/// into a tag spec. Dict insertion order is the frame order.
fn dict_to_spec(frames: &Bound<'_, PyDict>) -> PyResult<TagSpec> {
    let mut entries = Vec::with_capacity(frames.len());
    for (key, value) in frames.iter() {
        let id: String = key.extract()?;
        let raw = if value.is_instance_of::<PyInt>() {
            RawValue::Integer(value.extract::<i64>()?)
        } else if value.is_instance_of::<PyString>() {
            RawValue::Text(value.extract::<String>()?)
        } else if value.is_instance_of::<PyBytes>() {
            RawValue::Image(value.extract::<Vec<u8>>()?)
        } else {
            return Err(PyTypeError::new_err(format!(
                "unsupported value for frame {}: expected int, str or bytes",
                id
            )));
        };
        entries.push((id, raw));
    }
    Ok(TagSpec::from_raw(entries)?)
}

/// Prepend an ID3v2.3 tag to `audio` and return the tagged bytes.
#[pyfunction]
#[pyo3(signature = (audio, frames, padding=id3::specs::DEFAULT_PADDING))]
fn add_id3_tag<'py>(
    py: Python<'py>,
    audio: &[u8],
    frames: &Bound<'py, PyDict>,
    padding: usize,
) -> PyResult<Bound<'py, PyBytes>> {
    let spec = dict_to_spec(frames)?;
    let config = TagConfig::default().with_padding(padding);
    let tagged = py.detach(|| compose(audio, &spec, &config))?;
    Ok(PyBytes::new(py, tagged.as_bytes()))
}

/// Tag the file at `input` and write the result to `output`.
#[pyfunction]
#[pyo3(signature = (input, output, frames, padding=id3::specs::DEFAULT_PADDING))]
fn tag_file(
    py: Python<'_>,
    input: &str,
    output: &str,
    frames: &Bound<'_, PyDict>,
    padding: usize,
) -> PyResult<()> {
    let spec = dict_to_spec(frames)?;
    let config = TagConfig::default().with_padding(padding);
    py.detach(|| id3::tag_file(input, output, &spec, &config))?;
    Ok(())
}

/// Filesystem-safe version of a track or folder name.
#[pyfunction]
#[pyo3(signature = (path, is_dir=false))]
fn clear_path(path: &str, is_dir: bool) -> String {
    common::util::clear_path(path, is_dir)
}

// ---- Module registration ----

#[pymodule]
fn fisher_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add_id3_tag, m)?)?;
    m.add_function(wrap_pyfunction!(tag_file, m)?)?;
    m.add_function(wrap_pyfunction!(clear_path, m)?)?;

    m.add("FisherError", m.py().get_type::<common::error::FisherPyError>())?;
    m.add("MalformedFieldError", m.py().get_type::<common::error::MalformedFieldError>())?;
    m.add("TagTooLargeError", m.py().get_type::<common::error::TagTooLargeError>())?;

    Ok(())
}
} // mod python_bindings
