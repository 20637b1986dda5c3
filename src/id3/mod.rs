pub mod header;
pub mod specs;
pub mod frames;
pub mod tags;
pub mod writer;
pub mod compose;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::common::error::Result;
use crate::common::util;
use crate::config::TagConfig;
use crate::id3::compose::{compose, TaggedAudio};
use crate::id3::tags::{RawValue, TagSpec};

/// Tag in-memory audio from `(frame id, value)` pairs with default settings.
pub fn add_id3_tag<I, K>(audio: &[u8], entries: I) -> Result<TaggedAudio>
where
    I: IntoIterator<Item = (K, RawValue)>,
    K: AsRef<str>,
{
    let spec = TagSpec::from_raw(entries)?;
    compose(audio, &spec, &TagConfig::default())
}

/// Tag the audio file at `input` and write the result to `output`.
/// The input mapping is released before writing, so both may name the same file.
pub fn tag_file<P, Q>(input: P, output: Q, spec: &TagSpec, config: &TagConfig) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let tagged = {
        let audio = util::map_audio(&input)?;
        compose(&audio, spec, config)?
    };
    tagged.save(&output)?;
    tracing::debug!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        size = %util::bytes_to_str(tagged.len() as u64),
        "tagged file"
    );
    Ok(())
}

/// One track of a batch: where to read, where to write, what to tag.
#[derive(Debug, Clone)]
pub struct TagJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub spec: TagSpec,
}

/// Tag many files in parallel. Results are returned in job order.
pub fn tag_batch(jobs: &[TagJob], config: &TagConfig) -> Vec<Result<()>> {
    jobs.par_iter()
        .map(|job| {
            let result = tag_file(&job.input, &job.output, &job.spec, config);
            if let Err(e) = &result {
                tracing::warn!(input = %job.input.display(), error = %e, "tagging failed");
            }
            result
        })
        .collect()
}
