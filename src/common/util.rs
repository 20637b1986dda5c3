use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::hash::Hash;
use std::io::Write;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

use crate::common::error::Result;

/// Audio bytes loaded from disk. Non-empty files are memory mapped.
pub enum AudioBytes {
    Mapped(Mmap),
    Empty,
}

impl Deref for AudioBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            AudioBytes::Mapped(map) => map,
            AudioBytes::Empty => &[],
        }
    }
}

/// Map an audio file read-only.
pub fn map_audio<P: AsRef<Path>>(path: P) -> Result<AudioBytes> {
    let file = open_ro(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(AudioBytes::Empty);
    }
    // SAFETY: read-only mapping; the file must not be truncated while it is alive.
    let map = unsafe { Mmap::map(&file)? };
    Ok(AudioBytes::Mapped(map))
}

/// Create (or truncate) `path` and write `data` to it.
pub fn write_new<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

/// Open a file for read-only access.
pub fn open_ro<P: AsRef<Path>>(path: P) -> Result<File> {
    Ok(File::open(path)?)
}

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Human-readable size in MiB below one GiB, GiB above.
pub fn bytes_to_str(bytes: u64) -> String {
    if bytes < GIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    }
}

/// Left-pad `val` with zeros to the digit count of `max`.
pub fn add_extra_zeros(val: u64, max: u64) -> String {
    let mut buf = itoa::Buffer::new();
    let width = buf.format(max).len();
    format!("{:0>width$}", val, width = width)
}

/// Format a duration in milliseconds as `h:mm:ss`.
pub fn duration_to_str(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    format!(
        "{}:{}:{}",
        hours,
        add_extra_zeros(minutes, 10),
        add_extra_zeros(seconds, 10)
    )
}

fn is_unsafe_path_char(c: char) -> bool {
    matches!(
        c as u32,
        0x0000..=0x001F
            | 0x007F..=0x009F
            | 0x00AD
            | 0x0600..=0x0604
            | 0x070F
            | 0x17B4
            | 0x17B5
            | 0x200B..=0x200F
            | 0x2028..=0x202F
            | 0x2060..=0x206F
            | 0xFEFF
            | 0xFFF0..=0xFFFF
    )
}

/// Make a file or directory name safe to create on common filesystems.
pub fn clear_path(path: &str, is_dir: bool) -> String {
    let mut out = String::with_capacity(path.len());
    for (i, c) in path.chars().enumerate() {
        match c {
            '.' if i == 0 => out.push('_'),
            '"' => out.push_str("''"),
            '\t' => out.push(' '),
            c if is_unsafe_path_char(c) => {}
            '\\' | '/' | ':' | '*' | '?' | '<' | '>' | '|' | '~' => out.push('_'),
            c => out.push(c),
        }
    }
    if is_dir && (out.ends_with('.') || out.ends_with(' ')) {
        out.pop();
        out.push('_');
    }
    out
}

pub const VARIOUS_ARTISTS: &str = "Various Artists";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One credited artist as reported by the catalogue.
#[derive(Debug, Clone, Default)]
pub struct Artist {
    pub name: String,
    pub composer: bool,
    pub various: bool,
}

/// Joined performer and composer credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistCredits {
    pub artists: String,
    pub composers: String,
}

/// Split credits into performers and composers.
/// Performers fall back to composers, then to "Unknown Artist".
pub fn parse_artists(all: &[Artist], separator: &str) -> ArtistCredits {
    let mut artists = Vec::new();
    let mut composers = Vec::new();
    for artist in all {
        if artist.composer {
            composers.push(artist.name.as_str());
        } else if artist.various {
            artists.push(VARIOUS_ARTISTS);
        } else {
            artists.push(artist.name.as_str());
        }
    }

    let composers = composers.join(separator);
    let mut joined = artists.join(separator);
    if joined.is_empty() {
        joined = if composers.is_empty() {
            UNKNOWN_ARTIST.to_string()
        } else {
            composers.clone()
        };
    }

    ArtistCredits {
        artists: joined,
        composers,
    }
}

/// True if any item appears more than once.
pub fn has_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    !items.iter().all(|item| seen.insert(item))
}
