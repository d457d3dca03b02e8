use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use common::model::{game::Move, pattern::Pattern};
use tracing::{debug, info, warn};

use crate::error::StoreError;

/// Observation counts per pattern, persisted as `<pattern> <count>` lines.
///
/// Keys are kept sorted so that every lookup and every saved file visits
/// patterns in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternStore {
    counts: BTreeMap<Pattern, u64>,
}

impl PatternStore {
    pub fn new() -> Self {
        PatternStore {
            counts: BTreeMap::new(),
        }
    }

    /// Reads the table at `path`. A missing file is the normal first-run
    /// state and yields an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No pattern store at {:?}, starting empty", path);
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let store =
            Self::read_from(BufReader::new(file)).map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Loaded {} patterns from {:?}", store.len(), path);
        Ok(store)
    }

    /// Parses `<pattern> <count>` lines. Lines that do not parse, including
    /// ones that are not valid UTF-8, are skipped; a repeated pattern keeps
    /// the last count seen.
    pub fn read_from(reader: impl BufRead) -> io::Result<Self> {
        let mut counts = BTreeMap::new();
        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let Ok(line) = std::str::from_utf8(&bytes) else {
                warn!("Skipping undecodable pattern record on line {}", index + 1);
                continue;
            };
            if line.trim().is_empty() {
                continue;
            }
            match Self::parse_line(line) {
                Some((pattern, count)) => {
                    counts.insert(pattern, count);
                }
                None => warn!("Skipping malformed pattern record on line {}: {:?}", index + 1, line),
            }
        }
        Ok(PatternStore { counts })
    }

    fn parse_line(line: &str) -> Option<(Pattern, u64)> {
        let mut fields = line.split_whitespace();
        let (Some(pattern), Some(count), None) = (fields.next(), fields.next(), fields.next())
        else {
            return None;
        };
        Some((pattern.parse().ok()?, count.parse().ok()?))
    }

    /// Rewrites the whole table to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let to_write_error = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }
        let file = File::create(path).map_err(to_write_error)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(to_write_error)?;
        writer.flush().map_err(to_write_error)?;
        info!("Saved {} patterns to {:?}", self.len(), path);
        Ok(())
    }

    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        for (pattern, count) in &self.counts {
            writeln!(writer, "{} {}", pattern, count)?;
        }
        Ok(())
    }

    /// Counts one more observation of `pattern` and returns the new count.
    pub fn record(&mut self, pattern: Pattern) -> u64 {
        let count = self.counts.entry(pattern).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn count(&self, pattern: &Pattern) -> u64 {
        self.counts.get(pattern).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of every count in the table.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, u64)> {
        self.counts.iter().map(|(pattern, count)| (pattern, *count))
    }

    /// Entries strictly longer than `prefix` that begin with it, in key order.
    pub fn matching<'a>(&'a self, prefix: &'a [Move]) -> impl Iterator<Item = (&'a Pattern, u64)> {
        self.counts
            .range(Pattern::from(prefix)..)
            .take_while(move |(pattern, _)| pattern.starts_with(prefix))
            .filter(move |(pattern, _)| pattern.len() > prefix.len())
            .map(|(pattern, count)| (pattern, *count))
    }
}
