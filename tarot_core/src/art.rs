use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::card::{parse_major, Card, MAJOR_PREFIX};

include!(concat!(env!("OUT_DIR"), "/embedded_art.rs"));

/// File extension of art assets
pub const ART_EXTENSION: &str = "ans";

#[derive(Debug, Error)]
pub enum ArtError {
    #[error("failed to read art directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read art asset {}: {source}", path.display())]
    ReadAsset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed major arcana asset name `{0}`")]
    MajorName(String),
}

/// Glyph art for card faces, keyed by asset name.
///
/// Built once at startup and only read afterwards. Anything that fails to
/// load is left out, so a card without art falls back to its label.
#[derive(Debug, Clone, Default)]
pub struct ArtCatalog {
    art: HashMap<String, Vec<String>>,
    major_keys: BTreeMap<usize, String>,
}

impl ArtCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Art compiled into the binary from `tarot_core/assets`
    pub fn embedded() -> Self {
        Self::from_entries(EMBEDDED_ART.iter().copied())
    }

    /// Load art from a directory, falling back to an empty catalog when the
    /// directory can't be read.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        match Self::try_from_dir(dir) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("{}; cards will render without art", e);
                Self::empty()
            }
        }
    }

    /// Like `from_dir`, but reports an unreadable directory. Individual
    /// assets that can't be read are still skipped.
    pub fn try_from_dir(dir: impl AsRef<Path>) -> Result<Self, ArtError> {
        let dir = dir.as_ref();
        let read_dir = fs::read_dir(dir).map_err(|source| ArtError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(source) => {
                    log::warn!(
                        "{}",
                        ArtError::ReadDir {
                            path: dir.to_path_buf(),
                            source
                        }
                    );
                    continue;
                }
            };
            if !has_art_extension(&path) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let name = name.to_string();
            match fs::read_to_string(&path) {
                Ok(contents) => entries.push((name, contents)),
                Err(source) => log::warn!("{}", ArtError::ReadAsset { path, source }),
            }
        }

        Ok(Self::from_entries(entries))
    }

    /// Build a catalog from `(file name, contents)` pairs.
    ///
    /// Names are sorted first, so when two files share a stem the last one
    /// in sort order wins.
    pub fn from_entries<N, C>(entries: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut entries: Vec<(N, C)> = entries
            .into_iter()
            .filter(|(name, _)| has_art_extension(Path::new(name.as_ref())))
            .collect();
        entries.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

        let mut catalog = Self::empty();
        for (name, contents) in entries {
            let Some(key) = Path::new(name.as_ref())
                .file_stem()
                .and_then(|stem| stem.to_str())
            else {
                continue;
            };

            if key.starts_with(MAJOR_PREFIX) {
                match major_ordinal(key) {
                    Ok(index) => {
                        catalog.major_keys.insert(index, key.to_string());
                    }
                    Err(e) => log::debug!("skipping major key: {}", e),
                }
            }
            catalog
                .art
                .insert(key.to_string(), split_lines(contents.as_ref()));
        }

        log::debug!(
            "art catalog loaded: {} faces, {} major arcana",
            catalog.art.len(),
            catalog.major_keys.len()
        );
        catalog
    }

    pub fn art(&self, key: &str) -> Option<&[String]> {
        self.art.get(key).map(Vec::as_slice)
    }

    /// Key of the art for `card`, if it has one
    pub fn art_key(&self, card: &Card) -> Option<String> {
        if card.is_major() {
            return self.major_keys.get(&card.value).cloned();
        }
        card.suited_art_key()
    }

    pub fn art_for(&self, card: &Card) -> Option<&[String]> {
        let key = self.art_key(card)?;
        self.art(&key)
    }

    /// Indices of the major arcana with art, ascending
    pub fn major_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.major_keys.keys().copied()
    }

    pub fn major_count(&self) -> usize {
        self.major_keys.len()
    }

    pub fn len(&self) -> usize {
        self.art.len()
    }

    pub fn is_empty(&self) -> bool {
        self.art.is_empty()
    }
}

fn has_art_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == ART_EXTENSION)
}

/// `RWS_Tarot_07_Chariot` -> 7
fn major_ordinal(stem: &str) -> Result<usize, ArtError> {
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() < 3 {
        return Err(ArtError::MajorName(stem.to_string()));
    }
    parse_major(parts[2])
        .map(|card| card.value)
        .ok_or_else(|| ArtError::MajorName(stem.to_string()))
}

fn split_lines(contents: &str) -> Vec<String> {
    contents
        .trim_end_matches(['\n', '\r'])
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
