// File: src/persistence.rs
use crate::core::lexicon::LexiconStore;
use crate::core::types::ProfanityEntry;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Identity of one reference file at the time a snapshot was built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceStamp {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub len: Option<u64>,
}

impl SourceStamp {
    /// Stamps `path` as it is on disk now. A missing file gets empty fields.
    pub fn read(path: &Path) -> Self {
        let metadata = fs::metadata(path).ok();
        Self {
            path: path.to_path_buf(),
            modified: metadata.as_ref().and_then(|m| m.modified().ok()),
            len: metadata.map(|m| m.len()),
        }
    }
}

/// The serializable part of a `LexiconStore`. Fuzzy indexes and counters are
/// rebuilt after loading.
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableState {
    sources: Vec<Option<SourceStamp>>,
    small: Vec<String>,
    large: Vec<String>,
    profanity: Vec<ProfanityEntry>,
}

/// Writes a snapshot of the reference data together with the stamps of the
/// files it was built from. The file is replaced atomically.
pub fn save_to_disk(
    store: &LexiconStore,
    sources: &[Option<SourceStamp>],
    path: &Path,
) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        sources: sources.to_vec(),
        small: store.small().words().to_vec(),
        large: store.large().words().to_vec(),
        profanity: store.profanity_entries().to_vec(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), "Saved lexicon snapshot");
    Ok(())
}

/// Loads a snapshot if it was built from exactly `sources`. Returns `None`
/// when any reference file was added, removed or changed since.
pub fn load_from_disk(
    path: &Path,
    sources: &[Option<SourceStamp>],
    index_distance: usize,
) -> Result<Option<LexiconStore>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    if state.sources != sources {
        debug!(path = %path.display(), "Lexicon snapshot is stale");
        return Ok(None);
    }

    Ok(Some(LexiconStore::new(
        state.small,
        state.large,
        state.profanity,
        index_distance,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn snapshot_round_trips_reference_data() {
        let store = LexiconStore::new(
            vec!["मेरा".to_string(), "नाम".to_string()],
            vec!["काम".to_string()],
            vec![ProfanityEntry { roman: "mulle".into(), deva: "मुल्ले".into() }],
            1,
        );
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("lexicons.bin");

        save_to_disk(&store, &[], &path).unwrap();
        let loaded = load_from_disk(&path, &[], 1).unwrap().unwrap();

        assert_eq!(loaded.small().words(), store.small().words());
        assert_eq!(loaded.large().words(), store.large().words());
        assert_eq!(loaded.profanity_canonical("mulle"), Some("मुल्ले"));
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_from_disk(&dir.path().join("absent.bin"), &[], 1).is_err());
    }

    #[test]
    fn changed_source_makes_snapshot_stale() {
        let dir = tempdir().unwrap();
        let words = dir.path().join("hindi_words.csv");
        fs::write(&words, "नाम\n").unwrap();
        let path = dir.path().join("lexicons.bin");
        let store = LexiconStore::new(vec!["नाम".to_string()], Vec::<String>::new(), Vec::<ProfanityEntry>::new(), 1);

        let built_from = vec![Some(SourceStamp::read(&words)), None];
        save_to_disk(&store, &built_from, &path).unwrap();
        assert!(load_from_disk(&path, &built_from, 1).unwrap().is_some());

        fs::write(&words, "नाम,काम\n").unwrap();
        let now = vec![Some(SourceStamp::read(&words)), None];
        assert!(load_from_disk(&path, &now, 1).unwrap().is_none());

        // a newly configured file also invalidates
        let added = vec![Some(SourceStamp::read(&words)), Some(SourceStamp::read(&words))];
        assert!(load_from_disk(&path, &added, 1).unwrap().is_none());
    }

    #[test]
    fn missing_file_stamp_has_no_metadata() {
        let dir = tempdir().unwrap();
        let stamp = SourceStamp::read(&dir.path().join("absent.csv"));
        assert_eq!(stamp.modified, None);
        assert_eq!(stamp.len, None);
    }
}
