//! Persisting the compatibility index
//!
//! The index is stored as RON: the vocabulary fingerprint and dimensions
//! followed by every guess's sorted hint rows. The hint table is rebuilt from
//! the rows on load.

use super::compatibility::{CompatibilityIndex, GuessRows};
use crate::core::{HintCodec, Vocabulary};
use crate::error::WordleError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    fingerprint: u64,
    word_length: usize,
    num_words: usize,
    rows: &'a [GuessRows],
}

#[derive(Deserialize)]
struct Snapshot {
    fingerprint: u64,
    word_length: usize,
    num_words: usize,
    rows: Vec<GuessRows>,
}

impl CompatibilityIndex {
    /// Write the index to `writer`
    ///
    /// # Errors
    /// Returns `WordleError::Cache` if serialization or writing fails.
    pub fn save<W: Write>(&self, writer: W) -> Result<(), WordleError> {
        let snapshot = SnapshotRef {
            fingerprint: self.fingerprint(),
            word_length: self.codec().word_length(),
            num_words: self.num_words(),
            rows: self.rows(),
        };
        ron::ser::to_writer(writer, &snapshot).map_err(|e| WordleError::Cache(e.to_string()))
    }

    /// Read an index previously written by [`save`](Self::save)
    ///
    /// # Errors
    /// Returns `WordleError::Cache` for malformed data and
    /// `WordleError::IndexMismatch` if it was built from another vocabulary.
    pub fn load<R: Read>(vocab: &Vocabulary, reader: R) -> Result<Self, WordleError> {
        let snapshot: Snapshot =
            ron::de::from_reader(reader).map_err(|e| WordleError::Cache(e.to_string()))?;

        if snapshot.fingerprint != vocab.fingerprint()
            || snapshot.word_length != vocab.word_length()
            || snapshot.num_words != vocab.num_words()
            || snapshot.rows.len() != vocab.num_guesses()
        {
            return Err(WordleError::IndexMismatch);
        }

        let codec = HintCodec::new(snapshot.word_length)?;
        Self::from_rows(codec, snapshot.num_words, snapshot.fingerprint, snapshot.rows)
            .ok_or_else(|| WordleError::Cache("rows do not partition the vocabulary".to_string()))
    }

    /// Load the index from `path`, or build it and write it there
    ///
    /// A cache built for a different vocabulary is rebuilt and overwritten.
    ///
    /// # Errors
    /// Returns an error if the cache file is corrupt or cannot be written.
    pub fn load_or_build(path: &Path, vocab: &Vocabulary) -> Result<Self, WordleError> {
        if path.exists() {
            let start = Instant::now();
            match Self::load(vocab, BufReader::new(File::open(path)?)) {
                Ok(index) => {
                    info!(
                        "Loaded compatibility index from {} in {:.2?}",
                        path.display(),
                        start.elapsed()
                    );
                    return Ok(index);
                }
                Err(WordleError::IndexMismatch) => {
                    warn!(
                        "{} was built for a different vocabulary, rebuilding",
                        path.display()
                    );
                }
                Err(e) => return Err(e),
            }
        }

        let index = Self::build(vocab);
        let mut writer = BufWriter::new(File::create(path)?);
        index.save(&mut writer)?;
        writer.flush()?;
        info!("Saved compatibility index to {}", path.display());
        Ok(index)
    }
}
