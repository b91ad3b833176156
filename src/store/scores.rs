//! Leaderboard file
//!
//! The whole leaderboard is a single JSON array of [`ScoreRecord`]s. Every
//! operation reads or writes the complete file; a missing file counts as an
//! empty leaderboard and is created on first use.

use crate::error::{BlackjackError, BlackjackResult};
use crate::game::Round;
use chrono::Local;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default leaderboard location, relative to the working directory
pub const DEFAULT_SCORES_FILE: &str = "scores.json";

/// Format of the `date` field, e.g. `9/13/2024, 3:04:05 PM`
const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One finished round as stored on the leaderboard
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub name: String,
    #[serde(rename = "date")]
    pub timestamp: String,
    #[serde(rename = "winner")]
    pub winner_label: String,
    pub player_score: u32,
    pub bank_score: u32,
}

impl ScoreRecord {
    /// Record for a round, stamped with `timestamp`
    pub fn new(round: &Round, timestamp: impl Into<String>) -> Self {
        Self {
            name: round.player_name().to_string(),
            timestamp: timestamp.into(),
            winner_label: round.winner().label().to_string(),
            player_score: round.player_total(),
            bank_score: round.bank_total(),
        }
    }

    /// Record for a round, stamped with the current local time
    pub fn now(round: &Round) -> Self {
        Self::new(round, Local::now().format(DATE_FORMAT).to_string())
    }
}

/// Persisted, ordered list of past rounds
pub type Leaderboard = Vec<ScoreRecord>;

/// Leaderboard backed by a JSON file
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole leaderboard, creating an empty file if none exists
    ///
    /// A file holding nothing but whitespace reads as an empty leaderboard.
    /// Anything else that is not a JSON score list, invalid UTF-8 included,
    /// is reported as [`BlackjackError::CorruptStore`].
    pub fn load(&self) -> BlackjackResult<Leaderboard> {
        self.ensure_initialized()?;
        let data = fs::read(&self.path)?;
        if data.iter().all(u8::is_ascii_whitespace) {
            debug!("Leaderboard {:?} is blank", self.path);
            return Ok(Leaderboard::new());
        }
        let scores: Leaderboard =
            serde_json::from_slice(&data).map_err(|source| BlackjackError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} scores from {:?}", scores.len(), self.path);
        Ok(scores)
    }

    /// Add a record to the end of the leaderboard
    pub fn append(&self, record: ScoreRecord) -> BlackjackResult<()> {
        let mut scores = self.load()?;
        info!(
            "Saving score for {}: {} vs bank {} ({})",
            record.name, record.player_score, record.bank_score, record.winner_label
        );
        scores.push(record);
        self.write(&scores)
    }

    /// Discard every record
    pub fn reset(&self) -> BlackjackResult<()> {
        info!("Clearing leaderboard {:?}", self.path);
        self.write(&[])
    }

    /// True when the file exists and holds at least one record
    pub fn has_scores(&self) -> BlackjackResult<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() == 0 => Ok(false),
            Ok(_) => Ok(!self.load()?.is_empty()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn ensure_initialized(&self) -> BlackjackResult<()> {
        match fs::metadata(&self.path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Creating empty leaderboard at {:?}", self.path);
                self.write(&[])
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the file contents. Writes a sibling temp file and renames it
    /// over the target so readers never see a half-written leaderboard.
    fn write(&self, scores: &[ScoreRecord]) -> BlackjackResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.tmp_path();
        let written = Self::write_tmp(&tmp_path, scores)
            .and_then(|()| fs::rename(&tmp_path, &self.path).map_err(Into::into));

        if let Err(e) = written {
            warn!("Failed to replace {:?}: {}", self.path, e);
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(())
    }

    fn write_tmp(tmp_path: &Path, scores: &[ScoreRecord]) -> BlackjackResult<()> {
        let file = File::create(tmp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, scores).map_err(BlackjackError::Encode)?;
        writer.flush()?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_SCORES_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Leaderboard ordered by player name, ignoring case
///
/// The sort is stable: rounds by the same player stay in the order they were
/// played.
pub fn sorted_view(scores: &[ScoreRecord]) -> Leaderboard {
    let mut sorted = scores.to_vec();
    sorted.sort_by_cached_key(|s| s.name.to_lowercase());
    sorted
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::ops::Deref;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    /// Temp directory removed again when dropped
    pub(crate) struct ScratchDir(PathBuf);

    impl Deref for ScratchDir {
        type Target = Path;

        fn deref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    /// Fresh, empty directory under the system temp dir
    pub(crate) fn scratch_dir(tag: &str) -> ScratchDir {
        let dir = std::env::temp_dir().join(format!(
            "blackjack-cli-{}-{}-{}",
            tag,
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        ScratchDir(dir)
    }

    #[test]
    fn test_scratch_dir_removed_on_drop() {
        let dir = scratch_dir("drop");
        let path = dir.to_path_buf();
        std::fs::write(path.join("f"), "x").unwrap();
        drop(dir);
        assert!(!path.exists());
    }
}
