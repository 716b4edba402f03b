//! Lifetime game records, saved in a checksummed binary file.

use crate::constants::RECORDS_VERSION_MAGIC;
use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Running totals across every game played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecords {
    pub games_played: u64,
    pub games_won: u64,
    pub huts_acquired: u64,
    /// Unix timestamp of the last finished game
    pub last_played_epoch: i64,
}

impl GameRecords {
    /// Folds one finished game into the totals.
    pub fn record_game(&mut self, won: bool, huts_acquired: usize) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
        }
        self.huts_acquired += huts_acquired as u64;
        self.last_played_epoch = Utc::now().timestamp();
    }

    /// One-line summary for the end of a game.
    pub fn summary(&self) -> String {
        format!(
            "Games played: {}, won: {}, huts acquired: {}",
            self.games_played, self.games_won, self.huts_acquired
        )
    }
}

/// Saves and loads [`GameRecords`] with a checksummed binary format.
///
/// File layout: version magic (8 bytes), data length (4 bytes), serialized
/// records, SHA-256 checksum over everything before it (32 bytes).
pub struct RecordManager {
    records_path: PathBuf,
}

impl RecordManager {
    /// Sets up the records file in the platform data directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "wargame").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;

        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;

        Ok(Self {
            records_path: data_dir.join("records.dat"),
        })
    }

    /// Uses an explicit file path instead of the platform directory.
    pub fn at_path(records_path: PathBuf) -> Self {
        Self { records_path }
    }

    pub fn save(&self, records: &GameRecords) -> io::Result<()> {
        let data = bincode::serialize(records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(RECORDS_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.records_path)?;
        file.write_all(&RECORDS_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    pub fn load(&self) -> io::Result<GameRecords> {
        let mut file = fs::File::open(&self.records_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        if u64::from_le_bytes(version_bytes) != RECORDS_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "records file has an unknown version magic",
            ));
        }

        let mut len_bytes = [0u8; 4];
        file.read_exact(&mut len_bytes)?;
        let data_len = u32::from_le_bytes(len_bytes) as usize;

        let mut data = vec![0u8; data_len];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(len_bytes);
        hasher.update(&data);
        if hasher.finalize().as_slice() != stored_checksum {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "records file failed checksum verification",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Loads the records, falling back to fresh ones when the file is
    /// missing or corrupt.
    pub fn load_or_default(&self) -> GameRecords {
        self.load().unwrap_or_default()
    }
}
