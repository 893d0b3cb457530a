use super::profile::PlayerProfile;
use crate::core::constants::SAVE_VERSION_MAGIC;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Magic (8) + length (4) + SHA-256 (32).
const SAVE_FRAME_OVERHEAD: u64 = 44;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode or decode profile: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    Version { expected: u64, found: u64 },

    #[error("checksum verification failed")]
    Checksum,

    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Saves and loads the player profile in a checksummed binary format.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Save manager writing to the platform config directory.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs =
            ProjectDirs::from("", "", "eternal-realms").ok_or(SaveError::NoConfigDir)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("profile.dat"),
        })
    }

    /// Save manager writing to an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - bincode-encoded profile (variable length)
    /// - SHA256 checksum over the three fields above (32 bytes)
    pub fn save(&self, profile: &PlayerProfile) -> Result<(), SaveError> {
        let data = bincode::serialize(profile)?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;
        tracing::debug!(path = %self.save_path.display(), bytes = data.len(), "profile saved");
        Ok(())
    }

    pub fn load(&self) -> Result<PlayerProfile, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::Version {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        // The payload must fit between the header and the checksum.
        let file_len = file.metadata()?.len();
        if data_len as u64 > file_len.saturating_sub(SAVE_FRAME_OVERHEAD) {
            return Err(SaveError::Checksum);
        }

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(SaveError::Checksum);
        }

        Ok(bincode::deserialize(&data)?)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{enhance, Catalog, ItemCatalog};
    use crate::player::PlayerState;
    use crate::rarity::TierId;

    fn temp_manager(name: &str) -> SaveManager {
        let path = std::env::temp_dir()
            .join("eternal-realms-tests")
            .join(format!("{name}-{}.dat", std::process::id()));
        let _ = fs::remove_file(&path);
        SaveManager::with_path(path)
    }

    #[test]
    fn test_save_and_load() {
        let manager = temp_manager("roundtrip");
        let catalog = Catalog::builtin();

        let mut profile = PlayerProfile::new("Saver");
        profile.add_gold(1234);
        profile.luck = Some(7.5);
        profile.set_profession_level("mining", 12);
        profile.add_item(
            enhance(catalog.item("iron_sword").unwrap(), TierId::Epic),
            1,
        );
        profile.unlock_feature("epic_finder");

        manager.save(&profile).expect("save");
        assert!(manager.save_exists());
        let loaded = manager.load().expect("load");
        assert_eq!(loaded, profile);

        let _ = fs::remove_file(manager.path());
    }

    #[test]
    fn test_corrupted_file_fails_checksum() {
        let manager = temp_manager("corrupt");
        manager.save(&PlayerProfile::default()).expect("save");

        let mut bytes = fs::read(manager.path()).unwrap();
        let idx = 14;
        bytes[idx] ^= 0xFF;
        fs::write(manager.path(), bytes).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::Checksum)));
        let _ = fs::remove_file(manager.path());
    }

    #[test]
    fn test_oversized_length_rejected_before_reading() {
        let manager = temp_manager("oversized");
        manager.save(&PlayerProfile::default()).expect("save");

        let mut bytes = fs::read(manager.path()).unwrap();
        bytes[8..12].copy_from_slice(&u32::MAX.to_le_bytes());
        fs::write(manager.path(), &bytes).unwrap();
        assert!(matches!(manager.load(), Err(SaveError::Checksum)));

        // One byte more than the file can hold is also rejected.
        let payload = bytes.len() as u32 - 44;
        bytes[8..12].copy_from_slice(&(payload + 1).to_le_bytes());
        fs::write(manager.path(), &bytes).unwrap();
        assert!(matches!(manager.load(), Err(SaveError::Checksum)));

        let _ = fs::remove_file(manager.path());
    }

    #[test]
    fn test_wrong_version_rejected() {
        let manager = temp_manager("version");
        manager.save(&PlayerProfile::default()).expect("save");

        let mut bytes = fs::read(manager.path()).unwrap();
        bytes[0] ^= 0x01;
        fs::write(manager.path(), bytes).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::Version { .. })));
        let _ = fs::remove_file(manager.path());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let manager = temp_manager("missing");
        assert!(!manager.save_exists());
        assert!(matches!(manager.load(), Err(SaveError::Io(_))));
    }
}
