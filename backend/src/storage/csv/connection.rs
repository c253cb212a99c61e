use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::codec::LEDGER_HEADER;
use crate::storage::LedgerError;

/// CsvConnection manages the data directory and ensures the ledger
/// file exists with its header row.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new CSV connection in the default data directory.
    /// Honors LEDGER_DATA_DIR, otherwise uses ~/.asset-ledger.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("LEDGER_DATA_DIR") {
            info!("Using data directory from LEDGER_DATA_DIR: {}", dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir).join(".asset-ledger");
        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the path of the ledger CSV file
    pub fn ledger_file_path(&self) -> PathBuf {
        self.base_directory.join("ledger.csv")
    }

    /// Ensure the ledger file exists with the fixed header row
    pub fn ensure_ledger_file_exists(&self) -> Result<(), LedgerError> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }

        let file_path = self.ledger_file_path();
        if !file_path.exists() {
            let mut header = LEDGER_HEADER.join(",");
            header.push('\n');
            fs::write(&file_path, header)?;
        }

        Ok(())
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_ledger_file_with_header() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;

        connection.ensure_ledger_file_exists()?;

        let contents = fs::read_to_string(connection.ledger_file_path())?;
        assert_eq!(
            contents,
            "accountType,currency,amount,description,recordedAt,normalizedAmount,classification\n"
        );
        Ok(())
    }

    #[test]
    fn leaves_existing_ledger_file_alone() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;

        let existing = format!("{}\ncash,CNY,100,lunch,t,100,asset\n", LEDGER_HEADER.join(","));
        fs::write(connection.ledger_file_path(), &existing)?;

        connection.ensure_ledger_file_exists()?;

        let contents = fs::read_to_string(connection.ledger_file_path())?;
        assert_eq!(contents, existing);
        Ok(())
    }

    #[test]
    fn creates_missing_base_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("data").join("ledger");

        let connection = CsvConnection::new(&nested)?;
        assert!(nested.exists());

        connection.ensure_ledger_file_exists()?;
        assert!(connection.ledger_file_path().exists());
        Ok(())
    }
}
