use super::BackendError;
use std::fs;
use std::path::{Path, PathBuf};

const DRAFT_FILE: &str = "last_json_input.txt";

/// Keeps the last JSON editor content so it survives a restart
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn open(data_dir: &Path) -> Result<Self, BackendError> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(DRAFT_FILE),
        })
    }

    pub fn save(&self, content: &str) -> Result<(), BackendError> {
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Empty when nothing was saved yet
    pub fn load(&self) -> Result<String, BackendError> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_save_and_load_draft() {
        let test_dir = std::env::temp_dir().join(format!("test_draft_{}", Uuid::new_v4()));
        let store = DraftStore::open(&test_dir).unwrap();

        assert_eq!(store.load().unwrap(), "");
        store.save("{\"draft\": true}").unwrap();
        assert_eq!(store.load().unwrap(), "{\"draft\": true}");

        let _ = fs::remove_dir_all(&test_dir);
    }
}
