use super::*;

use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

/// Flat JSON file holding the whole contact sequence.
pub struct JsonStorage {
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory the staging file is created in, so the final rename never
    /// crosses a filesystem.
    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut file = match OpenOptions::new().read(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_str(&data)?;

        match value {
            // An empty list may have been written as `null`
            Value::Null => Ok(Vec::new()),
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            _ => Err(AppError::Validation(
                "Invalid JSON structure: expected an array of contacts".to_string(),
            )),
        }
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contacts = serde_json::to_string_pretty(contacts)?;

        // Each save gets its own uniquely named sibling; it is removed on drop
        // if anything below fails.
        let mut staging = NamedTempFile::new_in(self.staging_dir())?;
        staging.write_all(json_contacts.as_bytes())?;
        staging.as_file().sync_all()?;
        staging.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "contacts written"
        );
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new(
                "Uche".to_string(),
                "01234567890".to_string(),
                "ucheuche@gmail.com".to_string(),
                "12 Aba Road".to_string(),
            ),
            Contact::new(
                "Alex".to_string(),
                "01234567890".to_string(),
                "".to_string(),
                "".to_string(),
            ),
        ]
    }

    #[test]
    fn json_store_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("contacts.json"));

        storage.save(&sample())?;
        let loaded = storage.load()?;

        assert_eq!(loaded, sample());
        Ok(())
    }

    #[test]
    fn missing_file_loads_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("absent.json"));

        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn null_and_blank_files_load_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let storage = JsonStorage::new(&path);

        fs::write(&path, "null")?;
        assert!(storage.load()?.is_empty());

        fs::write(&path, "  \n")?;
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        let storage = JsonStorage::new(&path);

        fs::write(&path, "[{\"name\": ")?;
        assert!(matches!(storage.load(), Err(AppError::Json(_))));

        fs::write(&path, "{\"name\": \"Bob\"}")?;
        assert!(matches!(storage.load(), Err(AppError::Validation(_))));
        Ok(())
    }

    #[test]
    fn writes_indented_json_and_leaves_no_staging_file() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("contacts.json");
        let storage = JsonStorage::new(&path);

        storage.save(&sample()[..1])?;

        let written = fs::read_to_string(&path)?;
        assert_eq!(
            written,
            "[\n  {\n    \"name\": \"Uche\",\n    \"phone\": \"01234567890\",\n    \
             \"email\": \"ucheuche@gmail.com\",\n    \"address\": \"12 Aba Road\"\n  }\n]"
        );
        let entries: Vec<_> = fs::read_dir(dir.path().join("nested"))?
            .map(|e| e.map(|e| e.file_name()))
            .collect::<Result<_, _>>()?;
        assert_eq!(entries, ["contacts.json"]);
        Ok(())
    }

    #[test]
    fn concurrent_saves_to_one_path_never_collide() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");

        let writers: Vec<_> = (0..4)
            .map(|i| {
                let storage = JsonStorage::new(&path);
                std::thread::spawn(move || {
                    let contacts = sample()[..i % 2 + 1].to_vec();
                    for _ in 0..25 {
                        storage.save(&contacts)?;
                    }
                    Ok::<_, AppError>(())
                })
            })
            .collect();

        for writer in writers {
            writer.join().expect("writer thread panicked")?;
        }

        // Whichever writer finished last, the file holds one complete sequence
        let loaded = JsonStorage::new(&path).load()?;
        assert!(loaded == sample()[..1] || loaded == sample());
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn save_overwrites_previous_content() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("contacts.json"));

        storage.save(&sample())?;
        storage.save(&[])?;

        assert!(storage.load()?.is_empty());
        Ok(())
    }
}
