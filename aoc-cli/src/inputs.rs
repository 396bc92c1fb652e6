//! Local puzzle input lookup

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based store of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}/day{day:02}.txt`. An explicit
/// override file, when set, replaces the lookup for one year/day.
pub struct InputStore {
    input_dir: PathBuf,
    override_file: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            override_file: None,
        }
    }

    /// Read `file` instead of the input directory for `year`/`day`
    pub fn with_override(mut self, year: u16, day: u8, file: PathBuf) -> Self {
        self.override_file = Some((year, day, file));
        self
    }

    /// Path an input is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some((y, d, file)) if *y == year && *d == day => file.clone(),
            _ => self
                .input_dir
                .join(year.to_string())
                .join(format!("day{:02}.txt", day)),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        tracing::debug!(path = %path.display(), "reading input");
        read(&path)
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(
            store.input_path(2024, 1),
            PathBuf::from("inputs").join("2024").join("day01.txt")
        );
        assert_eq!(
            store.input_path(2023, 25),
            PathBuf::from("inputs").join("2023").join("day25.txt")
        );
    }

    #[test]
    fn test_read_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 2));
        assert!(matches!(store.get(2024, 2), Err(InputError::NotFound(_))));

        let input = "7 6 4 2 1\n1 2 7 8 9\n";
        fs::create_dir_all(temp.path().join("2024")).unwrap();
        fs::write(temp.path().join("2024").join("day02.txt"), input).unwrap();

        assert!(store.contains(2024, 2));
        assert_eq!(store.get(2024, 2).unwrap(), input);
    }

    #[test]
    fn test_override_applies_to_one_day() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.txt");
        fs::write(&file, "mul(2,3)").unwrap();

        let store = InputStore::new(temp.path().join("missing")).with_override(2024, 3, file);
        assert_eq!(store.get(2024, 3).unwrap(), "mul(2,3)");
        assert!(matches!(store.get(2024, 5), Err(InputError::NotFound(_))));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2024").join("day01.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 1));
        assert!(matches!(store.get(2024, 1), Err(InputError::Io { .. })));
    }

    proptest! {
        #[test]
        fn prop_input_path_layout(year in 2015u16..2035, day in 1u8..=25) {
            let store = InputStore::new(PathBuf::from("root"));
            let path = store.input_path(year, day);
            let file_name = format!("day{:02}.txt", day);
            let year_dir = PathBuf::from("root").join(year.to_string());
            prop_assert_eq!(path.file_name().and_then(|f| f.to_str()), Some(file_name.as_str()));
            prop_assert_eq!(path.parent(), Some(year_dir.as_path()));
        }
    }
}
