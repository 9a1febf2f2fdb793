//! Directory listing for picking files to upload.

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Names of the entries directly inside `dir`, sorted, without `.git`.
///
/// Directories are listed too; staging one stages its contents.
pub fn list_directory(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name != ".git" {
            names.push(name);
        }
    }
    names.sort();
    debug!("Listed {} entries in {}", names.len(), dir.display());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::fs;

    #[test]
    fn test_list_directory_sorted_without_git() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let names = list_directory(dir.path()).unwrap();

        assert_eq!(names, vec!["a.txt", "b.txt", "src"]);
    }

    #[test]
    fn test_list_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = list_directory(&dir.path().join("missing"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
