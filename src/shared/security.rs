use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Upper bound for configuration files read from disk (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Reads a small text file after checking that it is a regular file of bounded size
///
/// # Security
/// `symlink_metadata()` is used so that a symbolic link is rejected instead of
/// being followed to its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link or not a regular file
/// - The file is larger than `max_size`
/// - The content is not valid UTF-8
pub fn read_guarded_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path).with_context(|| {
        format!(
            "Failed to read {} metadata: {}",
            file_description,
            path.display()
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} files must be regular files.",
            path.display(),
            file_description
        );
    }

    if !metadata.is_file() {
        anyhow::bail!(
            "{} is not a regular file: {}",
            file_description,
            path.display()
        );
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    fs::read_to_string(path).with_context(|| {
        format!("Failed to read {}: {}", file_description, path.display())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_guarded_file_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yml");
        fs::write(&file_path, "format: json").unwrap();

        let content = read_guarded_file(&file_path, "config", MAX_CONFIG_FILE_SIZE).unwrap();
        assert_eq!(content, "format: json");
    }

    #[test]
    fn test_read_guarded_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/config.yml");
        let result = read_guarded_file(&path, "config", MAX_CONFIG_FILE_SIZE);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_guarded_file_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_guarded_file(temp_dir.path(), "config", MAX_CONFIG_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_guarded_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("big.yml");
        fs::write(&file_path, "x".repeat(64)).unwrap();

        let result = read_guarded_file(&file_path, "config", 16);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_guarded_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yml");
        let link = temp_dir.path().join("link.yml");
        fs::write(&target, "format: xml").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = read_guarded_file(&link, "config", MAX_CONFIG_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }
}
