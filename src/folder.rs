use crate::error::CaptureError;
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(target_os = "windows")]
const FILE_MANAGER: &str = "explorer";
#[cfg(target_os = "macos")]
const FILE_MANAGER: &str = "open";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const FILE_MANAGER: &str = "xdg-open";

/// Show `dir` in the platform file manager. Does not wait for it to exit.
pub fn open_folder(dir: &Path) -> Result<(), CaptureError> {
    let path = absolute(dir);
    tracing::info!("Opening {} with {}", path.display(), FILE_MANAGER);

    Command::new(FILE_MANAGER)
        .arg(&path)
        .spawn()
        .map(|_child| ())
        .map_err(|source| CaptureError::OpenFolder { path, source })
}

/// Lexically absolute; symlinks are kept and Windows gets no `\\?\` prefix,
/// which Explorer does not understand
fn absolute(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_resolves_relative_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let resolved = absolute(tmp.path());
        assert!(resolved.is_absolute());

        let missing = absolute(Path::new("not-created-yet"));
        assert!(missing.is_absolute());
        assert!(missing.ends_with("not-created-yet"));
    }

    #[test]
    fn absolute_keeps_existing_dirs_in_plain_form() {
        let tmp = tempfile::tempdir().unwrap();
        let resolved = absolute(tmp.path());
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(tmp.path().file_name().unwrap()));

        #[cfg(windows)]
        assert!(
            !resolved.to_string_lossy().starts_with(r"\\?\"),
            "extended-length path {}",
            resolved.display()
        );
    }
}
