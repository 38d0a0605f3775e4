//! Log file path derivation and folder provisioning

use super::error::{LoggerError, Result};
use super::params::{resolve, DEFAULT_FILE_NAME_TEMPLATE};
use super::severity::Severity;
use super::template::render;
use super::timestamp;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Maps rendered file-name templates onto files under the logs folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    base: PathBuf,
    extension: String,
}

impl LogPaths {
    pub fn new(base: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the file a template renders to on `date`
    ///
    /// The rendered name must stay under the base folder: absolute names,
    /// `.` / `..` components and empty names are rejected.
    pub fn file_path(&self, file_name_template: &str, date: &str) -> Result<PathBuf> {
        let rendered = render(file_name_template, [("date", date)]);
        let relative = PathBuf::from(format!("{}.{}", rendered, self.extension));

        let contained = !rendered.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !contained {
            return Err(LoggerError::config(
                "fileNameTemplate",
                format!(
                    "'{}' does not resolve to a file under '{}'",
                    file_name_template,
                    self.base.display()
                ),
            ));
        }

        Ok(self.base.join(relative))
    }

    /// Path of the shared main log on `date`
    pub fn main_log_path(&self, date: &str) -> Result<PathBuf> {
        self.file_path(DEFAULT_FILE_NAME_TEMPLATE, date)
    }

    /// One file per registry entry, deduplicated
    pub fn all_file_paths(&self, date: &str) -> Result<BTreeSet<PathBuf>> {
        Severity::ALL
            .iter()
            .map(|severity| self.file_path(&resolve(*severity, None).file_name_template, date))
            .collect()
    }

    /// Parent folders of [`Self::all_file_paths`]
    pub fn all_folders(&self, date: &str) -> Result<BTreeSet<PathBuf>> {
        Ok(self
            .all_file_paths(date)?
            .iter()
            .filter_map(|file| file.parent().map(Path::to_path_buf))
            .collect())
    }

    /// Create every missing folder recursively
    ///
    /// Returns the folders that had to be created. Existing folders are left
    /// untouched, so calling this repeatedly is harmless.
    pub fn ensure_folders(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for folder in self.all_folders(&timestamp::date_only())? {
            if folder.is_dir() {
                continue;
            }
            std::fs::create_dir_all(&folder)
                .map_err(|e| LoggerError::folder_provision(&folder, e))?;
            created.push(folder);
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DATE: &str = "2025-01-08";

    #[test]
    fn test_file_path_rendering() {
        let paths = LogPaths::new("/var/log/app", "log");
        assert_eq!(
            paths.file_path("{date}_error", DATE).unwrap(),
            PathBuf::from("/var/log/app/2025-01-08_error.log")
        );
        assert_eq!(
            paths.file_path("sql/sql_{date}", DATE).unwrap(),
            PathBuf::from("/var/log/app/sql/sql_2025-01-08.log")
        );
        assert_eq!(
            paths.main_log_path(DATE).unwrap(),
            PathBuf::from("/var/log/app/2025-01-08.log")
        );
    }

    #[test]
    fn test_custom_extension() {
        let paths = LogPaths::new("/var/log/app", "txt");
        assert_eq!(
            paths.main_log_path(DATE).unwrap(),
            PathBuf::from("/var/log/app/2025-01-08.txt")
        );
    }

    #[test]
    fn test_escaping_templates_rejected() {
        let paths = LogPaths::new("/var/log/app", "log");
        for template in ["../{date}", "/etc/{date}", "a/../../{date}", "./{date}", ""] {
            let err = paths.file_path(template, DATE).unwrap_err();
            assert!(err.is_configuration_error(), "{template}");
        }
    }

    #[test]
    fn test_all_file_paths_under_base() {
        let paths = LogPaths::new("/var/log/app", "log");
        let files = paths.all_file_paths(DATE).unwrap();

        // fatal shares the error log
        assert_eq!(files.len(), Severity::ALL.len() - 1);
        assert!(files.iter().all(|f| f.starts_with("/var/log/app")));
        assert!(files.contains(Path::new("/var/log/app/messages/message_2025-01-08.log")));
        assert!(files.contains(Path::new("/var/log/app/2025-01-08_debug.log")));
    }

    #[test]
    fn test_all_folders() {
        let paths = LogPaths::new("/var/log/app", "log");
        let folders: Vec<_> = paths.all_folders(DATE).unwrap().into_iter().collect();
        assert_eq!(
            folders,
            vec![
                PathBuf::from("/var/log/app"),
                PathBuf::from("/var/log/app/messages"),
                PathBuf::from("/var/log/app/sql"),
                PathBuf::from("/var/log/app/webserver"),
            ]
        );
    }

    #[test]
    fn test_ensure_folders_is_idempotent() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("logs");
        let paths = LogPaths::new(&base, "log");

        let created = paths.ensure_folders().unwrap();
        assert_eq!(created.len(), 4);
        assert!(base.join("webserver").is_dir());

        let created = paths.ensure_folders().unwrap();
        assert!(created.is_empty());
        let entries = std::fs::read_dir(&base).unwrap().count();
        assert_eq!(entries, 3);
    }

    #[test]
    fn test_ensure_folders_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_folder");
        std::fs::write(&blocker, b"x").unwrap();

        let paths = LogPaths::new(&blocker, "log");
        let err = paths.ensure_folders().unwrap_err();
        assert!(matches!(err, LoggerError::FolderProvision { .. }));
    }
}
