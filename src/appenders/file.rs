//! File appender implementation
//!
//! Every record is appended synchronously with a single write, opening the
//! target with create + append on each call, so a daily file name change
//! needs no bookkeeping. Appends to the same path are serialized through a
//! per-path mutex; different paths do not contend. A path's mutex is dropped
//! once no append to it is in flight, so yesterday's files hold no memory.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Default)]
pub struct FileAppender {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl FileAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` plus a line terminator to `path`
    pub fn append_line(&self, path: &Path, line: &str) -> io::Result<()> {
        let path_lock = self.lock_for(path);
        let guard = path_lock.lock();

        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(record.as_bytes()));

        drop(guard);
        self.release(path, path_lock);
        result
    }

    fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        Arc::clone(locks.entry(path.to_path_buf()).or_default())
    }

    /// Forget the mutex of `path` unless another append still holds it
    fn release(&self, path: &Path, path_lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock();
        // one reference in the map, one here
        if Arc::strong_count(&path_lock) == 2 {
            locks.remove(path);
        }
    }

    #[cfg(test)]
    fn tracked_paths(&self) -> usize {
        self.locks.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_appends_lines() -> io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("2025-01-08.log");

        let appender = FileAppender::new();
        appender.append_line(&path, "first")?;
        appender.append_line(&path, "second")?;

        assert_eq!(fs::read_to_string(&path)?, "first\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_idle_paths_are_not_tracked() -> io::Result<()> {
        let dir = tempdir()?;
        let appender = FileAppender::new();

        for day in 1..=31 {
            appender.append_line(&dir.path().join(format!("2025-01-{:02}.log", day)), "line")?;
        }
        assert_eq!(appender.tracked_paths(), 0);

        let missing = dir.path().join("missing").join("x.log");
        assert!(appender.append_line(&missing, "lost").is_err());
        assert_eq!(appender.tracked_paths(), 0);
        Ok(())
    }

    #[test]
    fn test_keeps_existing_content() -> io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("2025-01-08.log");
        fs::write(&path, "older\n")?;

        FileAppender::new().append_line(&path, "newer")?;

        assert_eq!(fs::read_to_string(&path)?, "older\nnewer\n");
        Ok(())
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("2025-01-08.log");

        let err = FileAppender::new().append_line(&path, "lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_concurrent_appends_keep_lines_whole() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.log");
        let appender = Arc::new(FileAppender::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let appender = Arc::clone(&appender);
                let path = path.clone();
                std::thread::spawn(move || {
                    let payload = format!("{}", t).repeat(512);
                    for _ in 0..50 {
                        appender.append_line(&path, &payload).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(appender.tracked_paths(), 0);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 200);
        for line in lines {
            assert_eq!(line.len(), 512);
            let first = line.as_bytes()[0];
            assert!(line.bytes().all(|b| b == first));
        }
    }
}
