use super::*;
use crate::*;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;

/// Default file name of the persisted ledger, also used for exports.
pub const LEDGER_FILE: &str = "poker_points.json";

/// A [`Store`] backed by a single pretty-printed JSON file.
///
/// Each save writes a uniquely named temp file beside the target,
/// syncs it and renames it into place, so readers and other handles
/// on the same path only ever see complete documents.
#[derive(Debug, Clone)]
pub struct Disk {
    path: PathBuf,
}

impl Disk {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// Directory holding the ledger, where temp files must live
    /// for the final rename to stay on one file system.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self::new(LEDGER_FILE)
    }
}

impl Store for Disk {
    fn load(&self) -> Result<Ledger> {
        match std::fs::read_to_string(&self.path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Ledger::default()),
            Err(e) => Err(LedgerError::Storage(e)),
            Ok(text) => Ledger::try_from(text.as_str()).map_err(|e| {
                log::error!("{} is corrupt: {}", self.path.display(), e);
                LedgerError::Corrupt(e)
            }),
        }
    }
    fn save(&self, ledger: &Ledger) -> Result<()> {
        let text = ledger.json().map_err(std::io::Error::from)?;
        let mut temp = tempfile::NamedTempFile::new_in(self.dir())?;
        temp.write_all(text.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        log::debug!("saved {} users to {}", ledger.len(), self.path.display());
        Ok(())
    }
    fn modified(&self) -> Result<Option<SystemTime>> {
        match std::fs::metadata(&self.path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LedgerError::Storage(e)),
            Ok(meta) => Ok(Some(meta.modified()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(pairs: &[(&str, Points)]) -> Ledger {
        pairs.iter().map(|(u, p)| (u.to_string(), *p)).collect()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path().join(LEDGER_FILE));
        assert!(disk.load().unwrap().is_empty());
        assert!(disk.modified().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path().join(LEDGER_FILE));
        let book = ledger(&[("alice", 12), ("bob", -4), ("carol", 0)]);
        disk.save(&book).unwrap();
        assert!(disk.load().unwrap() == book);
        assert!(disk.modified().unwrap().is_some());
    }

    #[test]
    fn save_overwrites_without_merging() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path().join(LEDGER_FILE));
        disk.save(&ledger(&[("alice", 1), ("bob", 2)])).unwrap();
        disk.save(&ledger(&[("carol", 3)])).unwrap();
        assert!(disk.load().unwrap() == ledger(&[("carol", 3)]));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path().join(LEDGER_FILE));
        disk.save(&ledger(&[("alice", 1)])).unwrap();
        let names = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect::<Vec<_>>();
        assert!(names == vec![std::ffi::OsString::from(LEDGER_FILE)]);
    }

    #[test]
    fn file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path().join(LEDGER_FILE));
        disk.save(&ledger(&[("alice", 1)])).unwrap();
        let text = std::fs::read_to_string(disk.path()).unwrap();
        assert!(text == "{\n  \"alice\": 1\n}");
    }

    #[test]
    fn malformed_content_is_corruption_not_empty() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path().join(LEDGER_FILE));
        std::fs::write(disk.path(), "[1, 2, 3]").unwrap();
        assert!(matches!(disk.load(), Err(LedgerError::Corrupt(_))));
        std::fs::write(disk.path(), "{\"alice\": ").unwrap();
        assert!(matches!(disk.load(), Err(LedgerError::Corrupt(_))));
    }

    #[test]
    fn relative_paths_save_beside_the_file() {
        let disk = Disk::new(LEDGER_FILE);
        assert!(disk.dir() == Path::new("."));
    }

    #[test]
    fn handles_sharing_a_path_never_tear_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let ref path = dir.path().join(LEDGER_FILE);
        let big = |seed: Points| {
            (0..500)
                .map(|i| (format!("player-{:03}", i), seed + i))
                .collect::<Ledger>()
        };
        Disk::new(path).save(&big(0)).unwrap();
        let writers = (1..=2)
            .map(|seed| {
                let disk = Disk::new(path);
                let ledger = big(seed * 1000);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        disk.save(&ledger).unwrap();
                    }
                })
            })
            .collect::<Vec<_>>();
        let reader = Disk::new(path);
        while writers.iter().any(|w| !w.is_finished()) {
            assert!(reader.load().unwrap().len() == 500);
        }
        for writer in writers {
            writer.join().unwrap();
        }
        assert!(reader.load().unwrap().len() == 500);
        assert!(std::fs::read_dir(dir.path()).unwrap().count() == 1);
    }

    #[test]
    fn unreadable_location_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let disk = Disk::new(dir.path());
        assert!(matches!(disk.load(), Err(LedgerError::Storage(_))));
    }
}
