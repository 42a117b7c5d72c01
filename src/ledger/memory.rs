use super::*;
use crate::*;
use std::sync::Mutex;
use std::time::SystemTime;

/// A [`Store`] that keeps the snapshot in process memory.
/// Useful wherever the file system is beside the point.
#[derive(Debug, Default)]
pub struct Memory {
    inner: Mutex<Option<(Ledger, SystemTime)>>,
}

impl From<Ledger> for Memory {
    fn from(ledger: Ledger) -> Self {
        Self {
            inner: Mutex::new(Some((ledger, SystemTime::now()))),
        }
    }
}

impl Store for Memory {
    fn load(&self) -> Result<Ledger> {
        Ok(self
            .inner
            .lock()
            .expect("poison")
            .as_ref()
            .map(|(ledger, _)| ledger.clone())
            .unwrap_or_default())
    }
    fn save(&self, ledger: &Ledger) -> Result<()> {
        *self.inner.lock().expect("poison") = Some((ledger.clone(), SystemTime::now()));
        Ok(())
    }
    fn modified(&self) -> Result<Option<SystemTime>> {
        Ok(self.inner.lock().expect("poison").as_ref().map(|(_, t)| *t))
    }
}
