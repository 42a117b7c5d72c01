use super::*;
use crate::*;
use std::sync::Mutex;

/// The ledger API callers talk to.
///
/// Wraps a [`Store`] and runs every mutation as one locked
/// load-modify-save cycle, so callers sharing a `Book` cannot lose
/// each other's updates. Reads go straight to the store.
#[derive(Debug)]
pub struct Book<S> {
    store: S,
    lock: Mutex<()>,
}

impl<S> From<S> for Book<S>
where
    S: Store,
{
    fn from(store: S) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }
}

impl<S> Book<S>
where
    S: Store,
{
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&self) -> Result<Ledger> {
        self.store.load()
    }
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        let _guard = self.lock.lock().expect("poison");
        self.store.save(ledger)
    }

    /// Adds `user` at zero points. `false` if they already exist,
    /// in which case nothing is written.
    pub fn register(&self, user: &str) -> Result<bool> {
        if user.is_empty() {
            return Err(LedgerError::Invalid("user id must not be empty".into()));
        }
        let added = self
            .transact(|ledger| Ok(ledger.register(user).then_some(())))?
            .is_some();
        match added {
            true => log::info!("registered {}", user),
            false => log::debug!("{} is already registered", user),
        }
        Ok(added)
    }
    pub fn get(&self, user: &str) -> Result<Option<Points>> {
        self.load().map(|ledger| ledger.get(user))
    }
    /// Applies `delta` and returns the new balance.
    /// `None` means the user is not registered and nothing changed.
    pub fn update(&self, user: &str, delta: Points) -> Result<Option<Points>> {
        let balance = self.transact(|ledger| ledger.update(user, delta))?;
        match balance {
            Some(points) => log::info!("{} {:+} -> {}", user, delta, points),
            None => log::debug!("update skipped, {} is not registered", user),
        }
        Ok(balance)
    }
    /// Overwrites the balance. `None` means the user is not registered
    /// and nothing changed.
    pub fn set(&self, user: &str, value: Points) -> Result<Option<Points>> {
        let balance = self.transact(|ledger| Ok(ledger.set(user, value)))?;
        match balance {
            Some(points) => log::info!("{} = {}", user, points),
            None => log::debug!("set skipped, {} is not registered", user),
        }
        Ok(balance)
    }

    /// Replaces the whole ledger, bypassing per-user checks.
    pub fn replace(&self, ledger: Ledger) -> Result<()> {
        if ledger.iter().any(|(user, _)| user.is_empty()) {
            return Err(LedgerError::Invalid("user id must not be empty".into()));
        }
        self.save(&ledger)?;
        log::info!("ledger replaced with {} users", ledger.len());
        Ok(())
    }
    /// Validates an uploaded document and replaces the ledger with it.
    /// A rejected document leaves the current ledger untouched.
    pub fn import(&self, document: &str) -> Result<Ledger> {
        let ledger = Ledger::try_from(document).map_err(|e| {
            log::warn!("rejected import: {}", e);
            LedgerError::Invalid(e)
        })?;
        self.replace(ledger.clone())?;
        Ok(ledger)
    }
    /// The current ledger as a downloadable JSON document.
    pub fn export(&self) -> Result<String> {
        Ok(self.load()?.json().map_err(std::io::Error::from)?)
    }

    /// Every user with their balance, in ledger order.
    pub fn roster(&self) -> Result<Vec<(String, Points)>> {
        Ok(self
            .load()?
            .iter()
            .map(|(user, points)| (user.to_string(), points))
            .collect())
    }
    pub fn leaderboard(&self) -> Result<Leaderboard> {
        self.load().map(|ledger| Leaderboard::from(&ledger))
    }
    /// When the ledger was last written, in Tokyo time.
    pub fn stamp(&self) -> Result<Stamp> {
        self.store.modified().map(Stamp::from)
    }

    fn transact<T>(
        &self,
        apply: impl FnOnce(&mut Ledger) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        let _guard = self.lock.lock().expect("poison");
        let ref mut ledger = self.store.load()?;
        match apply(ledger)? {
            None => Ok(None),
            Some(out) => self.store.save(ledger).map(|_| Some(out)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(pairs: &[(&str, Points)]) -> Ledger {
        pairs.iter().map(|(u, p)| (u.to_string(), *p)).collect()
    }
    fn book(pairs: &[(&str, Points)]) -> Book<Memory> {
        Book::from(Memory::from(ledger(pairs)))
    }

    #[test]
    fn double_registration_is_rejected() {
        let book = Book::from(Memory::default());
        assert!(book.register("u").unwrap());
        assert!(!book.register("u").unwrap());
        assert!(book.load().unwrap() == ledger(&[("u", 0)]));
    }

    #[test]
    fn empty_user_ids_are_invalid() {
        let book = Book::from(Memory::default());
        assert!(matches!(book.register(""), Err(LedgerError::Invalid(_))));
        assert!(book.stamp().unwrap().is_never());
    }

    #[test]
    fn rejected_registration_does_not_write() {
        let book = book(&[("u", 7)]);
        let before = book.store().modified().unwrap();
        assert!(!book.register("u").unwrap());
        assert!(book.store().modified().unwrap() == before);
        assert!(book.get("u").unwrap() == Some(7));
    }

    #[test]
    fn update_then_set() {
        let book = book(&[("a", 5)]);
        assert!(book.update("a", -3).unwrap() == Some(2));
        assert!(book.get("a").unwrap() == Some(2));
        assert!(book.set("a", 10).unwrap() == Some(10));
        assert!(book.get("a").unwrap() == Some(10));
    }

    #[test]
    fn mutations_on_absent_users_are_no_ops() {
        let book = book(&[("a", 5)]);
        assert!(book.update("b", 5).unwrap() == None);
        assert!(book.set("b", 5).unwrap() == None);
        assert!(book.get("b").unwrap() == None);
        assert!(book.load().unwrap() == ledger(&[("a", 5)]));
    }

    #[test]
    fn absent_is_not_zero() {
        let book = book(&[("zero", 0)]);
        assert!(book.get("zero").unwrap() == Some(0));
        assert!(book.get("nobody").unwrap() == None);
    }

    #[test]
    fn import_rejects_arrays_and_keeps_ledger() {
        let book = book(&[("a", 5)]);
        assert!(matches!(book.import("[1,2,3]"), Err(LedgerError::Invalid(_))));
        assert!(matches!(book.import(r#"{"a": {"b": 1}}"#), Err(LedgerError::Invalid(_))));
        assert!(book.load().unwrap() == ledger(&[("a", 5)]));
    }

    #[test]
    fn import_replaces_everything() {
        let book = book(&[("a", 5), ("b", 1)]);
        let imported = book.import(r#"{"c": -2, "d": 9}"#).unwrap();
        assert!(imported.len() == 2);
        assert!(book.load().unwrap() == ledger(&[("c", -2), ("d", 9)]));
    }

    #[test]
    fn export_reimports_to_the_same_ledger() {
        let book = book(&[("a", 5), ("b", -1)]);
        let text = book.export().unwrap();
        let other = Book::from(Memory::default());
        other.import(&text).unwrap();
        assert!(other.load().unwrap() == book.load().unwrap());
    }

    #[test]
    fn roster_lists_every_user() {
        let book = book(&[("b", 2), ("a", 1)]);
        let roster = book.roster().unwrap();
        assert!(roster == vec![("a".to_string(), 1), ("b".to_string(), 2)]);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let book = std::sync::Arc::new(book(&[("a", 0)]));
        let handles = (0..8)
            .map(|_| {
                let book = book.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        book.update("a", 1).unwrap();
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(book.get("a").unwrap() == Some(400));
    }
}
