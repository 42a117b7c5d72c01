use crate::*;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Snapshot of every registered user's point balance.
///
/// Keys are ordered by user id, which makes iteration order, persisted
/// layout and leaderboard tie-breaks independent of insertion history.
/// Rosters and saved files therefore list users alphabetically, not in
/// the order they registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger(BTreeMap<String, Points>);

impl Ledger {
    pub fn get(&self, user: &str) -> Option<Points> {
        self.0.get(user).copied()
    }
    pub fn contains(&self, user: &str) -> bool {
        self.0.contains_key(user)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, Points)> {
        self.0.iter().map(|(user, points)| (user.as_str(), *points))
    }

    /// Inserts `user` at zero. False if already present.
    pub fn register(&mut self, user: &str) -> bool {
        match self.contains(user) {
            true => false,
            false => self.0.insert(user.to_string(), 0).is_none(),
        }
    }
    /// Adds `delta` to an existing balance and returns the new one.
    /// Absent users are left alone. Overflow is rejected.
    pub fn update(&mut self, user: &str, delta: Points) -> Result<Option<Points>> {
        match self.0.get_mut(user) {
            None => Ok(None),
            Some(points) => match points.checked_add(delta) {
                None => Err(LedgerError::Invalid(format!(
                    "adding {} to {} for '{}' overflows",
                    delta, points, user
                ))),
                Some(sum) => {
                    *points = sum;
                    Ok(Some(sum))
                }
            },
        }
    }
    /// Overwrites an existing balance. Absent users are left alone.
    pub fn set(&mut self, user: &str, value: Points) -> Option<Points> {
        self.0.get_mut(user).map(|points| {
            *points = value;
            value
        })
    }

    /// Pretty-printed JSON document, the same bytes the file store writes.
    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn check(user: &str) -> Result<(), String> {
        match user.is_empty() {
            true => Err("user id must not be empty".to_string()),
            false => Ok(()),
        }
    }
    fn describe(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a fractional or out-of-range number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}

impl FromIterator<(String, Points)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (String, Points)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Accepts only a flat object whose keys are non-empty user ids and
/// whose values are integers representable as [`Points`].
impl TryFrom<Value> for Ledger {
    type Error = String;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(format!(
                    "expected an object of user ids to integer points, found {}",
                    Self::describe(&other)
                ));
            }
        };
        let mut ledger = Self::default();
        for (user, points) in map {
            Self::check(&user)?;
            match points.as_i64() {
                Some(points) => ledger.0.insert(user, points),
                None => {
                    return Err(format!(
                        "points for '{}' must be an integer, found {}",
                        user,
                        Self::describe(&points)
                    ));
                }
            };
        }
        Ok(ledger)
    }
}

impl TryFrom<&str> for Ledger {
    type Error = String;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        serde_json::from_str::<Value>(text)
            .map_err(|e| format!("not a JSON document: {}", e))
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (user, points) in self.iter() {
            writeln!(f, "{:<24}{:>8}", user, points)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(pairs: &[(&str, Points)]) -> Ledger {
        pairs.iter().map(|(u, p)| (u.to_string(), *p)).collect()
    }

    #[test]
    fn register_rejects_duplicates() {
        let ref mut book = Ledger::default();
        assert!(book.register("alice"));
        assert!(!book.register("alice"));
        assert!(book.len() == 1);
        assert!(book.get("alice") == Some(0));
    }

    #[test]
    fn update_and_set_ignore_absent_users() {
        let ref mut book = ledger(&[("a", 5)]);
        assert!(book.update("a", -3).unwrap() == Some(2));
        assert!(book.set("a", 10) == Some(10));
        assert!(book.update("b", 5).unwrap() == None);
        assert!(book.set("b", 5) == None);
        assert!(*book == ledger(&[("a", 10)]));
    }

    #[test]
    fn update_rejects_overflow() {
        let ref mut book = ledger(&[("a", Points::MAX)]);
        assert!(matches!(book.update("a", 1), Err(LedgerError::Invalid(_))));
        assert!(book.get("a") == Some(Points::MAX));
    }

    #[test]
    fn parses_flat_integer_objects() {
        let parsed = Ledger::try_from(r#"{"a": 3, "b": -7}"#).unwrap();
        assert!(parsed == ledger(&[("a", 3), ("b", -7)]));
        assert!(Ledger::try_from("{}").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_flat_documents() {
        assert!(Ledger::try_from("[1,2,3]").is_err());
        assert!(Ledger::try_from(r#"{"a": {"b": 1}}"#).is_err());
        assert!(Ledger::try_from(r#"{"a": 1.5}"#).is_err());
        assert!(Ledger::try_from(r#"{"a": "1"}"#).is_err());
        assert!(Ledger::try_from(r#"{"a": true}"#).is_err());
        assert!(Ledger::try_from(r#"{"a": null}"#).is_err());
        assert!(Ledger::try_from(r#"{"a": 18446744073709551615}"#).is_err());
        assert!(Ledger::try_from(r#"{"": 1}"#).is_err());
        assert!(Ledger::try_from("not json").is_err());
    }

    #[test]
    fn rejection_messages_name_the_offender() {
        let err = Ledger::try_from(r#"{"bob": "ten"}"#).unwrap_err();
        assert!(err.contains("bob"));
        assert!(err.contains("a string"));
        let err = Ledger::try_from("[1,2,3]").unwrap_err();
        assert!(err.contains("an array"));
    }

    #[test]
    fn json_is_pretty_and_reparses() {
        let book = ledger(&[("b", 2), ("a", 1)]);
        let text = book.json().unwrap();
        assert!(text == "{\n  \"a\": 1,\n  \"b\": 2\n}");
        assert!(Ledger::try_from(text.as_str()).unwrap() == book);
    }

    #[test]
    fn json_keeps_non_ascii_ids_readable() {
        let book = ledger(&[("たろう", 4)]);
        assert!(book.json().unwrap().contains("たろう"));
    }
}
