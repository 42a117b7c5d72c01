use chrono::DateTime;
use chrono::FixedOffset;
use chrono::Utc;
use std::time::SystemTime;

/// Japan Standard Time, UTC+9 with no daylight saving.
const TOKYO_OFFSET_SECS: i32 = 9 * 3600;
/// Rendered when the ledger has never been written.
pub const NEVER: &str = "-";

fn tokyo() -> FixedOffset {
    FixedOffset::east_opt(TOKYO_OFFSET_SECS).expect("utc+9 is in range")
}

/// Last-modified marker of the persisted ledger, shown in Tokyo time
/// as `YYYY-MM-DD HH:MM:SS`, or `-` if nothing was ever saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp(Option<DateTime<FixedOffset>>);

impl Stamp {
    pub fn is_never(&self) -> bool {
        self.0.is_none()
    }
}

impl From<SystemTime> for Stamp {
    fn from(time: SystemTime) -> Self {
        Self(Some(DateTime::<Utc>::from(time).with_timezone(&tokyo())))
    }
}

impl From<Option<SystemTime>> for Stamp {
    fn from(time: Option<SystemTime>) -> Self {
        time.map(Self::from).unwrap_or(Self(None))
    }
}

impl std::fmt::Display for Stamp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            Some(time) => write!(f, "{}", time.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "{}", NEVER),
        }
    }
}

impl serde::Serialize for Stamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
