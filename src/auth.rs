use sha2::Digest;

/// Digest of the fallback admin password. Anyone who has read this
/// source knows it, so deployments are expected to override it.
pub const DEFAULT_DIGEST: &str = "4fd748d62c87124c149be335c43c39a3eeda80f0d865b3bcb70f26f36d2fe7fd";

/// Lowercase hex SHA-256 of `secret`.
pub fn digest(secret: &str) -> String {
    hex::encode(sha2::Sha256::digest(secret.as_bytes()))
}

/// True when `secret` hashes to `stored`. An empty `stored` never matches.
pub fn verify(secret: &str, stored: &str) -> bool {
    !stored.is_empty() && digest(secret) == stored
}

/// Admin password check, re-evaluated on every privileged action.
#[derive(Debug, Clone)]
pub struct Gate {
    digest: String,
}

impl Gate {
    pub fn new(digest: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
        }
    }
    pub fn admits(&self, secret: &str) -> bool {
        match verify(secret, &self.digest) {
            true => true,
            false => {
                log::warn!("admin password rejected");
                false
            }
        }
    }
    pub fn is_default(&self) -> bool {
        self.digest == DEFAULT_DIGEST
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(DEFAULT_DIGEST)
    }
}
