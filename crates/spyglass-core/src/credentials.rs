use rand::Rng;

use crate::error::Error;

/// Pool of interchangeable API keys parsed from a comma-separated secret.
///
/// The pool is rebuilt from configuration on every call; nothing is cached
/// across requests, so rotating the secret takes effect immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPool {
    keys: Vec<String>,
}

impl CredentialPool {
    /// Parse a comma-separated secret into a pool of usable keys.
    ///
    /// Segments are trimmed and empty ones dropped.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if no usable key remains.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let keys: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();

        if keys.is_empty() {
            return Err(Error::Config(
                "TAVILY_API_KEY contains no usable keys".to_string(),
            ));
        }

        Ok(Self { keys })
    }

    /// Draw one key uniformly at random.
    ///
    /// The random source is caller-supplied so selection is deterministic
    /// under test; the selector itself keeps no state between draws.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.keys[rng.gen_range(0..self.keys.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}
