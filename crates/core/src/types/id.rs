//! Newtype id for type-safe product references.
//!
//! Product ids are opaque string tokens generated client-side before the
//! create request is submitted, so the server never has to hand one back.

use core::fmt;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Base-36 digits used for both the random and timestamp halves of a token.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters preceding the timestamp half.
const RANDOM_LEN: usize = 8;

/// A unique product identifier.
///
/// Generated client-side as a random base-36 prefix followed by the current
/// unix timestamp in milliseconds, base-36 encoded. The random prefix makes
/// collisions between clients creating products in the same millisecond
/// vanishingly unlikely.
///
/// ## Examples
///
/// ```
/// use clementine_core::ProductId;
///
/// let a = ProductId::generate();
/// let b = ProductId::generate();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from an existing token (e.g. one received from the
    /// server).
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Generate a fresh random+timestamp token.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let random: String = (0..RANDOM_LEN)
            .map(|_| char::from(sample_digit(&mut rng)))
            .collect();
        let timestamp = encode_base36(u128::from(Utc::now().timestamp_millis().unsigned_abs()));
        Self(format!("{random}{timestamp}"))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for ProductId {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Sample one base-36 digit.
fn sample_digit<R: Rng>(rng: &mut R) -> u8 {
    let idx = rng.random_range(0..ALPHABET.len());
    ALPHABET.get(idx).copied().unwrap_or(b'0')
}

/// Encode a value as lowercase base-36.
fn encode_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let digit = usize::try_from(value % 36).unwrap_or(0);
        digits.push(ALPHABET.get(digit).copied().unwrap_or(b'0'));
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
