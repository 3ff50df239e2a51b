//! Account number: the externally visible identifier of an account.

use core::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

/// Range every generated account number is drawn from (8 decimal digits).
pub const ACCOUNT_NUMBER_RANGE: RangeInclusive<u32> = 10_000_000..=99_999_999;

/// Eight-digit account number.
///
/// Numbers coming from callers are not validated: a malformed number is simply
/// never found in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Draw a number uniformly from [`ACCOUNT_NUMBER_RANGE`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(ACCOUNT_NUMBER_RANGE).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this looks like a number the registry could have generated.
    pub fn is_well_formed(&self) -> bool {
        self.0
            .parse::<u32>()
            .is_ok_and(|n| self.0.len() == 8 && ACCOUNT_NUMBER_RANGE.contains(&n))
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
