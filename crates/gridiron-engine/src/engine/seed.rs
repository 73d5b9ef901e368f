use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Random number generator used for simulations.
pub type SimRng = Pcg32;

/// Seed for reproducible simulations.
///
/// A 128-bit seed that initializes the [`SimRng`] driving every draw of a
/// game. The same seed and the same teams replay the same game snap for snap.
/// Serialized as a 32-character hex string.
///
/// # Example
///
/// ```
/// use gridiron_engine::SimSeed;
/// use rand::Rng as _;
///
/// let seed: SimSeed = rand::rng().random();
/// let text = seed.to_string();
/// assert_eq!(text.parse::<SimSeed>().unwrap(), seed);
///
/// let mut a = seed.rng();
/// let mut b = seed.rng();
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimSeed([u8; 16]);

impl SimSeed {
    /// Widens a `u64` into a seed. Handy for tests and command-line use.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self((value as u128).to_be_bytes())
    }

    /// Creates a fresh generator from this seed.
    #[must_use]
    pub fn rng(self) -> SimRng {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for SimSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

/// Error parsing a [`SimSeed`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: expected up to 32 hex digits")]
pub struct ParseSeedError {
    input: String,
}

impl FromStr for SimSeed {
    type Err = ParseSeedError;

    /// Parses up to 32 hex digits. Shorter strings are zero-extended on the left.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSeedError {
            input: s.to_owned(),
        };
        if s.is_empty() || s.len() > 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SimSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SimSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        if hex_str.len() != 32 {
            return Err(serde::de::Error::custom(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            )));
        }
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Lets `rng.random()` produce seeds, e.g. one per game in a batch.
impl Distribution<SimSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SimSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SimSeed(seed)
    }
}
