use std::{fmt, str::FromStr};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rate;

/// The structural assumptions that govern an outbreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-derive",
    serde(try_from = "String", into = "&'static str")
)]
pub enum Variant {
    /// Bitten susceptibles turn into zombies immediately.
    Basic,
    /// Bitten susceptibles pass through an infected stage first.
    Latent,
    /// Latent model where infected individuals and zombies can be quarantined.
    Quarantine,
    /// Latent model where zombies can be cured back into susceptibles.
    Treatment,
}

/// Error returned when parsing an unrecognized variant tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid variant `{tag}`, expected one of: basic, latent, quarantine, treatment")]
pub struct InvalidVariant {
    pub tag: String,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Self::Basic,
        Self::Latent,
        Self::Quarantine,
        Self::Treatment,
    ];

    /// The rate constants this variant's equations read.
    #[must_use]
    pub fn rates(self) -> &'static [Rate] {
        match self {
            Self::Basic => &[
                Rate::Destruction,
                Rate::Infection,
                Rate::Resurrection,
                Rate::NaturalDeath,
            ],
            Self::Latent => &[
                Rate::Destruction,
                Rate::Infection,
                Rate::Resurrection,
                Rate::NaturalDeath,
                Rate::Latency,
            ],
            Self::Quarantine => &[
                Rate::Destruction,
                Rate::Infection,
                Rate::Resurrection,
                Rate::NaturalDeath,
                Rate::Latency,
                Rate::Quarantine,
            ],
            Self::Treatment => &[
                Rate::Destruction,
                Rate::Infection,
                Rate::Resurrection,
                Rate::NaturalDeath,
                Rate::Latency,
                Rate::Cure,
            ],
        }
    }

    /// Whether the variant's equations read `rate`.
    #[must_use]
    pub fn uses(self, rate: Rate) -> bool {
        self.rates().contains(&rate)
    }

    /// The lowercase tag for this variant.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Latent => "latent",
            Self::Quarantine => "quarantine",
            Self::Treatment => "treatment",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Variant {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| InvalidVariant {
                tag: tag.to_owned(),
            })
    }
}

impl TryFrom<String> for Variant {
    type Error = InvalidVariant;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Variant> for &'static str {
    fn from(variant: Variant) -> Self {
        variant.tag()
    }
}
