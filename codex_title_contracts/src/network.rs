use std::{fmt, str::FromStr};

use crate::errors::MigrationError;

/// Deployment targets that have a token URI prefix defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Ganache,
}

impl Network {
    pub const ALL: &'static [Network] = &[Network::Ganache];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Ganache => "ganache",
        }
    }

    /// Base string the contract prepends to token ids when building token URIs.
    pub fn token_uri_prefix(&self) -> &'static str {
        match self {
            Network::Ganache => "http://localhost:3001/token",
        }
    }
}

impl FromStr for Network {
    type Err = MigrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .iter()
            .find(|network| network.name() == s)
            .copied()
            .ok_or_else(|| {
                MigrationError::Configuration(format!(
                    "No tokenURIPrefix defined for network {s:?}"
                ))
            })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
