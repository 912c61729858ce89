//! Roles

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A `profiles.role` value that is not one of the known roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRoleError(pub String);

/// Platform role stored on each profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Platform operators.
    Admin,

    /// Hotel-partner accounts booking on behalf of their guests.
    Hotel,

    /// Therapists assigned to bookings.
    Staff,

    /// End customers booking for themselves.
    Customer,
}

impl Role {
    pub const ALL: [Role; 4] = [Self::Admin, Self::Hotel, Self::Staff, Self::Customer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Hotel => "HOTEL",
            Self::Staff => "STAFF",
            Self::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownRoleError(value.to_string()))
    }
}
