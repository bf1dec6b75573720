//! Authentication schemes an integration connection can use

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of authentication modes, serialized as their tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthMode {
    Oauth2,
    Oauth1,
    Oauth1a,
    ApiKey,
    Basic,
    BearerToken,
    GoogleServiceAccount,
    NoAuth,
    BasicWithJwt,
    ComposioLink,
    CalcomAuth,
}

impl AuthMode {
    /// Every mode, in declaration order
    pub const ALL: [AuthMode; 11] = [
        AuthMode::Oauth2,
        AuthMode::Oauth1,
        AuthMode::Oauth1a,
        AuthMode::ApiKey,
        AuthMode::Basic,
        AuthMode::BearerToken,
        AuthMode::GoogleServiceAccount,
        AuthMode::NoAuth,
        AuthMode::BasicWithJwt,
        AuthMode::ComposioLink,
        AuthMode::CalcomAuth,
    ];

    /// Returns the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Oauth2 => "OAUTH2",
            AuthMode::Oauth1 => "OAUTH1",
            AuthMode::Oauth1a => "OAUTH1A",
            AuthMode::ApiKey => "API_KEY",
            AuthMode::Basic => "BASIC",
            AuthMode::BearerToken => "BEARER_TOKEN",
            AuthMode::GoogleServiceAccount => "GOOGLE_SERVICE_ACCOUNT",
            AuthMode::NoAuth => "NO_AUTH",
            AuthMode::BasicWithJwt => "BASIC_WITH_JWT",
            AuthMode::ComposioLink => "COMPOSIO_LINK",
            AuthMode::CalcomAuth => "CALCOM_AUTH",
        }
    }

    /// All wire tags, for use as enum values in a shape
    pub fn tags() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(|mode| mode.as_str())
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("PARAMS_UNKNOWN_AUTH_MODE: '{0}' is not a known auth mode")]
pub struct UnknownAuthMode(pub String);

impl FromStr for AuthMode {
    type Err = UnknownAuthMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownAuthMode(s.to_string()))
    }
}
