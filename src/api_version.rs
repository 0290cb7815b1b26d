use crate::error::Error;
use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt::Display, str::FromStr};

lazy_static! {
    static ref VERSION_TAG_REGEX: Regex =
        Regex::new(r"^v(?P<major>[0-9]+)\.(?P<minor>[0-9]+)$").unwrap();
}

/// The version the SDK pins when a request doesn't name one.
pub const DEFAULT_API_VERSION: ApiVersion = ApiVersion {
    major: 23,
    minor: 0,
};

/// A graph API version tag, rendered as `v{major}.{minor}` in request paths.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ApiVersion {
    major: u16,
    minor: u16,
}

impl ApiVersion {
    pub fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    pub fn major(self) -> u16 {
        self.major
    }

    pub fn minor(self) -> u16 {
        self.minor
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        DEFAULT_API_VERSION
    }
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = VERSION_TAG_REGEX
            .captures(s)
            .ok_or_else(|| Error::InvalidApiVersion(s.into()))?;

        let major = captures["major"]
            .parse()
            .map_err(|_| Error::InvalidApiVersion(s.into()))?;
        let minor = captures["minor"]
            .parse()
            .map_err(|_| Error::InvalidApiVersion(s.into()))?;

        Ok(ApiVersion { major, minor })
    }
}
