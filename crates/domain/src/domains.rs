//! The fixed allow-list of entity domains the system automates over.

use std::collections::BTreeSet;

use crate::error::ConfigurationError;

/// Domains considered when none are configured.
pub const DEFAULT_RELEVANT_DOMAINS: &[&str] = &[
    "binary_sensor",
    "climate",
    "cover",
    "fan",
    "light",
    "media_player",
    "sensor",
    "switch",
];

/// Non-empty set of entity domains relevant for automation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevantDomains(BTreeSet<String>);

impl RelevantDomains {
    /// Build a domain set from the host configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyRelevantDomains`] when `domains`
    /// yields nothing.
    pub fn new<I, S>(domains: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = domains.into_iter().map(Into::into).collect();
        if set.is_empty() {
            return Err(ConfigurationError::EmptyRelevantDomains);
        }
        Ok(Self(set))
    }

    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        self.0.contains(domain)
    }

    /// Iterate over the domains in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for RelevantDomains {
    fn default() -> Self {
        Self(
            DEFAULT_RELEVANT_DOMAINS
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }
}
