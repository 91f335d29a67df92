//! Allowed host patterns.

use serde::{Serialize, Serializer};

use super::constants::ANY_HOST;

/// A single entry of the host allowlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    /// `*`: every host
    Any,
    /// `.example.com`: the domain and all of its subdomains
    Domain(String),
    /// Exact host name
    Exact(String),
}

impl HostPattern {
    pub fn parse(pattern: &str) -> Self {
        let pattern = normalize(pattern);
        if pattern == ANY_HOST {
            HostPattern::Any
        } else if let Some(domain) = pattern.strip_prefix('.') {
            HostPattern::Domain(domain.to_string())
        } else {
            HostPattern::Exact(pattern)
        }
    }

    /// Check whether a request host (optionally with `:port`) matches.
    pub fn matches(&self, host: &str) -> bool {
        let host = normalize(strip_port(host));
        match self {
            HostPattern::Any => true,
            HostPattern::Domain(domain) => {
                host == *domain
                    || host
                        .strip_suffix(domain.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }
            HostPattern::Exact(exact) => host == *exact,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, HostPattern::Any)
    }
}

impl std::fmt::Display for HostPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostPattern::Any => f.write_str(ANY_HOST),
            HostPattern::Domain(domain) => write!(f, ".{}", domain),
            HostPattern::Exact(exact) => f.write_str(exact),
        }
    }
}

impl Serialize for HostPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a comma-separated allowlist, skipping blank entries.
pub fn parse_host_list(raw: &str) -> Vec<HostPattern> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(HostPattern::parse)
        .collect()
}

fn normalize(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literal, with or without a port
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}
