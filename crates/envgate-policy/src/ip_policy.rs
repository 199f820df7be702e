use std::fmt;
use std::net::IpAddr;

use ipnet::IpNet;
use serde::{Deserialize, Serialize};

use crate::policy::{format_list, Outcome, Policy};

/// Reserved blocks treated as private (RFC 1918, loopback v6, ULA).
pub const PRIVATE_RANGES: &[&str] = &[
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "::1/128",
    "fc00::/7",
];

/// Address family an IP policy may restrict to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpFamily {
    #[serde(rename = "ipv4", alias = "IPv4", alias = "v4")]
    V4,
    #[serde(rename = "ipv6", alias = "IPv6", alias = "v6")]
    V6,
}

impl IpFamily {
    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFamily::V4 => f.write_str("IPv4"),
            IpFamily::V6 => f.write_str("IPv6"),
        }
    }
}

/// Returns true when `ip` falls in one of [`PRIVATE_RANGES`].
pub fn is_private(ip: &IpAddr) -> bool {
    let ip = ip.to_canonical();
    PRIVATE_RANGES
        .iter()
        .filter_map(|cidr| cidr.parse::<IpNet>().ok())
        .any(|net| net.contains(&ip))
}

/// Accepts a value that parses as an IP address, optionally restricted by
/// family and to private ranges.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are classified as IPv4.
#[derive(Debug, Clone)]
pub struct IpAddressPolicy {
    key: String,
    families: Vec<IpFamily>,
    must_be_private: bool,
}

impl IpAddressPolicy {
    /// An empty `families` list allows both families.
    pub fn new(key: impl Into<String>, families: Vec<IpFamily>, must_be_private: bool) -> Self {
        Self {
            key: key.into(),
            families,
            must_be_private,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn families(&self) -> &[IpFamily] {
        &self.families
    }

    pub fn must_be_private(&self) -> bool {
        self.must_be_private
    }
}

impl Policy for IpAddressPolicy {
    fn name(&self) -> &str {
        "IpAddressPolicy"
    }

    fn check(&self, key: &str, value: &str) -> Outcome {
        if key != self.key {
            return Outcome::NotApplicable;
        }

        let ip = match value.trim().parse::<IpAddr>() {
            Ok(ip) => ip.to_canonical(),
            Err(_) => {
                return Outcome::Rejected(format!(
                    "value for key {key:?} must be a valid IP address"
                ))
            }
        };

        if !self.families.is_empty() && !self.families.contains(&IpFamily::of(&ip)) {
            return Outcome::Rejected(format!(
                "value for key {key:?} must be one of the following IP versions: {}",
                format_list(&self.families)
            ));
        }

        if self.must_be_private && !is_private(&ip) {
            return Outcome::Rejected(format!(
                "value for key {key:?} must be a private IP address"
            ));
        }

        Outcome::Accepted
    }

    fn describe(&self) -> String {
        let families = if self.families.is_empty() {
            "any family".to_string()
        } else {
            format_list(&self.families)
        };
        let scope = if self.must_be_private { ", private" } else { "" };
        format!("{} {} {families}{scope}", self.name(), self.key)
    }
}
