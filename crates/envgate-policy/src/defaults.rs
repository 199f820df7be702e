//! The pre-configured policies every registry starts with.

use crate::boolean_policy::BooleanPolicy;
use crate::enum_policy::EnumPolicy;
use crate::ip_policy::{IpAddressPolicy, IpFamily};
use crate::policy::Policy;
use crate::url_policy::UrlPolicy;

pub const API_URL_KEY: &str = "API_URL";
pub const ENVIRONMENT_KEY: &str = "ENVIRONMENT";
pub const ENABLE_DEBUG_KEY: &str = "ENABLE_DEBUG";
pub const TRUSTED_PROXY_IP_KEY: &str = "TRUSTED_PROXY_IP";

/// Deployment stages accepted for `ENVIRONMENT`.
pub const ENVIRONMENTS: &[&str] = &["DEVELOPMENT", "STAGING", "PRODUCTION"];

/// Built-in policies, in registry order.
///
/// A fresh set is returned on each call; nothing is shared between registries.
pub fn default_policies() -> Vec<Box<dyn Policy>> {
    vec![
        Box::new(UrlPolicy::new(API_URL_KEY, ["https"])),
        Box::new(EnumPolicy::new(ENVIRONMENT_KEY, ENVIRONMENTS.iter().copied(), true)),
        Box::new(BooleanPolicy::with_default_literals(ENABLE_DEBUG_KEY)),
        Box::new(IpAddressPolicy::new(
            TRUSTED_PROXY_IP_KEY,
            vec![IpFamily::V4, IpFamily::V6],
            true,
        )),
    ]
}
