//! Exit codes for `envgate`. These are part of the public contract: CI jobs
//! branch on them.

pub const SUCCESS: i32 = 0;
pub const CONTENT_VIOLATION: i32 = 1; // A policy rejected a value
pub const CONFIG_ERROR: i32 = 2; // Unreadable env/config file or invalid config
pub const MISSING_KEYS: i32 = 3; // Required keys absent
