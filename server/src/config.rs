//! Server configuration parsed from environment variables.
//!
//! Every setting has a default, so an empty environment yields a working
//! server. Unparseable values fall back to the default rather than failing
//! start-up.

use planner::solver::DEFAULT_NODE_BUDGET;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Search nodes the block scheduler may visit per request.
    pub node_budget: u64,
    /// Upper bound on a submitted form body.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, node_budget: DEFAULT_NODE_BUDGET, max_body_bytes: DEFAULT_MAX_BODY_BYTES }
    }
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PLANNER_NODE_BUDGET`: default 200000
    /// - `PLANNER_MAX_BODY_BYTES`: default 65536
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: env_parse(&lookup, "PORT", DEFAULT_PORT),
            node_budget: env_parse(&lookup, "PLANNER_NODE_BUDGET", DEFAULT_NODE_BUDGET),
            max_body_bytes: env_parse(&lookup, "PLANNER_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }
}

fn env_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
