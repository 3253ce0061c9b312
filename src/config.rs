//! Process-wide settings for subnet resolution.

use std::time::Duration;

/// How long a discovered subnet list stays valid.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Period of the background sweep that evicts expired cache entries.
pub const CACHE_CLEANUP_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Subnets must carry a tag key `<prefix>/<cluster-name>` to be discovered.
pub const CLUSTER_TAG_KEY_PREFIX: &str = "kubernetes.io/cluster";

/// Upper bound on inventory CLI output, in bytes.
pub const MAX_INVENTORY_OUTPUT: usize = 5_000_000;

const ENV_CACHE_TTL: &str = "SUBNET_CACHE_TTL_SECS";
const ENV_CLEANUP_INTERVAL: &str = "SUBNET_CACHE_CLEANUP_SECS";

/// Cache timings used by a [`crate::SubnetResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    pub cache_ttl: Duration,
    pub cleanup_interval: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            cache_ttl: CACHE_TTL,
            cleanup_interval: CACHE_CLEANUP_INTERVAL,
        }
    }
}

impl ResolverConfig {
    /// Defaults, overridden by `SUBNET_CACHE_TTL_SECS` / `SUBNET_CACHE_CLEANUP_SECS` if set.
    pub fn from_env() -> Self {
        let defaults = ResolverConfig::default();
        ResolverConfig {
            cache_ttl: duration_from_env(ENV_CACHE_TTL, defaults.cache_ttl),
            cleanup_interval: duration_from_env(ENV_CLEANUP_INTERVAL, defaults.cleanup_interval),
        }
    }
}

fn duration_from_env(var: &str, default: Duration) -> Duration {
    match std::env::var(var) {
        Ok(value) => parse_secs(&value).unwrap_or_else(|| {
            log::warn!("Ignoring {var}='{value}', using {}s", default.as_secs());
            default
        }),
        Err(_) => default,
    }
}

/// Parse a positive number of seconds.
fn parse_secs(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}

/// Tag key that marks a subnet as belonging to `cluster`.
pub fn cluster_tag_key(cluster: &str) -> String {
    format!("{CLUSTER_TAG_KEY_PREFIX}/{cluster}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_tag_key() {
        assert_eq!(cluster_tag_key("prod"), "kubernetes.io/cluster/prod");
    }

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.cleanup_interval, Duration::from_secs(600));
    }

    #[test]
    fn test_parse_secs() {
        assert_eq!(parse_secs("30"), Some(Duration::from_secs(30)));
        assert_eq!(parse_secs(" 7 "), Some(Duration::from_secs(7)));
        assert_eq!(parse_secs("0"), None);
        assert_eq!(parse_secs("-1"), None);
        assert_eq!(parse_secs("five"), None);
    }
}
