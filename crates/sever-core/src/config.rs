//! Connection configuration.

/// Parameters for establishing the Bolt connection.
#[derive(Clone, Debug)]
pub struct ConnectConfig {
    /// Bolt URI, e.g. `bolt://localhost:7687`.
    pub uri: String,
    /// Database username.
    pub user: String,
    /// Database password.
    pub password: String,
}

impl ConnectConfig {
    /// Create a config from explicit parameters.
    pub fn new(
        uri: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Build from `NEO4J_URI`, `NEO4J_USER`, and `NEO4J_PASSWORD`,
    /// falling back to local defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or_else(|_| "bolt://localhost:7687".into()),
            user: std::env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".into()),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or_default(),
        }
    }
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self::new("bolt://localhost:7687", "neo4j", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_bolt() {
        let config = ConnectConfig::default();
        assert_eq!(config.uri, "bolt://localhost:7687");
        assert_eq!(config.user, "neo4j");
        assert!(config.password.is_empty());
    }

    #[test]
    fn test_explicit_construction() {
        let config = ConnectConfig::new("bolt://db:7687", "svc", "hunter2");
        assert_eq!(config.uri, "bolt://db:7687");
        assert_eq!(config.user, "svc");
        assert_eq!(config.password, "hunter2");
    }
}
