use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    /// How many whole months before today the default dashboard range starts.
    pub default_range_months: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://finance.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            default_range_months: env::var("DEFAULT_RANGE_MONTHS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, port: Option<u16>, database_url: Option<String>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(database_url) = database_url {
            self.database_url = database_url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            database_url: "sqlite://finance.db?mode=rwc".to_string(),
            port: 3000,
            max_connections: 5,
            default_range_months: 3,
        }
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = base().with_overrides(Some(8080), None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite://finance.db?mode=rwc");

        let config = base().with_overrides(None, Some("sqlite::memory:".to_string()));
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "sqlite::memory:");
    }
}
