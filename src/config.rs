use std::env;

pub const DEFAULT_BOOKING_EMBED_URL: &str = "https://calendly.com/nordicsoulhenna";

/// Server settings read from the environment (and `.env`, when present)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: Option<String>,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub booking_embed_url: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            database_url: get("DATABASE_URL"),
            supabase_url: get("SUPABASE_URL"),
            supabase_anon_key: get("SUPABASE_ANON_KEY"),
            booking_embed_url: get("BOOKING_EMBED_URL")
                .unwrap_or_else(|| DEFAULT_BOOKING_EMBED_URL.into()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
        }
    }

    /// `DATABASE_URL`, if it points at SQLite.
    pub fn sqlite_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| url.starts_with("sqlite:"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]);
        assert_eq!(config.database_url, None);
        assert_eq!(config.supabase_url, None);
        assert_eq!(config.booking_embed_url, DEFAULT_BOOKING_EMBED_URL);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config(&[("SUPABASE_URL", "  "), ("LOG_LEVEL", "")]);
        assert_eq!(config.supabase_url, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn only_sqlite_urls_select_the_mirror() {
        assert_eq!(
            config(&[("DATABASE_URL", "sqlite:data.db")]).sqlite_url(),
            Some("sqlite:data.db")
        );
        assert_eq!(
            config(&[("DATABASE_URL", "postgres://localhost/henna")]).sqlite_url(),
            None
        );
    }
}
