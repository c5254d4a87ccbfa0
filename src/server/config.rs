use crate::server::error::config::ConfigError;

static DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 30;
const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 1;

pub struct Config {
    pub contact_email: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub pokeapi_url: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let minutes = |var: &str, default: i64| match lookup(var) {
            None => Ok(default),
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|parsed| *parsed > 0)
                .ok_or_else(|| ConfigError::InvalidEnvValue {
                    var: var.to_string(),
                    reason: format!("expected a positive integer, got {:?}", value),
                }),
        };

        let contact_email = required("CONTACT_EMAIL")?;
        let user_agent = format!(
            "{}/{} ({})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            contact_email
        );

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            pokeapi_url: lookup("POKEAPI_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_POKEAPI_URL.to_string()),
            access_token_minutes: minutes("ACCESS_TOKEN_MINUTES", DEFAULT_ACCESS_TOKEN_MINUTES)?,
            refresh_token_days: minutes("REFRESH_TOKEN_DAYS", DEFAULT_REFRESH_TOKEN_DAYS)?,
            contact_email,
            user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |var| vars.get(var).cloned()
    }

    fn required_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("CONTACT_EMAIL", "trainer@example.com"),
            ("DATABASE_URL", "postgres://localhost/pokedex"),
            ("JWT_SECRET", "secret"),
        ]
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&required_vars())).unwrap();

        assert_eq!(config.pokeapi_url, DEFAULT_POKEAPI_URL);
        assert_eq!(config.access_token_minutes, 30);
        assert_eq!(config.refresh_token_days, 1);
        assert!(config.user_agent.contains("trainer@example.com"));
    }

    #[test]
    fn reports_missing_variable() {
        let vars = vec![("CONTACT_EMAIL", "trainer@example.com")];

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"
        ));
    }

    #[test]
    fn rejects_unparsable_lifetime() {
        let mut vars = required_vars();
        vars.push(("ACCESS_TOKEN_MINUTES", "half an hour"));

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "ACCESS_TOKEN_MINUTES"
        ));
    }
}
