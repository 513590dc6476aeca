use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://api.jsonserve.com/Uw5CrX";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the question set lives.
    pub endpoint: String,
    /// Optional CORS-style proxy that wraps the payload in an envelope.
    pub proxy: Option<String>,
    /// Overall time limit in seconds.
    pub limit: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("QUIZ_ENDPOINT").unwrap_or_else(|| String::from(DEFAULT_ENDPOINT));
        let proxy = lookup("QUIZ_PROXY").filter(|proxy| !proxy.is_empty());
        let limit = match lookup("QUIZ_TIME_LIMIT") {
            Some(limit) => limit.parse()?,
            None => session::clock::TIME_LIMIT,
        };
        anyhow::ensure!(limit > 0, "QUIZ_TIME_LIMIT must be positive");
        Ok(Self { endpoint, proxy, limit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<_, _> = vars.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.proxy, None);
        assert_eq!(config.limit, 900);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("QUIZ_ENDPOINT", "https://example.com/quiz.json"),
            ("QUIZ_PROXY", "https://api.allorigins.win/get"),
            ("QUIZ_TIME_LIMIT", "60"),
        ])
        .unwrap();
        assert_eq!(config.endpoint, "https://example.com/quiz.json");
        assert_eq!(config.proxy.as_deref(), Some("https://api.allorigins.win/get"));
        assert_eq!(config.limit, 60);
    }

    #[test]
    fn ignores_empty_proxy() {
        assert_eq!(config(&[("QUIZ_PROXY", "")]).unwrap().proxy, None);
    }

    #[test]
    fn rejects_bad_limits() {
        assert!(config(&[("QUIZ_TIME_LIMIT", "soon")]).is_err());
        assert!(config(&[("QUIZ_TIME_LIMIT", "0")]).is_err());
        assert!(config(&[("QUIZ_TIME_LIMIT", "-5")]).is_err());
    }
}
