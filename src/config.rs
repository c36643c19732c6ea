use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `HOST` and `PORT`, falling back to `default_port` when `PORT` is unset.
    pub fn from_env(default_port: u16) -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match std::env::var("PORT") {
                Ok(raw) => raw.parse().context("PORT must be a valid number")?,
                Err(_) => default_port,
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process environment is global; tests touching it take this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
            .collect();
        for (key, value) in vars {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        let result = f();
        for (key, value) in saved {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
        result
    }

    #[test]
    fn addr_joins_host_and_port() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(config.addr(), "0.0.0.0:9000");
    }

    #[test]
    fn from_env_falls_back_to_service_default_port() {
        let config = with_env(&[("HOST", None), ("PORT", None)], || Config::from_env(8001))
            .expect("defaults must load");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8001);
    }

    #[test]
    fn from_env_reads_host_and_port() {
        let config = with_env(&[("HOST", Some("0.0.0.0")), ("PORT", Some("9100"))], || {
            Config::from_env(8000)
        })
        .expect("explicit values must load");
        assert_eq!(config.addr(), "0.0.0.0:9100");
    }

    #[test]
    fn from_env_rejects_non_numeric_port() {
        let result = with_env(&[("PORT", Some("ochenta"))], || Config::from_env(8000));
        let err = result.expect_err("invalid PORT must fail startup");
        assert!(err.to_string().contains("PORT"), "got {}", err);
    }
}
