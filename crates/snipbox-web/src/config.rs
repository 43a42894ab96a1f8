//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1:4000").
    pub bind_addr: String,

    /// SQLite connection URL for the snippet store.
    pub database_url: String,

    /// Directory holding templates (`html/`) and static assets
    /// (`static/`).
    pub ui_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional (all have defaults for local development):
    /// - `SNIPBOX_BIND_ADDR`: Server bind address (default: "127.0.0.1:4000")
    /// - `DATABASE_URL`: SQLite URL (default: "sqlite://snipbox.db?mode=rwc")
    /// - `SNIPBOX_UI_DIR`: UI directory (default: "./ui")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SNIPBOX_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:4000".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://snipbox.db?mode=rwc".to_string());

        let ui_dir = PathBuf::from(
            std::env::var("SNIPBOX_UI_DIR").unwrap_or_else(|_| "./ui".to_string()),
        );

        tracing::info!(
            bind_addr = %bind_addr,
            database_url = %database_url,
            ui_dir = %ui_dir.display(),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            ui_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &["SNIPBOX_BIND_ADDR", "DATABASE_URL", "SNIPBOX_UI_DIR"];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "127.0.0.1:4000");
            assert_eq!(config.database_url, "sqlite://snipbox.db?mode=rwc");
            assert_eq!(config.ui_dir, PathBuf::from("./ui"));
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("SNIPBOX_BIND_ADDR", "0.0.0.0:8080"),
                ("DATABASE_URL", "sqlite:///var/lib/snipbox/snipbox.db"),
                ("SNIPBOX_UI_DIR", "/srv/snipbox/ui"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "0.0.0.0:8080");
                assert_eq!(config.database_url, "sqlite:///var/lib/snipbox/snipbox.db");
                assert_eq!(config.ui_dir, PathBuf::from("/srv/snipbox/ui"));
            },
        );
    }
}
