use std::env;

use crate::constants::{DEFAULT_SLED_PATH, DEFAULT_WORD_FILE};

#[derive(Debug, Clone)]
pub struct Config {
    pub word_file: String,
    pub sled_path: String,
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            word_file: env_or("WORD_FILE", DEFAULT_WORD_FILE),
            sled_path: env_or("SLED_PATH", DEFAULT_SLED_PATH),
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use super::*;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn managed_keys() -> &'static [&'static str] {
        &["WORD_FILE", "SLED_PATH", "RUST_LOG", "ENABLE_FILE_LOGS"]
    }

    fn clear_keys(keys: &[&str]) {
        for key in keys {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_defaults_when_missing() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        let cfg = Config::from_env();
        assert_eq!(cfg.word_file, DEFAULT_WORD_FILE);
        assert_eq!(cfg.sled_path, DEFAULT_SLED_PATH);
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.enable_file_logs);
    }

    #[test]
    fn env_values_override_defaults() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("WORD_FILE", "/tmp/my-words.json");
        env::set_var("ENABLE_FILE_LOGS", "true");

        let cfg = Config::from_env();
        assert_eq!(cfg.word_file, "/tmp/my-words.json");
        assert!(cfg.enable_file_logs);
    }

    #[test]
    fn unrecognized_bool_falls_back() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("ENABLE_FILE_LOGS", "maybe");
        let cfg = Config::from_env();
        assert!(!cfg.enable_file_logs);
    }
}
