use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::page::Accent;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_count")]
    pub page_count: usize,
    #[serde(default)]
    pub accent: Accent,
}
fn default_output_dir() -> PathBuf { PathBuf::from(".") }
fn default_count() -> usize { 1 }

impl Config {
    /// Reads `.env` if present, then `OUTPUT_DIR`, `PAGE_COUNT` and `PAGE_ACCENT`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let output_dir = lookup("OUTPUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_output_dir);

        let page_count = match lookup("PAGE_COUNT") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|e| AppError::Config(format!("PAGE_COUNT `{v}`: {e}")))?,
            None => default_count(),
        };
        if page_count == 0 {
            return Err(AppError::Config("PAGE_COUNT must be at least 1".into()));
        }

        let accent = accent_from(&lookup)?;

        Ok(Self { output_dir, page_count, accent })
    }

    /// Only `PAGE_ACCENT`; single-page output ignores the directory and count.
    pub fn load_accent() -> Result<Accent> {
        dotenvy::dotenv().ok();
        accent_from(|key| std::env::var(key).ok())
    }
}

pub fn accent_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Accent> {
    match lookup("PAGE_ACCENT") {
        Some(v) => v.parse(),
        None => Ok(Accent::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = from(&[]).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        assert_eq!(cfg.page_count, 1);
        assert_eq!(cfg.accent, Accent::Orange);
    }

    #[test]
    fn reads_all_values() {
        let cfg = from(&[("OUTPUT_DIR", "/tmp/pages"), ("PAGE_COUNT", " 4 "), ("PAGE_ACCENT", "Pink")]).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/pages"));
        assert_eq!(cfg.page_count, 4);
        assert_eq!(cfg.accent, Accent::Pink);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(from(&[("PAGE_COUNT", "0")]), Err(AppError::Config(_))));
        assert!(matches!(from(&[("PAGE_COUNT", "many")]), Err(AppError::Config(_))));
        assert!(matches!(from(&[("PAGE_ACCENT", "beige")]), Err(AppError::Config(_))));
    }

    #[test]
    fn accent_alone_ignores_count() {
        let vars: HashMap<&str, &str> = [("PAGE_COUNT", "0"), ("PAGE_ACCENT", "green")].into_iter().collect();
        let accent = accent_from(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(accent, Accent::Green);
    }
}
