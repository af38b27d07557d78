//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::types::DeployConfig;

const KNOWN_KEYS: &[&str] = &["Host", "User", "DeployDirectory", "App", "Repo", "Commands"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load `<app>.json` from `dir`, ignoring warnings.
pub fn load(dir: &Path, app: &str) -> ConfigResult<DeployConfig> {
    let path = dir.join(DeployConfig::file_name(app));
    load_with_warnings(&path).map(|(config, _)| config)
}

/// Load a config file and collect non-fatal warnings (e.g. unknown keys).
///
/// Environment overrides are applied before validation.
pub fn load_with_warnings(path: &Path) -> ConfigResult<(DeployConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(&content);

    let config: DeployConfig = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    deserializer.end().map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let config = with_env_overrides(config);
    config.validate().map_err(|message| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (SKIFF_* prefix)
pub fn with_env_overrides(config: DeployConfig) -> DeployConfig {
    apply_overrides(config, |name| std::env::var(name).ok())
}

fn apply_overrides(
    mut config: DeployConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> DeployConfig {
    // SKIFF_USER
    if let Some(user) = lookup("SKIFF_USER").filter(|v| !v.is_empty()) {
        config.user = user;
    }

    // SKIFF_DEPLOY_DIRECTORY
    if let Some(dir) = lookup("SKIFF_DEPLOY_DIRECTORY").filter(|v| !v.is_empty()) {
        config.deploy_directory = dir;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    let quoted = format!("\"{}\"", needle);
    content
        .lines()
        .position(|line| line.contains(&quoted))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    let lowered = unknown.to_lowercase();
    let mut best: Option<(&str, usize)> = None;
    for candidate in KNOWN_KEYS {
        let dist = levenshtein(&lowered, &candidate.to_lowercase());
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
