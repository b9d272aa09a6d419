use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".cuarc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// Directory names never descended into: dependencies, native projects,
/// bundler caches and build output.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "ios",
    "android",
    ".expo",
    ".next",
    ".turbo",
    ".git",
    "dist",
    "build",
    "web-build",
    "coverage",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_router_root")]
    pub router_root: String,
    #[serde(default)]
    pub hoc_names: Vec<String>,
    #[serde(default)]
    pub ignore_test_files: bool,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<String>,
}

fn default_router_root() -> String {
    "app".to_string()
}

fn default_max_file_size() -> u64 {
    2 * 1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            router_root: default_router_root(),
            hoc_names: Vec::new(),
            ignore_test_files: false,
            max_file_size: default_max_file_size(),
            project_root: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid,
    /// or if `routerRoot` is not a plain relative directory.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directories, so a route folder
        // like `app/[id]` stays valid without escaping.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        let router_root = self.router_root.trim_matches('/');
        if router_root.is_empty() || router_root.split('/').any(|s| s == "..") {
            anyhow::bail!(
                "Invalid 'routerRoot': \"{}\" (expected a relative directory such as \"app\")",
                self.router_root
            );
        }

        Ok(())
    }

    /// Router directory without leading/trailing slashes (e.g. `app` or `src/app`).
    pub fn router_dir(&self) -> &str {
        self.router_root.trim_matches('/')
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ignores.is_empty());
        assert!(config.includes.is_empty());
        assert_eq!(config.router_root, "app");
        assert!(!config.ignore_test_files);
        assert!(config.project_root.is_none());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "ignores": ["**/storybook/**"],
              "includes": ["src"],
              "routerRoot": "src/app",
              "hocNames": ["memo", "observer"]
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.ignores, vec!["**/storybook/**"]);
        assert_eq!(config.includes, vec!["src"]);
        assert_eq!(config.router_root, "src/app");
        assert_eq!(config.hoc_names, vec!["memo", "observer"]);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "ignoreTestFiles": true }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert!(config.ignore_test_files);
        assert_eq!(config.router_root, "app");
        assert_eq!(config.max_file_size, default_max_file_size());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["**/legacy/**"] }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.ignores, vec!["**/legacy/**"]);
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert!(result.config.ignores.is_empty());
    }

    #[test]
    fn test_validate_invalid_ignore_pattern() {
        let config = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_literal_route_include_is_valid() {
        let config = Config {
            includes: vec!["app/[id]".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_escaping_router_root() {
        let config = Config {
            router_root: "../app".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            router_root: "/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_router_dir_trims_slashes() {
        let config = Config {
            router_root: "src/app/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.router_dir(), "src/app");
    }

    #[test]
    fn test_load_config_with_invalid_pattern_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["[invalid"] }"#,
        )
        .unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = default_config_json().unwrap();
        assert!(json.contains("routerRoot"));
        assert!(json.contains("maxFileSize"));
        assert!(!json.contains("projectRoot"));
    }
}
