// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use fnboard_app::{DashboardConfig, ROOT_LOCATION, parse_org_claims};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub dashboard: Dashboard,
    #[serde(default)]
    pub functions: Functions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            storage: Storage::default(),
            dashboard: Dashboard::default(),
            functions: Functions::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Storage {
    pub db_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dashboard {
    /// Account whose dashboard opens at startup (`/<user>`).
    pub user: Option<String>,
    pub signed_in: Option<bool>,
    /// Organization ids the user belongs to: a comma-separated string or a
    /// string array. Any other shape counts as no claims.
    pub claims: Option<toml::Value>,
    pub github_app_url: Option<String>,
    pub gitlab_url: Option<String>,
    pub public_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Functions {
    /// JSON file holding the function list.
    pub path: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("FNBOARD_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set FNBOARD_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(fnboard_db::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version; add `version = 1` and put values under [storage], [dashboard], and [functions]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(db_path) = &self.storage.db_path {
            fnboard_db::validate_db_path(db_path)?;
        }

        if let Some(user) = &self.dashboard.user
            && (user.trim().is_empty() || user.contains('/'))
        {
            bail!(
                "dashboard.user in {} must be a single account name, got {:?}",
                path.display(),
                user
            );
        }

        for (field, value) in [
            ("github_app_url", &self.dashboard.github_app_url),
            ("gitlab_url", &self.dashboard.gitlab_url),
            ("public_url", &self.dashboard.public_url),
        ] {
            if let Some(raw) = value {
                Url::parse(raw).with_context(|| {
                    format!(
                        "dashboard.{field} in {} must be an absolute URL, got {raw:?}",
                        path.display()
                    )
                })?;
            }
        }

        if let Some(functions_path) = &self.functions.path
            && functions_path.trim().is_empty()
        {
            bail!(
                "functions.path in {} is empty; remove it or point it at a JSON file",
                path.display()
            );
        }

        Ok(())
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.storage.db_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => fnboard_db::default_db_path(),
        }
    }

    pub fn functions_path(&self) -> Option<PathBuf> {
        self.functions.path.as_deref().map(PathBuf::from)
    }

    /// Location the dashboard opens at.
    pub fn start_location(&self) -> String {
        match self.dashboard.user.as_deref().map(str::trim) {
            Some(user) if !user.is_empty() => format!("/{user}"),
            _ => ROOT_LOCATION.to_owned(),
        }
    }

    pub fn public_url(&self) -> Result<Option<Url>> {
        self.dashboard
            .public_url
            .as_deref()
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid public_url {raw:?}")))
            .transpose()
    }

    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            signed_in: self.dashboard.signed_in.unwrap_or(false),
            known_org_ids: self.org_claims(),
            github_app_url: self.dashboard.github_app_url.clone(),
            gitlab_url: self.dashboard.gitlab_url.clone(),
        }
    }

    fn org_claims(&self) -> Option<Vec<String>> {
        match self.dashboard.claims.as_ref()? {
            toml::Value::String(raw) => parse_org_claims(Some(raw.as_str())),
            toml::Value::Array(items) => {
                let Some(claims) = items
                    .iter()
                    .map(toml::Value::as_str)
                    .collect::<Option<Vec<_>>>()
                else {
                    tracing::warn!("ignoring dashboard.claims with non-string entries");
                    return None;
                };
                parse_org_claims(Some(claims.join(",").as_str()))
            }
            other => {
                tracing::warn!(kind = other.type_str(), "ignoring malformed dashboard.claims");
                None
            }
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# fnboard config\n# Place this file at: {}\n\nversion = 1\n\n[storage]\n# Optional. Default is platform data dir (for example ~/.local/share/fnboard/fnboard.db)\n# db_path = \"/absolute/path/to/fnboard.db\"\n\n[dashboard]\n# Account whose functions are shown at startup.\nuser = \"alexellis\"\nsigned_in = true\n# Organizations whose saved owner filter is kept across dashboards.\nclaims = \"openfaas,alexellis\"\n# github_app_url = \"https://github.com/apps/your-app\"\n# gitlab_url = \"https://gitlab.example.com\"\n# Relative links such as the public key resolve against this URL.\npublic_url = \"https://dashboard.example.com/\"\n\n[functions]\n# JSON array of function records.\n# path = \"/absolute/path/to/functions.json\"\n",
            path.display(),
        )
    }
}
