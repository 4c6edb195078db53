// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FNBOARD_LOG";
const LOG_FILE_NAME: &str = "fnboard.log";

/// Installs a file logger when `FNBOARD_LOG` holds filter directives.
///
/// The terminal belongs to the dashboard, so events go to `fnboard.log`
/// beside the database instead of stderr.
pub fn init(db_path: &Path) -> Result<Option<PathBuf>> {
    let Some(directives) = env::var_os(LOG_ENV) else {
        return Ok(None);
    };
    let directives = directives.to_string_lossy();
    let filter = EnvFilter::try_new(directives.as_ref())
        .with_context(|| format!("invalid {LOG_ENV} directives {directives:?}"))?;

    let path = log_path(db_path);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))?;

    Ok(Some(path))
}

fn log_path(db_path: &Path) -> PathBuf {
    if db_path == Path::new(":memory:") {
        return env::temp_dir().join(LOG_FILE_NAME);
    }
    db_path.with_file_name(LOG_FILE_NAME)
}
