// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use fnboard_app::FunctionRecord;
use fnboard_tui::InternalEvent;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionSource {
    Demo,
    File(PathBuf),
    Unset,
}

impl FunctionSource {
    pub fn load(&self) -> Result<Vec<FunctionRecord>> {
        match self {
            Self::Demo => Ok(fnboard_testkit::demo_functions()),
            Self::File(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("read function list {}", path.display()))?;
                serde_json::from_str(&raw).with_context(|| {
                    format!(
                        "decode function list {}; expected a JSON array of function records",
                        path.display()
                    )
                })
            }
            Self::Unset => bail!(
                "no function source; set [functions].path, pass --functions <path>, or use --demo"
            ),
        }
    }
}

pub struct CliRuntime {
    source: FunctionSource,
    public_url: Option<Url>,
}

impl CliRuntime {
    pub fn new(source: FunctionSource, public_url: Option<Url>) -> Self {
        Self { source, public_url }
    }
}

impl fnboard_tui::AppRuntime for CliRuntime {
    fn load_functions(&mut self) -> Result<Vec<FunctionRecord>> {
        self.source.load()
    }

    fn spawn_function_load(&mut self, request_id: u64, tx: Sender<InternalEvent>) -> Result<()> {
        let source = self.source.clone();
        thread::Builder::new()
            .name("fnboard-load".to_owned())
            .spawn(move || {
                let result = source.load().map_err(|error| format!("{error:#}"));
                let _ = tx.send(InternalEvent::FunctionsLoaded { request_id, result });
            })
            .context("spawn function loader")?;
        Ok(())
    }

    fn open_external(&mut self, href: &str) -> Result<()> {
        let target = resolve_href(self.public_url.as_ref(), href)?;
        tracing::info!(%target, "opening external link");
        open::that(target.as_str()).with_context(|| format!("open {target}"))
    }
}

/// Absolute hrefs pass through; relative ones join onto `public_url`.
pub fn resolve_href(public_url: Option<&Url>, href: &str) -> Result<Url> {
    match Url::parse(href) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = public_url.ok_or_else(|| {
                anyhow!("{href} is relative; set [dashboard].public_url to open it")
            })?;
            base.join(href)
                .with_context(|| format!("resolve {href} against {base}"))
        }
        Err(error) => Err(error).with_context(|| format!("invalid link {href:?}")),
    }
}
