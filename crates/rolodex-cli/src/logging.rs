// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "ROLODEX_LOG";

/// Installs the global subscriber. The terminal belongs to the TUI, so
/// events go to `path` instead of stderr.
pub fn init(level: &str, path: &Path) -> Result<()> {
    let override_directive = env::var(LOG_ENV).ok();
    let filter = build_filter(level, override_directive.as_deref())?;
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("install log subscriber")?;
    Ok(())
}

fn build_filter(level: &str, override_directive: Option<&str>) -> Result<EnvFilter> {
    match override_directive.map(str::trim) {
        Some(directive) if !directive.is_empty() => EnvFilter::try_new(directive)
            .with_context(|| format!("parse {LOG_ENV}={directive:?}")),
        _ => EnvFilter::try_new(level).with_context(|| format!("parse log level {level:?}")),
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| {
            format!(
                "open log file {} -- set [log].file to a writable path",
                path.display()
            )
        })
}
