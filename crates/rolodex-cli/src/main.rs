// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use rolodex_app::AppState;
use rolodex_tui::UiOptions;
use runtime::{DemoRuntime, HttpRuntime};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    match options.action {
        CliAction::Help => {
            print_help();
            return Ok(());
        }
        CliAction::PrintConfigPath => {
            println!("{}", options.config_path.display());
            return Ok(());
        }
        CliAction::PrintExampleConfig => {
            print!("{}", Config::example_config(&options.config_path));
            return Ok(());
        }
        CliAction::Launch | CliAction::Check => {}
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `rolodex --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let client = if options.demo {
        None
    } else {
        Some(runtime::http_client(&config).with_context(|| {
            format!(
                "invalid [api] config in {}; fix base_url/results/timeout values",
                options.config_path.display()
            )
        })?)
    };
    if options.action == CliAction::Check {
        return Ok(());
    }

    let log_file = config.log_file()?;
    logging::init(config.log_level(), &log_file)?;
    tracing::info!(
        demo = options.demo,
        config = %options.config_path.display(),
        "starting rolodex"
    );

    let mut state = AppState::default();
    let ui = UiOptions {
        show_help_hint: config.show_help_hint(),
    };
    match client {
        Some(client) => rolodex_tui::run_app(&mut state, &mut HttpRuntime::new(client), ui),
        None => rolodex_tui::run_app(
            &mut state,
            &mut DemoRuntime::new(config.api_results()),
            ui,
        ),
    }
}

/// What a single invocation does. At most one non-launch action may be
/// requested; `--help` overrides the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliAction {
    Launch,
    Check,
    PrintConfigPath,
    PrintExampleConfig,
    Help,
}

impl CliAction {
    fn flag(self) -> &'static str {
        match self {
            Self::Launch => "",
            Self::Check => "--check",
            Self::PrintConfigPath => "--print-config-path",
            Self::PrintExampleConfig => "--print-example-config",
            Self::Help => "--help",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    action: CliAction,
    demo: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config_path: Option<PathBuf> = None;
    let mut action = CliAction::Launch;
    let mut demo = false;
    let mut help = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let arg = arg.as_ref();
        if let Some(value) = arg.strip_prefix("--config=") {
            set_config_path(&mut config_path, value)?;
            continue;
        }
        let requested = match arg {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                set_config_path(&mut config_path, value.as_ref())?;
                None
            }
            "--demo" => {
                demo = true;
                None
            }
            "--check" => Some(CliAction::Check),
            "--print-config-path" => Some(CliAction::PrintConfigPath),
            "--print-example-config" => Some(CliAction::PrintExampleConfig),
            "--help" | "-h" => {
                help = true;
                None
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        };

        if let Some(requested) = requested {
            if action != CliAction::Launch && action != requested {
                return Err(anyhow::anyhow!(
                    "{} cannot be combined with {}",
                    requested.flag(),
                    action.flag()
                ));
            }
            action = requested;
        }
    }

    Ok(CliOptions {
        config_path: config_path.unwrap_or(default_config_path),
        action: if help { CliAction::Help } else { action },
        demo,
    })
}

fn set_config_path(slot: &mut Option<PathBuf>, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("--config requires a file path");
    }
    if let Some(existing) = slot {
        anyhow::bail!(
            "--config given twice ({} and {value}); pass a single config file",
            existing.display()
        );
    }
    *slot = Some(PathBuf::from(value));
    Ok(())
}

fn print_help() {
    println!("rolodex: browse an employee directory");
    println!();
    println!("usage: rolodex [--config <path>] [--demo] [--check]");
    println!();
    println!("  --config <path>          Read settings from <path> (also --config=<path>)");
    println!("  --demo                   Browse generated employees without the network");
    println!("  --check                  Validate the config and API settings, then exit");
    println!("  --print-config-path      Print the config path that would be used");
    println!("  --print-example-config   Print a commented v1 config");
    println!("  -h, --help               Show this help");
    println!();
    println!("Environment: ROLODEX_CONFIG_PATH moves the default config;");
    println!("ROLODEX_LOG overrides [log].level.");
}
