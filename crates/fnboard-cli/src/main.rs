// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use fnboard_app::AppState;
use fnboard_db::Store;
use fnboard_tui::Dashboard;
use runtime::{CliRuntime, FunctionSource};
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
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `fnboard --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let db_path = if options.demo {
        PathBuf::from(":memory:")
    } else {
        config.db_path()?
    };
    if options.print_db_path {
        println!("{}", db_path.display());
        return Ok(());
    }

    let log_path = logging::init(&db_path)?;

    let store = Store::open(&db_path).with_context(|| {
        format!(
            "open database {} -- if this path is wrong, set [storage].db_path or FNBOARD_DB_PATH",
            db_path.display()
        )
    })?;
    store.bootstrap()?;

    let source = function_source(&options, &config);
    let public_url = config.public_url()?;
    if options.check_only {
        if let FunctionSource::File(path) = &source {
            let functions = source.load()?;
            println!("{}: {} functions", path.display(), functions.len());
        }
        return Ok(());
    }

    tracing::info!(
        db = %db_path.display(),
        log = ?log_path,
        source = ?source,
        "starting dashboard"
    );

    let mut state = AppState::at(config.start_location());
    let mut dashboard = Dashboard::initialize(config.dashboard_config(), &store, &state)?;
    let mut runtime = CliRuntime::new(source, public_url);
    fnboard_tui::run_app(&mut state, &mut dashboard, &mut runtime)
}

fn function_source(options: &CliOptions, config: &Config) -> FunctionSource {
    if options.demo {
        return FunctionSource::Demo;
    }
    match options
        .functions_path
        .clone()
        .or_else(|| config.functions_path())
    {
        Some(path) => FunctionSource::File(path),
        None => FunctionSource::Unset,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    functions_path: Option<PathBuf>,
    print_config_path: bool,
    print_db_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        functions_path: None,
        print_config_path: false,
        print_db_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--functions" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--functions requires a JSON file path"))?;
                options.functions_path = Some(PathBuf::from(value.as_ref()));
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-path" => {
                options.print_db_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("fnboard: terminal dashboard for deployed functions");
    println!("  --config <path>          Use a specific config path");
    println!("  --functions <path>       Read function records from a JSON file");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-path             Print resolved database path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Launch with generated functions (in-memory database)");
    println!("  --check                  Validate config, database, and function file");
    println!("  --help                   Show this help");
    println!();
    println!("Set FNBOARD_LOG (for example FNBOARD_LOG=debug) to write fnboard.log next to the database.");
}
