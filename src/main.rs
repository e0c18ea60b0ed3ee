// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use sorted_search::scenarios::SCENARIOS;
use sorted_search::{SearchOutcome, SearchTrace, SearchWindow, SortedSlice};

mod cli;
use cli::config::{load_config, Config, Format, StrategyChoice};
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let settings = resolve_settings(&cli, &config);
    display::init_colors(settings.color);

    match cli.command {
        Commands::Find {
            values,
            target,
            left,
            right,
            steps,
            ..
        } => {
            let request = FindRequest {
                window: resolve_window(values.len(), left, right),
                values,
                target,
                strategy: settings.strategy,
                validate: settings.validate,
            };
            run_find(&request, settings.format, steps)
        }
        Commands::Demo { .. } => run_demo(settings.strategy, settings.format),
    }
}

/// Options in effect once command-line flags are laid over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    format: Format,
    color: bool,
    strategy: StrategyChoice,
    validate: bool,
}

fn resolve_settings(cli: &Cli, config: &Config) -> Settings {
    let (strategy, no_validate) = match &cli.command {
        Commands::Find {
            strategy,
            no_validate,
            ..
        } => (*strategy, *no_validate),
        Commands::Demo { strategy } => (*strategy, false),
    };
    Settings {
        format: cli.format.unwrap_or(config.output.format),
        color: config.output.color && !cli.no_color,
        strategy: strategy.unwrap_or(config.search.strategy),
        validate: config.search.validate && !no_validate,
    }
}

struct FindRequest {
    values: Vec<i64>,
    target: i64,
    window: SearchWindow,
    strategy: StrategyChoice,
    validate: bool,
}

/// Default bounds are `0` and `len - 1`; an empty input gives an empty window.
fn resolve_window(len: usize, left: Option<usize>, right: Option<usize>) -> SearchWindow {
    match (left, right) {
        (None, None) => SearchWindow::full(len),
        (left, Some(right)) => SearchWindow::new(left.unwrap_or(0), right),
        (Some(left), None) => match len.checked_sub(1) {
            Some(right) => SearchWindow::new(left, right),
            None => SearchWindow::empty(),
        },
    }
}

#[derive(Serialize)]
struct FindReport<'a> {
    target: i64,
    len: usize,
    left: usize,
    right: Option<usize>,
    results: &'a [SearchTrace],
    agree: bool,
}

fn run_find(request: &FindRequest, format: Format, steps: bool) -> Result<()> {
    let sorted = if request.validate {
        SortedSlice::new(&request.values).context("values must be sorted in ascending order")?
    } else {
        tracing::debug!("sortedness check skipped");
        SortedSlice::new_unchecked(&request.values)
    };

    let traces = request
        .strategy
        .strategies()
        .iter()
        .map(|&strategy| sorted.trace(request.window, &request.target, strategy))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("cannot search window {}", request.window))?;

    let agree = traces.windows(2).all(|pair| pair[0].outcome == pair[1].outcome);
    if !agree {
        tracing::error!(value = request.target, "strategies disagree");
    }

    match format {
        Format::Json => {
            let report = FindReport {
                target: request.target,
                len: request.values.len(),
                left: request.window.left(),
                right: request.window.right(),
                results: &traces,
                agree,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Text => {
            for trace in &traces {
                println!(
                    "{:<10} {}  ({} comparisons)",
                    format!("{}:", trace.strategy),
                    display::outcome(trace.outcome),
                    trace.comparisons()
                );
                if steps {
                    for (i, probe) in trace.probes.iter().enumerate() {
                        println!("    {}", display::probe(i, probe));
                    }
                }
            }
            if traces.len() > 1 {
                println!("strategies agree: {}", display::verdict(agree));
            }
        }
    }

    if !agree {
        bail!("strategies returned different outcomes");
    }
    Ok(())
}

#[derive(Serialize)]
struct DemoRecord {
    scenario: &'static str,
    strategy: &'static str,
    target: i64,
    expected: SearchOutcome,
    actual: SearchOutcome,
    ok: bool,
}

fn run_demo(choice: StrategyChoice, format: Format) -> Result<()> {
    let mut records = Vec::new();
    for scenario in SCENARIOS {
        let sorted = SortedSlice::new(scenario.values)
            .with_context(|| format!("scenario '{}' is not sorted", scenario.name))?;
        for &strategy in choice.strategies() {
            let actual = sorted.search(&scenario.target, strategy);
            records.push(DemoRecord {
                scenario: scenario.name,
                strategy: strategy.name(),
                target: scenario.target,
                expected: scenario.expected,
                actual,
                ok: actual == scenario.expected,
            });
        }
    }

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        Format::Text => {
            display::table_top("SCENARIOS");
            for record in &records {
                display::table_row(&format!(
                    "{:<32} {:<10} {:>6}  {}  {}",
                    record.scenario,
                    record.strategy,
                    record.target,
                    display::outcome(record.actual),
                    display::verdict(record.ok)
                ));
            }
            display::table_bottom();
        }
    }

    let failed = records.iter().filter(|r| !r.ok).count();
    if failed > 0 {
        bail!("{} of {} scenario runs did not match", failed, records.len());
    }
    Ok(())
}
