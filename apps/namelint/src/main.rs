//! namelint CLI binary entry point.
//! Resolves config, loads descriptors and prints the report.

use clap::Parser;
use namelint::cli::{Cli, Commands};
use namelint::config::{self, Effective};
use namelint::lint::{self, LintSettings};
use namelint::registry::RuleRegistry;
use namelint::{case::CaseAnalyzer, input, output, utils};
use std::fmt::Display;

fn fail(msg: impl Display) -> ! {
    eprintln!("{} {}", utils::error_prefix(), msg);
    std::process::exit(2);
}

fn effective(
    repo_root: Option<&str>,
    config: Option<&str>,
    inputs: &[String],
    output: Option<&str>,
    jobs: Option<usize>,
) -> Effective {
    match config::resolve_effective(repo_root, config, inputs, output, jobs) {
        Ok(eff) => eff,
        Err(e) => fail(e),
    }
}

fn settings(eff: &Effective) -> LintSettings {
    match eff.lint_settings() {
        Ok(s) => s,
        Err(e) => fail(e),
    }
}

fn check_output(eff: &Effective, allowed: &[&str]) {
    if let Err(e) = utils::check_output_mode(&eff.output, allowed) {
        fail(e);
    }
}

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            repo_root,
            config,
            inputs,
            output,
            jobs,
        } => {
            let eff = effective(
                repo_root.as_deref(),
                config.as_deref(),
                &inputs,
                output.as_deref(),
                jobs,
            );
            check_output(&eff, &["human", "json", "jsonl"]);
            if eff.inputs.is_empty() {
                fail("No input configured. Pass --input or set `input` in namelint.toml.");
            }
            if eff.output == "human" {
                if eff.config_path.is_none() {
                    eprintln!(
                        "{} No namelint.toml found; using defaults.",
                        utils::note_prefix()
                    );
                } else if inputs.is_empty() {
                    eprintln!(
                        "{} Using configured inputs: [{}]",
                        utils::info_prefix(),
                        eff.inputs.join(", ")
                    );
                }
            }
            let descriptors = match input::load_descriptors(&eff.repo_root, &eff.inputs) {
                Ok(d) => d,
                Err(e) => fail(e),
            };
            let report = match lint::run_lint(&settings(&eff), &descriptors) {
                Ok(r) => r,
                Err(e) => fail(e),
            };
            output::print_report(&report, &eff.output, &eff.repo_root);
            if report.has_errors() {
                std::process::exit(1);
            }
        }
        Commands::Rules {
            repo_root,
            config,
            output,
        } => {
            let eff = effective(
                repo_root.as_deref(),
                config.as_deref(),
                &[],
                output.as_deref(),
                None,
            );
            check_output(&eff, &["human", "json"]);
            let registry = match RuleRegistry::with_selection(&settings(&eff).selection) {
                Ok(r) => r,
                Err(e) => fail(e),
            };
            output::print_rules(&registry, &eff.output);
        }
        Commands::Analyze {
            name,
            repo_root,
            output,
        } => {
            let eff = effective(repo_root.as_deref(), None, &[], output.as_deref(), None);
            check_output(&eff, &["human", "json"]);
            let analyzer = CaseAnalyzer::new(&settings(&eff).spelling);
            let spelling = analyzer.analyze(&name);
            output::print_analysis(&name, &spelling, &eff.output);
        }
    }
}
