//! Application orchestrator.
//! Resolves settings (CLI over config file), initializes logging, installs
//! the signal handler, validates paths, and drives the pipeline:
//! migrate -> reap -> sweep -> summary dispatch.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use gatherup::cli::Args;
use gatherup::config::{self, CONFIG_ENV, Settings, xml};
use gatherup::errors::GatherError;
use gatherup::output as out;
use gatherup::{fs_ops, shutdown, summary};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    let settings = resolve_settings(&args)?;

    // Initialize logging and capture the guard so it can be dropped on signal
    let guard_opt: Option<tracing_appender::non_blocking::WorkerGuard> =
        init_tracing(&settings.log_level, settings.log_file.as_deref(), args.json).map_err(
            |e| {
                out::print_error(&format!("Failed to initialize logging: {e}"));
                e
            },
        )?;

    // Guard needs to be dropped on SIGINT to flush tracing_appender
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping after the current file...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
        })
        .expect("failed to install signal handler");
    }

    debug!("Starting gatherup: {:?}", settings);

    let result = run_pipeline(&settings);

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

/// The migration pipeline proper. Validation runs before any mutation;
/// reap and sweep are skipped when the walk was interrupted, since the
/// touched-directory bookkeeping is then incomplete.
fn run_pipeline(settings: &Settings) -> Result<()> {
    settings.validate()?;

    let report = fs_ops::migrate(settings)?;
    if shutdown::is_requested() {
        info!(
            moved = report.moved.len(),
            "Walk interrupted; leaving directories in place"
        );
    } else {
        fs_ops::reap(&report.touched, &settings.source_base, settings.dry_run);
        fs_ops::sweep(&settings.source_base, settings.dry_run);
    }

    summary::dispatch(&report, &settings.target_base, summary::SUMMARY_WAIT);

    info!(
        moved = report.moved.len(),
        duplicates_removed = report.duplicates_removed,
        failures = report.failures,
        "Run complete"
    );
    out::print_user(&format!(
        "Moved {} file(s) into {}",
        report.moved.len(),
        settings.target_base.display()
    ));
    Ok(())
}

/// Merge CLI flags over the config file and finalize. On a missing required
/// setting, write a template config (default location only) so the user has
/// something concrete to edit, then fail.
fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut partial = args.to_partial();
    match xml::load_partial() {
        Ok(Some(from_file)) => partial = partial.or(from_file),
        Ok(None) => {}
        Err(e) => out::print_warn(&format!("Ignoring unreadable config file: {e:#}")),
    }

    match partial.resolve() {
        Ok(settings) => Ok(settings),
        Err(err @ GatherError::MissingSetting(name)) => {
            out::print_error(&format!("Required setting '{name}' was not provided."));
            if let Some(path) = xml::ensure_default_config_exists() {
                out::print_success(&format!(
                    "A template gatherup config was written to: {}",
                    path.display()
                ));
                out::print_info(
                    "Edit it to set source_base, target_base, extension and pattern, or pass the values as flags (see --help).",
                );
            } else {
                out::print_info(
                    "Provide it with a CLI flag or in the config file (see --print-config).",
                );
            }
            Err(err.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
        out::print_info(&format!(
            "To override, unset {CONFIG_ENV} or set it to another file."
        ));
        return;
    }
    match config::default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default gatherup config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info(
                    "No config file exists there yet. A template is created on the first run with missing settings.",
                );
            }
        }
        None => {
            out::print_error("Could not determine a default config path for this platform.");
        }
    }
}
