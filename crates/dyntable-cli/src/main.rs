//! Dynamic table editor CLI.

use clap::{ColorChoice, Parser};
use dyntable_cli::commands::{
    run_add_option, run_add_row, run_delete_all, run_delete_row, run_options, run_set_label1,
    run_set_label2, run_show, run_vocabulary, save_warning,
};
use dyntable_cli::logging::{LogConfig, LogFormat, init_logging};
use dyntable_cli::session::open_file_session;
use dyntable_cli::settings::load_settings;
use dyntable_core::Label1Policy;
use dyntable_model::RowId;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, PolicyArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings();
    let policy = match cli.policy {
        Some(PolicyArg::Reject) => Label1Policy::Reject,
        Some(PolicyArg::Permit) => Label1Policy::Permit,
        None => settings.editing.label1_policy.into(),
    };
    let mut session = open_file_session(&settings, cli.data_dir, policy)?;

    let output = match cli.command {
        Command::Show => run_show(&session),
        Command::Vocabulary => run_vocabulary(&session),
        Command::AddRow => run_add_row(&mut session),
        Command::DeleteRow { id } => run_delete_row(&mut session, RowId::new(id)),
        Command::DeleteAll => run_delete_all(&mut session),
        Command::SetLabel1 { id, value } => run_set_label1(&mut session, RowId::new(id), value)?,
        Command::SetLabel2 { id, values } => {
            run_set_label2(&mut session, RowId::new(id), values)?
        }
        Command::AddOption { text } => run_add_option(&mut session, &text)?,
        Command::Options { id } => run_options(&session, RowId::new(id))?,
    };
    println!("{output}");
    if let Some(warning) = save_warning(&session) {
        eprintln!("{warning}");
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
