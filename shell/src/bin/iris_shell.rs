// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! The interactive Iris shell front end. Prints the banner, puts the terminal in raw
//! mode, and reads lines until `Ctrl+C` (or the end of piped input).

use clap::Parser;
use clap_config::{CLIArgs, KeymapArg};
use iris_shell::{EditorLoop, PlatformFamily, RawInputSource, ReadlineEvent, ShellError,
                 TracingConfig, decoder_for, inspect_keys, try_initialize_logging_global};
use std::io::Write;

fn main() -> miette::Result<()> {
    let cli_args = CLIArgs::parse();

    if cli_args.global_options.enable_logging {
        try_initialize_logging_global(TracingConfig::new_file(
            Some(cli_args.global_options.log_file.clone()),
            cli_args.global_options.log_level.into(),
        ))?;
        tracing::debug!(message = "Start logging", cli_args = ?cli_args);
    }

    let platform_family = match cli_args.keymap {
        KeymapArg::Auto => PlatformFamily::detect()?,
        KeymapArg::Unix => PlatformFamily::Unix,
        KeymapArg::Windows => PlatformFamily::Windows,
    };

    // Still in cooked mode, so plain newlines are fine here.
    print_banner().map_err(ShellError::from)?;

    let mut input = RawInputSource::open()?;
    let mut stdout = std::io::stdout().lock();
    let mut decoder = decoder_for(platform_family);

    if cli_args.show_keys {
        let count = inspect_keys(decoder.as_mut(), &mut input, &mut stdout)
            .map_err(ShellError::from)?;
        tracing::info!(message = "Key inspector done", count);
        return Ok(());
    }

    let mut editor = EditorLoop::new(cli_args.prompt, decoder);
    loop {
        match editor
            .readline(&mut input, &mut stdout)
            .map_err(ShellError::from)?
        {
            ReadlineEvent::Line(line) => {
                tracing::info!(message = "Read line", line = %line);
            }
            ReadlineEvent::Interrupted | ReadlineEvent::Eof => break,
        }
    }

    Ok(())
}

fn print_banner() -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Iris shell version v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(stdout, "Ctrl-C to exit.")?;
    stdout.flush()
}

mod clap_config {
    use clap::{Args, Parser, ValueEnum};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "iris-shell")]
    #[command(about = "Interactive line editor for the Iris shell")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CLIArgs {
        #[arg(long, default_value = "localhost> ", help = "Text drawn before the line.")]
        pub prompt: String,

        #[arg(
            long,
            value_enum,
            default_value_t = KeymapArg::Auto,
            help = "Which key table decodes the input. `auto` picks the one for this OS."
        )]
        pub keymap: KeymapArg,

        #[arg(
            long,
            help = "Print each decoded key instead of editing a line. Ctrl-C to stop."
        )]
        pub show_keys: bool,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file (see `--log-file`) for debugging."
        )]
        pub enable_logging: bool,

        #[arg(
            global = true,
            long,
            default_value = iris_shell::DEFAULT_LOG_FILE_NAME,
            help = "Path of the log file used with `--enable-logging`."
        )]
        pub log_file: String,

        #[arg(
            global = true,
            long,
            value_enum,
            default_value_t = LogLevelArg::Debug,
            help = "Lowest level written to the log file."
        )]
        pub log_level: LogLevelArg,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum KeymapArg {
        Auto,
        Unix,
        Windows,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum LogLevelArg {
        Error,
        Warn,
        Info,
        Debug,
        Trace,
    }

    impl From<LogLevelArg> for tracing::Level {
        fn from(it: LogLevelArg) -> Self {
            match it {
                LogLevelArg::Error => tracing::Level::ERROR,
                LogLevelArg::Warn => tracing::Level::WARN,
                LogLevelArg::Info => tracing::Level::INFO,
                LogLevelArg::Debug => tracing::Level::DEBUG,
                LogLevelArg::Trace => tracing::Level::TRACE,
            }
        }
    }

}
