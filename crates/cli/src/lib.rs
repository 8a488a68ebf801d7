#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of the `preserve-attrs`
//! binary. The tool resolves the preserve preferences of a copy job from the
//! command line, a job-properties file, or the environment, and reports which
//! filesystem attributes would be carried from source to destination.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for standard
//! output and error and returns the process exit code. A
//! [`clap`](https://docs.rs/clap/) command definition performs the parse; the
//! preferences themselves are decoded by [`preserve::PreserveAttributes`].
//!
//! Preferences are resolved in the following order:
//!
//! 1. `--mask`, a raw bitmask in decimal or `0x` hexadecimal;
//! 2. the positional `MNEMONIC` operand;
//! 3. the [`preserve::PRESERVED_ATTRIBUTES_KEY`] property of `--config FILE`;
//! 4. the [`PRESERVE_ATTRIBUTES_ENV`] environment variable;
//! 5. otherwise nothing is preserved.
//!
//! # Invariants
//!
//! - `run` never panics; I/O and configuration failures surface as exit code `1`.
//! - Mnemonic strings are never rejected. Unknown characters are ignored.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["preserve-attrs", "gpr"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("rgp\n"));
//! assert!(stderr.is_empty());
//! ```

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use is_terminal::IsTerminal;
use preserve::{ConfigError, JobProperties, PreserveAttribute, PreserveAttributes};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Name of the binary used in usage and diagnostics.
const PROGRAM_NAME: &str = "preserve-attrs";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Environment variable consulted when no other source supplies preferences.
pub const PRESERVE_ATTRIBUTES_ENV: &str = "PRESERVE_ATTRIBUTES";

/// Environment variable holding the `tracing` filter directives.
pub const LOG_FILTER_ENV: &str = "PRESERVE_LOG";

/// Deterministic help text describing the CLI surface.
const HELP_TEXT: &str = concat!(
    "Usage: preserve-attrs [-h] [-V] [--json] [-c FILE | -m MASK | MNEMONIC]\n",
    "\n",
    "Report which file attributes a copy job preserves. MNEMONIC is a string of\n",
    "attribute tokens; characters outside the token set are ignored.\n",
    "  r  replication factor\n",
    "  b  block size\n",
    "  u  owner\n",
    "  g  group\n",
    "  p  permission bits\n",
    "\n",
    "Options:\n",
    "  -h, --help           Show this help message and exit.\n",
    "  -V, --version        Output version information and exit.\n",
    "  -c, --config=FILE    Read 'copy.preserved.attributes' from a JSON job-properties file.\n",
    "  -m, --mask=MASK      Use a raw bitmask (decimal or 0x-prefixed hexadecimal).\n",
    "      --json           Emit the report as JSON.\n",
    "\n",
    "When no source is given, PRESERVE_ATTRIBUTES is consulted. Set PRESERVE_LOG\n",
    "to a tracing filter (for example 'debug') to enable diagnostics on stderr.\n",
);

/// Failures reported by the front-end.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", clap_message(.0))]
    Arguments(#[from] clap::Error),
    #[error("invalid --mask value '{value}': {source}")]
    Mask {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn clap_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_owned()
}

/// Parsed command produced by [`parse_args`].
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    json: bool,
    config: Option<PathBuf>,
    mask: Option<String>,
    mnemonic: Option<String>,
}

/// Where the resolved preferences came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Source {
    Mask,
    Operand,
    Config,
    Environment,
    Default,
}

impl Source {
    const fn label(self) -> &'static str {
        match self {
            Self::Mask => "--mask",
            Self::Operand => "operand",
            Self::Config => "config",
            Self::Environment => PRESERVE_ATTRIBUTES_ENV,
            Self::Default => "default",
        }
    }
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the report as JSON.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Read preferences from a JSON job-properties file.")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with_all(["mask", "mnemonic"]),
        )
        .arg(
            Arg::new("mask")
                .long("mask")
                .short('m')
                .value_name("MASK")
                .value_parser(value_parser!(String))
                .help("Use a raw bitmask (decimal or 0x-prefixed hexadecimal).")
                .conflicts_with("mnemonic"),
        )
        .arg(
            Arg::new("mnemonic")
                .value_name("MNEMONIC")
                .help("Attribute tokens drawn from 'rbugp'.")
                .value_parser(value_parser!(String))
                .allow_hyphen_values(true)
                .num_args(1),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        json: matches.get_flag("json"),
        config: matches.remove_one::<PathBuf>("config"),
        mask: matches.remove_one::<String>("mask"),
        mnemonic: matches.remove_one::<String>("mnemonic"),
    })
}

/// Parses a raw mask written in decimal or with a `0x` prefix.
fn parse_mask(text: &str) -> Result<u32, CliError> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };
    parsed.map_err(|source| CliError::Mask {
        value: text.to_owned(),
        source,
    })
}

fn resolve(
    parsed: &ParsedArgs,
    environment: Option<&str>,
) -> Result<(PreserveAttributes, Source), CliError> {
    if let Some(mask) = parsed.mask.as_deref() {
        return Ok((PreserveAttributes::from_bits(parse_mask(mask)?), Source::Mask));
    }

    if let Some(mnemonic) = parsed.mnemonic.as_deref() {
        return Ok((PreserveAttributes::from_mnemonic(mnemonic), Source::Operand));
    }

    if let Some(path) = parsed.config.as_ref() {
        let properties = JobProperties::load(path)?;
        return Ok((properties.preserved_attributes(), Source::Config));
    }

    if let Some(value) = environment {
        return Ok((PreserveAttributes::from_mnemonic(value), Source::Environment));
    }

    Ok((PreserveAttributes::EMPTY, Source::Default))
}

/// Per-attribute decisions in declaration order.
#[derive(Debug, Serialize)]
struct AttributeDecisions {
    replication: bool,
    #[serde(rename = "block-size")]
    block_size: bool,
    owner: bool,
    group: bool,
    permission: bool,
}

/// JSON rendering of a resolved preference set.
#[derive(Debug, Serialize)]
struct Report {
    mnemonic: String,
    bits: u32,
    source: &'static str,
    attributes: AttributeDecisions,
}

impl Report {
    fn new(attributes: PreserveAttributes, source: Source) -> Self {
        Self {
            mnemonic: attributes.to_mnemonic_string(),
            bits: attributes.bits(),
            source: source.label(),
            attributes: AttributeDecisions {
                replication: attributes.preserve(PreserveAttribute::Replication),
                block_size: attributes.preserve(PreserveAttribute::BlockSize),
                owner: attributes.preserve(PreserveAttribute::Owner),
                group: attributes.preserve(PreserveAttribute::Group),
                permission: attributes.preserve(PreserveAttribute::Permission),
            },
        }
    }
}

fn render_text<W: Write>(attributes: PreserveAttributes, out: &mut W) -> io::Result<()> {
    writeln!(out, "{attributes}")?;
    for attribute in PreserveAttribute::ALL {
        let decision = if attributes.preserve(attribute) {
            "yes"
        } else {
            "no"
        };
        writeln!(out, "{}: {decision}", attribute.name())?;
    }
    Ok(())
}

fn render_json<W: Write>(
    attributes: PreserveAttributes,
    source: Source,
    out: &mut W,
) -> Result<(), CliError> {
    let report = Report::new(attributes, source);
    serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn execute<Out: Write>(
    parsed: ParsedArgs,
    environment: Option<&str>,
    stdout: &mut Out,
) -> Result<(), CliError> {
    if parsed.show_help {
        stdout.write_all(HELP_TEXT.as_bytes())?;
        return Ok(());
    }

    if parsed.show_version {
        writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    let (attributes, source) = resolve(&parsed, environment)?;
    debug!(
        target: "preserve::cli",
        source = source.label(),
        bits = attributes.bits(),
        mnemonic = %attributes,
        "resolved preserve preferences"
    );

    if parsed.json {
        render_json(attributes, source, stdout)
    } else {
        render_text(attributes, stdout).map_err(CliError::from)
    }
}

fn run_with_environment<I, S, Out, Err>(
    arguments: I,
    environment: Option<&str>,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let result = parse_args(arguments)
        .map_err(CliError::from)
        .and_then(|parsed| execute(parsed, environment, stdout));

    match result {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: error: {error}");
            1
        }
    }
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller: `0` on success and `1` when arguments, configuration, or output
/// fail. Diagnostics are written to `stderr` as a single line.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let environment = env::var(PRESERVE_ATTRIBUTES_ENV).ok();
    run_with_environment(arguments, environment.as_deref(), stdout, stderr)
}

/// Installs the global `tracing` subscriber writing to standard error.
///
/// Filter directives are read from [`LOG_FILTER_ENV`], defaulting to `warn`.
/// Calling the function more than once leaves the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .try_init();
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
