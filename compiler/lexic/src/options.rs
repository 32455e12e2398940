//! Command-line option parsing.
//!
//! Arguments are parsed by hand: the option set is small and every flag
//! is either a switch or a `--name=value` pair.

use std::path::PathBuf;
use std::str::FromStr;

use lexi_lexer::{ScannerConfig, SpaceMode};

use crate::DriverError;

/// Where the source text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

/// Which scanner entry point drives the scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// One call to `Scanner::scan_all`.
    #[default]
    All,
    /// `Scanner::next_token` in a loop until `Eof`.
    Pull,
}

impl FromStr for ScanMode {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "pull" => Ok(Self::Pull),
            other => Err(DriverError::Usage(format!(
                "unknown mode `{other}` (expected `all` or `pull`)"
            ))),
        }
    }
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverOptions {
    pub input: Input,
    pub mode: ScanMode,
    pub config: ScannerConfig,
    /// `-h` / `--help` was given; everything else is ignored.
    pub help: bool,
}

/// Parse the arguments that follow the program name.
pub fn parse_args(args: &[String]) -> Result<DriverOptions, DriverError> {
    let mut options = DriverOptions::default();
    let mut input = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                options.help = true;
                return Ok(options);
            }
            "--block-comments" => {
                options.config = options.config.with_block_comments(true);
            }
            "-" => set_input(&mut input, Input::Stdin)?,
            flag if flag.starts_with("--") => {
                let (name, value) = flag.split_once('=').ok_or_else(|| {
                    DriverError::Usage(format!("unknown option `{flag}`"))
                })?;
                match name {
                    "--mode" => options.mode = value.parse()?,
                    "--fold-width" => {
                        let width = value.parse::<u32>().map_err(|_| {
                            DriverError::Usage(format!("invalid fold width `{value}`"))
                        })?;
                        options.config = options.config.with_fold_width(width)?;
                    }
                    "--spaces" => {
                        let spaces = value.parse::<SpaceMode>()?;
                        options.config = options.config.with_spaces(spaces);
                    }
                    _ => return Err(DriverError::Usage(format!("unknown option `{name}`"))),
                }
            }
            flag if flag.starts_with('-') => {
                return Err(DriverError::Usage(format!("unknown option `{flag}`")));
            }
            path => set_input(&mut input, Input::File(PathBuf::from(path)))?,
        }
    }

    options.input = input.unwrap_or_default();
    Ok(options)
}

fn set_input(slot: &mut Option<Input>, input: Input) -> Result<(), DriverError> {
    if slot.is_some() {
        return Err(DriverError::Usage(
            "only one input file may be given".to_owned(),
        ));
    }
    *slot = Some(input);
    Ok(())
}

/// Help text printed for `--help` and after usage errors.
pub fn usage() -> &'static str {
    "Usage: lexic [OPTIONS] [FILE]

Prints one token per line as [KIND] or [KIND, value].
Reads stdin when FILE is absent or `-`.

Options:
  --mode=all|pull                  scan_all (default) or a next_token loop
  --fold-width=N                   spaces per INDENT unit (default 4)
  --spaces=fold|whitespace|skip    what to do with spaces (default fold)
  --block-comments                 enable ## ... ## comments
  -h, --help                       print this help"
}
