//! Command-line flags
//!
//! Exactly one of `--source` and `--recursive` selects the mode. Mode-specific
//! flags are rejected by clap when their mode is absent.

use crate::config::{Mode, RunConfig, DEFAULT_METHOD};
use crate::error::{Error, Result};
use crate::utils::ignore::{ExclusionRuleSet, PruneSet};
use crate::utils::paths::is_same_file;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

const USAGE: &str = "\
stringergen has two modes of operation: source and recursive.

Source mode generates String methods for the structs of one Go file.
It is enabled by --source. --destination writes the result to a file;
without it the result goes to stdout.
Example:
    stringergen --source foo.go --destination foo_stringer.go

Recursive mode generates String methods for the structs of every Go file
under a directory. It is enabled by --recursive. --save writes the result
for xx.go to xx_stringer.go next to it; without it the result goes to
stdout. --skipdir names directories that are never entered.
Example:
    stringergen --recursive ./pkg --save --skipdir vendor,testdata";

#[derive(Parser, Debug)]
#[command(name = "stringergen")]
#[command(about = "Generate String() methods for Go structs")]
#[command(version)]
#[command(after_long_help = USAGE)]
#[command(group(ArgGroup::new("mode").required(true).args(["source", "recursive"])))]
pub struct Cli {
    /// (source mode) Input Go source file
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// (source mode) Output file; defaults to stdout
    #[arg(long, value_name = "FILE", requires = "source")]
    pub destination: Option<PathBuf>,

    /// (recursive mode) Input directory, handled recursively
    #[arg(long, value_name = "DIR")]
    pub recursive: Option<PathBuf>,

    /// (recursive mode) Write xx_stringer.go next to each xx.go
    #[arg(long, requires = "recursive")]
    pub save: bool,

    /// (recursive mode) Comma-separated directory names to skip
    #[arg(long, value_name = "NAMES", requires = "recursive")]
    pub skipdir: Option<String>,

    /// Comma-separated regular expressions; matching struct names are skipped
    #[arg(long, value_name = "PATTERNS")]
    pub exclude: Option<String>,

    /// Generation method: json, jsoniter or fmt
    #[arg(long, value_name = "METHOD", default_value = DEFAULT_METHOD)]
    pub method: String,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the flags into a run configuration
    pub fn into_config(self) -> Result<RunConfig> {
        let exclusions = ExclusionRuleSet::compile(self.exclude.as_deref().unwrap_or(""))?;

        let mode = match (self.source, self.recursive) {
            (Some(path), None) => {
                if let Some(dest) = &self.destination {
                    if is_same_file(&path, dest) {
                        return Err(Error::config(format!(
                            "destination {} is the source file",
                            dest.display()
                        )));
                    }
                }
                Mode::Source {
                    path,
                    destination: self.destination,
                }
            }
            (None, Some(root)) => Mode::Recursive {
                root,
                save: self.save,
                prune: PruneSet::parse(self.skipdir.as_deref().unwrap_or("")),
            },
            _ => {
                return Err(Error::config(
                    "exactly one of --source and --recursive is required",
                ))
            }
        };

        Ok(RunConfig {
            mode,
            exclusions,
            method: self.method,
            verbose: self.verbose,
        })
    }
}
