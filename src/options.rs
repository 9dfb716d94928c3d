use std::ffi::OsString;
use std::path::PathBuf;

use crate::bmp::Permissiveness;
use crate::error::OptionsError;
use crate::filter::Filter;
use crate::limits::Limits;

/// Parsed `filter` invocation, handed by value to [`crate::run`].
#[derive(Clone, Debug)]
pub struct Options {
    pub filter: Filter,
    pub input: PathBuf,
    pub output: PathBuf,
    pub permissiveness: Permissiveness,
    pub limits: Limits,
}

impl Options {
    pub fn new(filter: Filter, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            filter,
            input: input.into(),
            output: output.into(),
            permissiveness: Permissiveness::default(),
            limits: Limits::default(),
        }
    }

    /// Parse arguments (without the program name).
    ///
    /// Accepts exactly one of `-b`, `-e`, `-g`, `-r` anywhere on the line,
    /// flags may be clustered (`-bg` counts as two), and `--` ends flag
    /// parsing. Exactly two positional paths must remain: input, output.
    pub fn parse<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut filter = None;
        let mut paths = Vec::new();
        let mut flags_done = false;

        for arg in args {
            let arg: OsString = arg.into();
            if !flags_done {
                if arg == "--" {
                    flags_done = true;
                    continue;
                }
                let cluster = arg
                    .to_str()
                    .and_then(|s| s.strip_prefix('-'))
                    .filter(|f| !f.is_empty());
                if let Some(cluster) = cluster {
                    for flag in cluster.chars() {
                        if filter.is_some() {
                            return Err(OptionsError::MultipleFilters);
                        }
                        filter = Some(Filter::from_flag(flag).ok_or(OptionsError::InvalidFilter(flag))?);
                    }
                    continue;
                }
            }
            paths.push(PathBuf::from(arg));
        }

        let Some(filter) = filter else {
            return Err(OptionsError::Usage);
        };
        let [input, output]: [PathBuf; 2] = paths.try_into().map_err(|_| OptionsError::Usage)?;
        Ok(Self::new(filter, input, output))
    }
}
