use std::path::PathBuf;

use anyhow::{Result, bail};

/// Environment variable naming a catalog to open at startup.
pub const FILE_ENV_VAR: &str = "COURSE_BROWSER_FILE";

pub const USAGE: &str = "\
Usage: course-browser [FILE]

Browse a JSON or CSV course catalog.

Arguments:
  [FILE]  Catalog to open at startup (falls back to $COURSE_BROWSER_FILE)

Options:
  -h, --help  Print this help

Logging is controlled with RUST_LOG, e.g. RUST_LOG=course_browser=debug";

/// Startup settings for the viewer window.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub initial_file: Option<PathBuf>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_file: None,
            window_size: [1100.0, 720.0],
            min_window_size: [640.0, 400.0],
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Invocation {
    Run(AppConfig),
    Help,
}

impl AppConfig {
    /// Build the config from the process arguments and environment.
    pub fn from_env() -> Result<Invocation> {
        let env_file = std::env::var_os(FILE_ENV_VAR).map(PathBuf::from);
        Self::from_args(std::env::args().skip(1), env_file)
    }

    /// `args` excludes the program name. A positional file beats `env_file`.
    pub fn from_args<I>(args: I, env_file: Option<PathBuf>) -> Result<Invocation>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional: Option<PathBuf> = None;

        for arg in args {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Invocation::Help),
                flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n\n{USAGE}"),
                path => {
                    if positional.is_some() {
                        bail!("expected at most one FILE argument\n\n{USAGE}");
                    }
                    positional = Some(PathBuf::from(path));
                }
            }
        }

        Ok(Invocation::Run(AppConfig {
            initial_file: positional.or(env_file.filter(|p| !p.as_os_str().is_empty())),
            ..AppConfig::default()
        }))
    }
}
