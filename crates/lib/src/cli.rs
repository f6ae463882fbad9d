//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::time::Duration;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Error, Result};
use serde::Serialize;

use crate::input::IStr;

pub use self::bencher::Bencher;
pub use self::error::{error_context, LineCol};
use self::output::{Output, OutputKind};
pub use self::output::Answer;
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
    /// Input file overriding the default one.
    input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments, excluding the program name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<std::ffi::OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter().map(Into::into);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    opts.warmup = Some(value(it.next(), "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(it.next(), "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(it.next(), "--count")?);
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    opts.set_input(other)?;
                }
            }
        }

        if let Some(path) = it.next() {
            opts.set_input(&path)?;
        }

        if let Some(arg) = it.next() {
            bail!("unexpected argument: {}", Path::new(&arg).display());
        }

        Ok(opts)
    }

    /// The input file to read, falling back to `default` unless one was
    /// given on the command line.
    pub fn input_path(&self, default: &str) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None => PathBuf::from(default),
        }
    }

    fn set_input(&mut self, path: impl AsRef<Path>) -> Result<()> {
        if self.input.is_some() {
            bail!("duplicate input path: {}", path.as_ref().display());
        }

        self.input = Some(path.as_ref().to_owned());
        Ok(())
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Parse the value of an option.
fn value<T>(arg: Option<std::ffi::OsString>, name: &str) -> Result<T>
where
    T: core::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = arg.with_context(|| anyhow!("missing argument to `{name}`"))?;
    let arg = arg
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;
    arg.parse()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}

/// Run a solution according to the given options.
///
/// In the default mode the answer is checked and printed. Errors raised by
/// the solution are decorated with their location in the input at `path`.
pub fn run<T, O, E, C>(opts: &Opts, path: &Path, input: IStr, mut solve: T, check: C) -> Result<()>
where
    T: FnMut(IStr) -> Result<O, E>,
    O: Answer,
    C: Fn(&O) -> Result<()>,
    Error: From<E>,
{
    match opts.mode {
        Mode::Default => {
            let value = match solve(input) {
                Ok(value) => value,
                Err(error) => return Err(error_context(path, input, error)),
            };

            check(&value)?;

            let stdout = std::io::stdout();
            let mut o = Output::new(stdout.lock(), opts.output_kind());
            o.answer(&value)?;
        }
        Mode::Bench => {
            let mut b = Bencher::new();

            b.iter(opts, || {
                let value = solve(input)?;
                check(&value)?;
                Ok(value)
            })?;
        }
    }

    Ok(())
}

/// Check that a produced value matches the expected one.
pub fn check<O, C>(value: &O, expected: &C) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if !value.output_eq(expected) {
        bail!("{value:?} (value) != {expected:?} (expected)");
    }

    Ok(())
}

#[derive(Default, Debug, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Construct a report out of a collection of sorted samples.
    pub fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();

        let Some((&min, &max)) = samples.first().zip(samples.last()) else {
            return Self::default();
        };

        let sum = samples.iter().map(Duration::as_nanos).sum::<u128>();
        let avg = u64::try_from(sum / count as u128).unwrap_or(u64::MAX);

        let percentile = |p: usize| samples[(count - 1) * p / 100];

        Self {
            count,
            min,
            max,
            avg: Duration::from_nanos(avg),
            p50: percentile(50),
            p95: percentile(95),
            p99: percentile(99),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

#[cfg(test)]
mod tests;
