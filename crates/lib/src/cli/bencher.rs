use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::cli::{Opts, Output, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    ///
    /// Failures are reported as error messages on the output rather than
    /// aborting the process, so a report of all other solutions can still
    /// be collected.
    #[inline]
    pub fn iter<T, O>(&mut self, opts: &Opts, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug,
    {
        let stdout = std::io::stdout();
        let mut o = Output::new(stdout.lock(), opts.output_kind());

        if let Err(e) = self.inner_iter(&mut o, opts, iter) {
            o.error(format_args!("{e:#}"))?;
        }

        Ok(())
    }

    fn inner_iter<T, O>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            let s = Instant::now();

            o.info(format_args!("warming up ({warmup:?})..."))?;

            loop {
                let _ = black_box(iter()?);

                if s.elapsed() >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(sample(&mut iter)?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(sample(&mut iter)?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        samples.sort();

        let report = Report::from_sorted(&samples);
        log::debug!("{report:?}");
        o.report(&report)?;
        Ok(())
    }
}

/// Time a single invocation.
#[inline]
fn sample<T, O>(iter: &mut T) -> Result<Duration>
where
    T: FnMut() -> Result<O>,
{
    let before = Instant::now();
    let value = iter()?;
    let after = Instant::now();
    let _ = black_box(value);
    Ok(after.duration_since(before))
}
