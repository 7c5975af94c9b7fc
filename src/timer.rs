//! Wall-clock measurement of a block of work.
//!
//! Two forms report the same line, `"<label>: <nanos>ns"`:
//! [`MeasureTime`] is a value that reports when dropped, and
//! [`measure_time`] wraps a closure. Both report on every exit path,
//! including `?` early returns and panics, and never swallow either.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::guard::on_scope;

/// Reports the time elapsed between construction and drop.
#[must_use = "the report is emitted immediately if the timer is not bound"]
pub struct MeasureTime<W: Write = Stdout> {
    label: String,
    start: Instant,
    out: W,
}

impl MeasureTime {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_writer(label, io::stdout())
    }
}

impl<W: Write> MeasureTime<W> {
    pub fn with_writer(label: impl Into<String>, out: W) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
            out,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<W: Write> Drop for MeasureTime<W> {
    fn drop(&mut self) {
        report(&mut self.out, &self.label, self.start.elapsed());
    }
}

/// Runs `block` once and reports its duration to stdout.
pub fn measure_time<T>(label: impl Into<String>, block: impl FnOnce() -> T) -> T {
    measure_time_to(label, io::stdout(), block)
}

pub fn measure_time_to<T, W: Write>(
    label: impl Into<String>,
    mut out: W,
    block: impl FnOnce() -> T,
) -> T {
    let label = label.into();
    let start = Instant::now();
    let _report = on_scope(|| report(&mut out, &label, start.elapsed()));
    block()
}

pub fn format_report(label: &str, nanos: u128) -> String {
    format!("{label}: {nanos}ns")
}

fn report(out: &mut impl Write, label: &str, duration: Duration) {
    let nanos = duration.as_nanos();
    debug!(label, nanos = %nanos, "Scope finished");

    let written = writeln!(out, "{}", format_report(label, nanos)).and_then(|_| out.flush());
    if let Err(error) = written {
        warn!(%error, label, "Failed to write timing report");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    fn parse_report(line: &str) -> (&str, u128) {
        let (label, duration) = line.rsplit_once(": ").unwrap();
        let nanos = duration.strip_suffix("ns").unwrap().parse().unwrap();
        (label, nanos)
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn format_report_line() {
        assert_eq!(format_report("sum", 1234), "sum: 1234ns");
        assert_eq!(format_report("noop", 0), "noop: 0ns");
    }

    mod scoped {
        use super::*;

        #[test]
        fn reports_once_on_drop() {
            let mut out = Vec::new();
            {
                let timer = MeasureTime::with_writer("sum(range(0, 1000))", &mut out);
                assert_eq!(timer.label(), "sum(range(0, 1000))");
                let total: u64 = (0..1000).sum();
                assert_eq!(total, 499500);
            }

            let lines = lines(&out);
            assert_eq!(lines.len(), 1);
            let (label, _) = parse_report(&lines[0]);
            assert_eq!(label, "sum(range(0, 1000))");
        }

        #[test]
        fn label_with_colon_is_kept_whole() {
            let mut out = Vec::new();
            drop(MeasureTime::with_writer("step: parse", &mut out));

            let lines = lines(&out);
            let (label, _) = parse_report(&lines[0]);
            assert_eq!(label, "step: parse");
        }

        #[test]
        fn reports_before_panic_propagates() {
            let mut out = Vec::new();
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let _timer = MeasureTime::with_writer("failing", &mut out);
                panic!("block failed");
            }));

            assert!(result.is_err());
            assert_eq!(lines(&out).len(), 1);
        }

        #[test]
        fn reports_on_early_error_return() {
            fn fallible(out: &mut Vec<u8>) -> Result<(), String> {
                let _timer = MeasureTime::with_writer("fallible", out);
                Err::<(), _>("early".to_string())?;
                Ok(())
            }

            let mut out = Vec::new();
            assert_eq!(fallible(&mut out), Err("early".to_string()));
            let lines = lines(&out);
            assert_eq!(lines.len(), 1);
            assert_eq!(parse_report(&lines[0]).0, "fallible");
        }

        #[test]
        fn independent_uses_report_independently() {
            let mut out = Vec::new();
            for _ in 0..3 {
                let _timer = MeasureTime::with_writer("loop", &mut out);
            }
            assert_eq!(lines(&out).len(), 3);
        }
    }

    mod closure {
        use super::*;

        #[test]
        fn returns_block_value_and_reports_once() {
            let mut out = Vec::new();
            let total = measure_time_to("sum", &mut out, || (0..1000u64).sum::<u64>());

            assert_eq!(total, 499500);
            let lines = lines(&out);
            assert_eq!(lines.len(), 1);
            assert_eq!(parse_report(&lines[0]).0, "sum");
        }

        #[test]
        fn reports_before_panic_propagates() {
            let mut out = Vec::new();
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                measure_time_to::<(), _>("failing", &mut out, || panic!("block failed"))
            }));

            assert!(result.is_err());
            assert_eq!(lines(&out).len(), 1);
        }

        #[test]
        fn accepts_owned_label_and_passes_errors_through() {
            let mut out = Vec::new();
            let label = format!("parse {}", 1);
            let parsed = measure_time_to(label, &mut out, || "x".parse::<i32>());

            assert!(parsed.is_err());
            let lines = lines(&out);
            assert_eq!(lines.len(), 1);
            assert_eq!(parse_report(&lines[0]).0, "parse 1");
        }

        #[test]
        fn matches_scoped_form_except_for_duration() {
            let mut scoped = Vec::new();
            {
                let _timer = MeasureTime::with_writer("work", &mut scoped);
            }
            let mut closure = Vec::new();
            measure_time_to("work", &mut closure, || ());

            let scoped = lines(&scoped);
            let closure = lines(&closure);
            assert_eq!(parse_report(&scoped[0]).0, parse_report(&closure[0]).0);
            assert!(scoped[0].ends_with("ns") && closure[0].ends_with("ns"));
        }
    }
}
