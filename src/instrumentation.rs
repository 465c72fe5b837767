//! Latency profiling for the search routines.
//!
//! Compiled only with `--features instrumentation`. Each instrumented span
//! accumulates a call count and total wall time, reported by
//! `print_timing_statistics` when the process is done.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Span name -> (calls, total nanoseconds).
static TIMING_DATA: Lazy<Mutex<HashMap<&'static str, (u64, u64)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let started = span.extensions_mut().remove::<Instant>();
            if let Some(start) = started {
                let elapsed = start.elapsed();
                if let Ok(mut data) = TIMING_DATA.lock() {
                    let entry = data.entry(span.name()).or_insert((0, 0));
                    entry.0 += 1;
                    entry.1 += elapsed.as_nanos() as u64;
                }
            }
        }
    }
}

/// Installs the timing layer as the global tracing subscriber.
///
/// With `RUST_LOG` unset or `off` only timing data is collected; any other
/// value also prints span events.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "off".to_string());

    let result = if env_filter == "off" || env_filter.is_empty() {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        use tracing_subscriber::fmt;

        let fmt_layer = fmt::layer().with_target(false).with_level(false).compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(error) = result {
        eprintln!("failed to set tracing subscriber: {}", error);
    }
}

pub fn print_timing_statistics() {
    let mut entries: Vec<(&'static str, (u64, u64))> = match TIMING_DATA.lock() {
        Ok(data) => data.iter().map(|(name, totals)| (*name, *totals)).collect(),
        Err(_) => return,
    };

    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    entries.sort_by_key(|(_, (_, total))| std::cmp::Reverse(*total));

    eprintln!("\n{:=<80}", "");
    eprintln!("Search Latency (sorted by total time)");
    eprintln!("{:=<80}", "");
    eprintln!(
        "{:<40} {:>12} {:>12} {:>12}",
        "Function", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<80}", "");

    let mut grand_total_nanos = 0u64;
    for (name, (count, total_nanos)) in &entries {
        if *count == 0 {
            continue;
        }
        let total_ms = *total_nanos as f64 / 1_000_000.0;
        let avg_micros = (*total_nanos as f64 / *count as f64) / 1_000.0;
        grand_total_nanos += total_nanos;

        eprintln!(
            "{:<40} {:>12} {:>12.2} {:>12.2}",
            name, count, total_ms, avg_micros
        );
    }

    eprintln!("{:-<80}", "");
    eprintln!(
        "Total instrumented time: {:.2} ms\n",
        grand_total_nanos as f64 / 1_000_000.0
    );
}
