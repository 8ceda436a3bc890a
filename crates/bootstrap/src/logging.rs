use anyhow::{Context, Result};
use chrono::Utc;
use tracing::Subscriber;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

const DEFAULT_FILTER: &str = "info";

/// One line per event: UTC timestamp, level, target, fields
pub struct LineFormat {
    service: &'static str,
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} {:<5} {} [{}] ",
            Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            meta.level(),
            self.service,
            meta.target(),
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init(service: &'static str) -> Result<()> {
    let filter = filter_from_env();

    let layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat { service })
        .with_ansi(false)
        .with_writer(std::io::stderr);

    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(filter).with(layer))
        .context("Failed to set tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::info;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_line_format() {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(LineFormat { service: "bbms-db" })
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            info!(table = "bbms-users", "resolved");
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let line = output.lines().next().unwrap();
        let (timestamp, rest) = line.split_once(' ').unwrap();
        assert!(timestamp.ends_with('Z'));
        assert!(rest.starts_with("INFO  bbms-db ["));
        assert!(rest.contains("logging::tests] "));
        assert!(rest.contains("resolved"));
        assert!(rest.contains("table=\"bbms-users\""));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_dotenv_reaches_filter() {
        let dir = std::env::temp_dir().join(format!("bbms-db-dotenv-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        std::fs::write(&path, "RUST_LOG=debug\n").unwrap();

        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        dotenvy::from_path(&path).unwrap();
        let filter = filter_from_env();
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(filter.to_string(), "debug");
    }
}
