use crate::error::{Error, Result};
use chrono::Local;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self as tfmt, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const TIME_FORMAT: &str = "%H:%M:%S";

/// Line layout shared by the file and console sinks:
///
/// `[14:02:11] [INFO] [wiki_animals::tools::table.fetch_animal_records] message`
///
/// The part after the dot is the innermost span name, which
/// `#[tracing::instrument]` sets to the function name.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "[{}] [{}] [{}",
            Local::now().format(TIME_FORMAT),
            meta.level(),
            meta.target()
        )?;
        if let Some(span) = ctx.event_scope().and_then(|mut scope| scope.next()) {
            write!(writer, ".{}", span.name())?;
        }
        write!(writer, "] ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber: truncate `log_file` and log to it and to
/// stderr. `RUST_LOG` overrides `default_level`.
pub fn init_logging(log_file: &Path, default_level: &str) -> Result<()> {
    let file = File::create(log_file).map_err(|e| Error::filesystem(log_file, e))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| Error::Config(format!("invalid log level {default_level:?}: {e}")))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tfmt::layer()
                .event_format(LineFormat)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(
            tfmt::layer()
                .event_format(LineFormat)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {e}")))
}
