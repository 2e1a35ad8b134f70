use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// The file sink lives outside the installed subscriber so a later `init`
// call (settings reload, tests) can still point logging at a file after the
// global subscriber exists.
static FILE_SINK: Lazy<RwLock<Option<NonBlocking>>> = Lazy::new(|| RwLock::new(None));
// Keeps the non-blocking writers flushing for the lifetime of the process.
static FILE_GUARDS: Lazy<Mutex<Vec<WorkerGuard>>> = Lazy::new(|| Mutex::new(Vec::new()));

struct FileSink;

enum FileSinkWriter {
    Active(NonBlocking),
    Disabled,
}

impl Write for FileSinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileSinkWriter::Active(writer) => writer.write(buf),
            FileSinkWriter::Disabled => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileSinkWriter::Active(writer) => writer.flush(),
            FileSinkWriter::Disabled => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSink {
    type Writer = FileSinkWriter;

    fn make_writer(&'a self) -> FileSinkWriter {
        match FILE_SINK.read() {
            Ok(sink) => match &*sink {
                Some(writer) => FileSinkWriter::Active(writer.clone()),
                None => FileSinkWriter::Disabled,
            },
            Err(_) => FileSinkWriter::Disabled,
        }
    }
}

/// Initialise logging. In debug mode the default level is `debug` and can be
/// overridden via `RUST_LOG`; otherwise the level is forced to `info` so a
/// stray `RUST_LOG` in the environment cannot produce verbose output.
/// When `log_file` is set, output additionally goes to that file; when it is
/// `None`, no file is touched.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let sink = log_file.and_then(|path| match std::fs::File::create(&path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(err) => {
            eprintln!("failed to open log file {}: {err}", path.display());
            None
        }
    });
    if let Ok(mut current) = FILE_SINK.write() {
        *current = sink.map(|(writer, guard)| {
            if let Ok(mut guards) = FILE_GUARDS.lock() {
                guards.push(guard);
            }
            writer
        });
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(FileSink)
                .with_ansi(false),
        )
        .try_init();
}
