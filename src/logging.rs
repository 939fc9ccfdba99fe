//! Logging init: file under the XDG state dir, stderr when unavailable.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Log sink: the state-dir file when it could be opened, stderr otherwise.
enum Sink {
    File(File),
    Stderr,
}

impl io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File(f) => f.write(buf),
            Sink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File(f) => f.flush(),
            Sink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SinkMaker(Option<File>);

impl<'a> MakeWriter<'a> for SinkMaker {
    type Writer = Sink;

    fn make_writer(&'a self) -> Sink {
        match &self.0 {
            Some(f) => f.try_clone().map(Sink::File).unwrap_or(Sink::Stderr),
            None => Sink::Stderr,
        }
    }
}

fn open_log_file() -> anyhow::Result<(File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ucd-update")?;
    let dir = xdg_dirs.get_state_home();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("ucd-update.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    Ok((file, path))
}

/// Initialize structured logging.
///
/// Appends to `~/.local/state/ucd-update/ucd-update.log`; if the state dir
/// is unusable (unwritable, no home), lines go to stderr instead so a manual
/// run still reports what it did. Filter honors `RUST_LOG`.
pub fn init() {
    let (file, path) = match open_log_file() {
        Ok((f, p)) => (Some(f), Some(p)),
        Err(_) => (None, None),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ucd_update=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(BoxMakeWriter::new(SinkMaker(file)))
        .with_ansi(false)
        .init();

    match path {
        Some(p) => tracing::info!("logging to {}", p.display()),
        None => tracing::warn!("state dir unavailable, logging to stderr"),
    }
}
