//! Console Logger
//!
//! `tracing` subscriber for wasm pages. Every formatted event turns into a
//! single `console.*` call, chosen by the event level.

use std::io;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

pub use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to install console logger: {0}")]
    Install(String),
}

/// Receives one finished line per event.
pub type Emit = fn(Level, &str);

/// Send a formatted line to the `console` method matching `level`.
pub fn emit_to_console(level: Level, line: &str) {
    let msg = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&msg),
        Level::WARN => web_sys::console::warn_1(&msg),
        Level::INFO => web_sys::console::info_1(&msg),
        _ => web_sys::console::log_1(&msg),
    }
}

/// Buffers one event and hands it to the emitter when dropped.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    emit: Emit,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end_matches('\n');
        if !line.is_empty() {
            (self.emit)(self.level, line);
        }
    }
}

#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    emit: Emit,
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self::with_emit(emit_to_console)
    }
}

impl ConsoleMakeWriter {
    pub fn with_emit(emit: Emit) -> Self {
        Self { emit }
    }

    pub fn writer(&self, level: Level) -> ConsoleWriter {
        ConsoleWriter {
            level,
            buf: Vec::new(),
            emit: self.emit,
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}

/// Install the global subscriber. Timestamps are left out: wasm32 has no
/// system clock for the default timer.
pub fn init_logger(max_level: LevelFilter) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(ConsoleMakeWriter::default())
        .with_ansi(false)
        .without_time()
        .try_init()
        .map_err(|e| LoggerError::Install(e.to_string()))?;

    tracing::debug!(%max_level, "console logger initialized");
    Ok(())
}
