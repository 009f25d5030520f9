//! crates/logging/src/handlers/stream.rs
//! Writer-backed handler rendering records as text lines.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::line_mode::LineMode;
use crate::{Handler, Record};

struct StreamState<W> {
    writer: W,
    line_mode: LineMode,
    error: Option<io::Error>,
}

/// Handler that renders records as `LEVEL:logger:message` into an
/// [`io::Write`] target.
///
/// Write failures never propagate into the code that logged: the most recent
/// error is kept and can be retrieved with [`take_error`](Self::take_error).
///
/// # Examples
///
/// ```
/// use logging::{Handler, Level, LineMode, Record, StreamHandler};
///
/// let handler = StreamHandler::new(Vec::new());
/// handler.handle(&Record::new("root", Level::Debug, "hello, world!"));
///
/// let output = String::from_utf8(handler.into_inner()).unwrap();
/// assert_eq!(output, "DEBUG:root:hello, world!\n");
/// ```
pub struct StreamHandler<W> {
    state: Mutex<StreamState<W>>,
}

impl StreamHandler<io::Stderr> {
    /// Creates a handler writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> StreamHandler<W> {
    /// Creates a handler that appends a newline after each record.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a handler with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(StreamState {
                writer,
                line_mode,
                error: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StreamState<W>> {
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub fn line_mode(&self) -> LineMode {
        self.lock().line_mode
    }

    /// Updates the [`LineMode`] used for subsequent records.
    pub fn set_line_mode(&self, line_mode: LineMode) {
        self.lock().line_mode = line_mode;
    }

    /// Runs `f` with a shared borrow of the underlying writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.lock().writer)
    }

    /// Removes and returns the last write error, if any.
    pub fn take_error(&self) -> Option<io::Error> {
        self.lock().error.take()
    }

    /// Consumes the handler and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
            .writer
    }
}

impl<W> StreamHandler<W>
where
    W: Write,
{
    fn render(state: &mut StreamState<W>, record: &Record) -> io::Result<()> {
        write!(state.writer, "{record}")?;
        if state.line_mode.append_newline() {
            state.writer.write_all(b"\n")?;
        }
        state.writer.flush()
    }
}

impl<W> Handler for StreamHandler<W>
where
    W: Write + Send,
{
    fn handle(&self, record: &Record) {
        let mut state = self.lock();
        if let Err(error) = Self::render(&mut state, record) {
            state.error = Some(error);
        }
    }

    fn describe(&self) -> &str {
        "StreamHandler"
    }
}

impl<W> fmt::Debug for StreamHandler<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandler")
            .field("line_mode", &self.line_mode())
            .finish_non_exhaustive()
    }
}
