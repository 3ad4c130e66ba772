use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

use tracing::trace;

use crate::interpreter::value::core::Value;

/// A source of values for `in` statements.
///
/// `current` is the value the target variable holds before the read, or
/// `None` if it is unbound. Sources that read text may use it to decide how
/// to interpret that text.
///
/// Returns `Ok(None)` once the source is exhausted.
pub trait InputSource {
    /// Produces the next input value.
    ///
    /// # Errors
    /// Returns an I/O error if the underlying reader fails.
    fn read_value(&mut self, current: Option<&Value>) -> io::Result<Option<Value>>;
}

/// Reads one line per value from a buffered reader.
///
/// The trailing line break is stripped and the text is coerced with
/// [`Value::coerce_input`]: if the variable already holds a number and the
/// line parses as that kind of number, the number is stored, otherwise the
/// raw text.
///
/// ```
/// use std::io::Cursor;
///
/// use pancake::interpreter::{
///     evaluator::input::{InputSource, LineInput},
///     value::core::Value,
/// };
///
/// let mut input = LineInput::new(Cursor::new("7\nseven\n"));
///
/// let first = input.read_value(Some(&Value::Integer(0))).unwrap();
/// assert_eq!(first, Some(Value::Integer(7)));
///
/// let second = input.read_value(Some(&Value::Integer(7))).unwrap();
/// assert_eq!(second, Some(Value::from("seven")));
///
/// assert_eq!(input.read_value(None).unwrap(), None);
/// ```
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_value(&mut self, current: Option<&Value>) -> io::Result<Option<Value>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let text = line.trim_end_matches(['\n', '\r']).to_string();
        trace!(%text, "read input line");
        Ok(Some(Value::coerce_input(text, current)))
    }
}

/// Reads values line by line from the process's standard input.
///
/// The standard input handle is locked only for the duration of one read,
/// so a driver may keep reading standard input between statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_value(&mut self, current: Option<&Value>) -> io::Result<Option<Value>> {
        LineInput::new(io::stdin().lock()).read_value(current)
    }
}

/// A pre-seeded queue of input values for non-interactive runs.
///
/// Each `in` statement consumes one entry, which is bound verbatim as a
/// string. Once the queue is empty, reads go to the fallback source if one
/// is set; otherwise the queue reports exhaustion.
///
/// ```
/// use pancake::interpreter::{
///     evaluator::input::{InputSource, QueuedInput},
///     value::core::Value,
/// };
///
/// let mut input = QueuedInput::new(["5"]);
///
/// assert_eq!(input.read_value(Some(&Value::Integer(1))).unwrap(), Some(Value::from("5")));
/// assert_eq!(input.read_value(None).unwrap(), None);
/// ```
#[derive(Default)]
pub struct QueuedInput {
    pending:  VecDeque<String>,
    fallback: Option<Box<dyn InputSource>>,
}

impl QueuedInput {
    /// Creates a queue holding `values` in order.
    pub fn new<I, S>(values: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { pending:  values.into_iter().map(Into::into).collect(),
               fallback: None, }
    }

    /// Sets the source read once the queue is empty.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl InputSource + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Appends a value to the end of the queue.
    pub fn push(&mut self, value: impl Into<String>) {
        self.pending.push_back(value.into());
    }

    /// Number of queued values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for QueuedInput {
    fn read_value(&mut self, current: Option<&Value>) -> io::Result<Option<Value>> {
        if let Some(text) = self.pending.pop_front() {
            trace!(%text, remaining = self.pending.len(), "dequeued input");
            return Ok(Some(Value::String(text)));
        }
        match &mut self.fallback {
            Some(fallback) => fallback.read_value(current),
            None => Ok(None),
        }
    }
}
