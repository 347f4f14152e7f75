//! The results panel.

use crate::writer::{PageWriter, StdoutWriter};

/// Container whose child lines are appended and cleared by the benchmark
/// driver.
///
/// Every appended line is also echoed through the panel's [`PageWriter`],
/// so a shell sees results stream in as they are produced.
pub struct ResultsPanel {
    lines: Vec<String>,
    writer: Box<dyn PageWriter>,
}

impl ResultsPanel {
    /// Creates a panel that echoes appended lines to stdout.
    pub fn new() -> Self {
        Self::with_writer(Box::new(StdoutWriter))
    }

    /// Creates a panel with a custom writer.
    pub fn with_writer(writer: Box<dyn PageWriter>) -> Self {
        Self {
            lines: Vec::new(),
            writer,
        }
    }

    /// Appends one line and echoes it through the writer.
    pub fn append(&mut self, line: &str) {
        self.lines.push(line.to_string());
        self.writer.write(line);
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the appended lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line has been appended since the last clear.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResultsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultsPanel")
            .field("lines", &self.lines)
            .finish()
    }
}
