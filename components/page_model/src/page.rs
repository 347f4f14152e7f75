//! The page aggregate.

use std::cell::RefCell;
use std::rc::Rc;

use crate::class_list::ClassList;
use crate::control::Control;
use crate::results::ResultsPanel;
use crate::writer::PageWriter;

/// Initial label on the run-trigger control.
pub const RUN_BUTTON_LABEL: &str = "Start Tests";

/// The page surface shared between the shell and the benchmark driver.
///
/// Holds the body class list (theme classes live here), the run-trigger
/// control, and the results panel. The driver and its callbacks mutate the
/// page through a shared `Rc<RefCell<Page>>` handle.
#[derive(Debug)]
pub struct Page {
    /// The document body's class list.
    pub body: ClassList,
    /// The control that triggers a benchmark run.
    pub run_button: Control,
    /// The panel receiving benchmark result lines.
    pub results: ResultsPanel,
}

impl Page {
    /// Creates a page with an enabled run control and an empty results panel
    /// echoing to stdout.
    pub fn new() -> Self {
        Self {
            body: ClassList::new(),
            run_button: Control::new(RUN_BUTTON_LABEL),
            results: ResultsPanel::new(),
        }
    }

    /// Creates a page whose results panel echoes through the given writer.
    pub fn with_writer(writer: Box<dyn PageWriter>) -> Self {
        Self {
            body: ClassList::new(),
            run_button: Control::new(RUN_BUTTON_LABEL),
            results: ResultsPanel::with_writer(writer),
        }
    }

    /// Wraps a new page in the shared handle used across components.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
