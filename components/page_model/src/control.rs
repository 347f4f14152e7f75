//! The run-trigger control.

/// A clickable control with a text label and a disabled flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    label: String,
    disabled: bool,
}

impl Control {
    /// Creates an enabled control with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            disabled: false,
        }
    }

    /// Returns the current label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label.
    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    /// Returns true while the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Sets the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
