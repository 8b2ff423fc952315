//! A single editable numeric field with tri-state parse status.

use maneuver_core::units::two_decimals;

/// Editable scalar buffer. `text` holds exactly what was typed; `value` is
/// the last successfully parsed number and is only trusted while `parsed`
/// is true. Incomplete input (`""`, `"-"`, `"1."`) keeps the text verbatim
/// so a redraw never wipes an edit in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBuffer {
    text: String,
    parsed: bool,
    value: f64,
}

impl FieldBuffer {
    /// Buffer seeded from a known-good value.
    pub fn from_value(value: f64) -> Self {
        FieldBuffer {
            text: two_decimals(value),
            parsed: true,
            value,
        }
    }

    /// The text to redisplay, always verbatim while an edit is incomplete.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Last successfully parsed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Accept typed text. Returns true when the parsed value actually
    /// changed, the owner's dirty signal. Identical text is a no-op, so
    /// redundant redraw callbacks cost nothing. Text that is empty, ends in
    /// a decimal point, or fails to parse to a finite number is kept
    /// verbatim with `parsed` cleared and the old value untouched.
    pub fn set(&mut self, text: &str) -> bool {
        if text == self.text {
            return false;
        }
        if text.is_empty() || text.ends_with('.') {
            self.text = text.to_string();
            self.parsed = false;
            return false;
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                let dirty = value != self.value;
                self.text = two_decimals(value);
                self.parsed = true;
                self.value = value;
                dirty
            }
            _ => {
                self.text = text.to_string();
                self.parsed = false;
                false
            }
        }
    }

    /// Add `delta` to the value and re-render the text. Always dirties.
    pub fn nudge(&mut self, delta: f64) -> bool {
        self.value += delta;
        self.text = two_decimals(self.value);
        self.parsed = true;
        true
    }

    /// Adopt an external value, but only while the buffer is in the
    /// accepted state; a mid-edit buffer is never clobbered.
    pub fn reconcile_from(&mut self, value: f64) {
        if !self.parsed {
            return;
        }
        self.value = value;
        self.text = two_decimals(value);
    }
}

impl Default for FieldBuffer {
    fn default() -> Self {
        FieldBuffer::from_value(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_text_is_kept_verbatim() {
        for input in ["", "-", "1.", "12.3.", "abc", "1e", "--5"] {
            let mut buffer = FieldBuffer::from_value(42.0);
            buffer.set(input);
            assert_eq!(buffer.text(), input, "input {input:?}");
            assert!(!buffer.is_parsed(), "input {input:?}");
            assert_eq!(buffer.value(), 42.0, "value survives {input:?}");
        }
    }

    #[test]
    fn identical_text_is_idempotent() {
        let mut buffer = FieldBuffer::from_value(0.0);
        assert!(buffer.set("12.5"));
        assert_eq!(buffer.text(), "12.5");
        assert!(!buffer.set("12.5"));
        assert_eq!(buffer.value(), 12.5);
    }

    #[test]
    fn reparse_to_same_value_is_not_dirty() {
        let mut buffer = FieldBuffer::from_value(5.0);
        // "5.0" canonicalizes to the already-displayed "5".
        assert!(!buffer.set("5.0"));
        assert_eq!(buffer.text(), "5");
        assert_eq!(buffer.value(), 5.0);
    }

    #[test]
    fn completing_an_edit_parses_and_dirties() {
        let mut buffer = FieldBuffer::from_value(0.0);
        buffer.set("1.");
        assert!(!buffer.is_parsed());
        assert!(buffer.set("1.5"));
        assert!(buffer.is_parsed());
        assert_eq!(buffer.value(), 1.5);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut buffer = FieldBuffer::from_value(1.0);
        buffer.set("inf");
        assert!(!buffer.is_parsed());
        assert_eq!(buffer.value(), 1.0);
    }

    #[test]
    fn nudge_always_dirties() {
        let mut buffer = FieldBuffer::from_value(1.0);
        assert!(buffer.nudge(0.5));
        assert_eq!(buffer.value(), 1.5);
        assert_eq!(buffer.text(), "1.5");
        assert!(buffer.nudge(0.0));
    }

    #[test]
    fn reconcile_respects_mid_edit_state() {
        let mut buffer = FieldBuffer::from_value(1.0);
        buffer.reconcile_from(3.0);
        assert_eq!(buffer.value(), 3.0);
        assert_eq!(buffer.text(), "3");

        buffer.set("2.");
        buffer.reconcile_from(9.0);
        assert_eq!(buffer.text(), "2.", "mid-edit text preserved");
        assert_eq!(buffer.value(), 3.0, "mid-edit value preserved");
    }

    #[test]
    fn value_keeps_full_precision_past_display_rounding() {
        let mut buffer = FieldBuffer::from_value(0.0);
        assert!(buffer.set("1234.5678"));
        assert_eq!(buffer.value(), 1234.5678);
        assert_eq!(buffer.text(), "1234.57");
    }
}
