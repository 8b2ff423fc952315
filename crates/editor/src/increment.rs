//! The decade step ladder used by nudge controls.

/// Nudge step size, cycled through a fixed decade ladder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IncrementStep {
    Centi,
    Deci,
    #[default]
    One,
    Ten,
    Hundred,
}

impl IncrementStep {
    pub fn value(self) -> f64 {
        match self {
            IncrementStep::Centi => 0.01,
            IncrementStep::Deci => 0.1,
            IncrementStep::One => 1.0,
            IncrementStep::Ten => 10.0,
            IncrementStep::Hundred => 100.0,
        }
    }

    /// Next larger step, wrapping from 100 back to 0.01.
    pub fn next(self) -> Self {
        match self {
            IncrementStep::Centi => IncrementStep::Deci,
            IncrementStep::Deci => IncrementStep::One,
            IncrementStep::One => IncrementStep::Ten,
            IncrementStep::Ten => IncrementStep::Hundred,
            IncrementStep::Hundred => IncrementStep::Centi,
        }
    }

    /// Next smaller step, wrapping from 0.01 back to 100.
    pub fn prev(self) -> Self {
        match self {
            IncrementStep::Centi => IncrementStep::Hundred,
            IncrementStep::Deci => IncrementStep::Centi,
            IncrementStep::One => IncrementStep::Deci,
            IncrementStep::Ten => IncrementStep::One,
            IncrementStep::Hundred => IncrementStep::Ten,
        }
    }

    /// Snap a persisted setting back onto the ladder; anything off-ladder
    /// falls back to 1.
    pub fn from_value(value: f64) -> Self {
        if value == 0.01 {
            IncrementStep::Centi
        } else if value == 0.1 {
            IncrementStep::Deci
        } else if value == 10.0 {
            IncrementStep::Ten
        } else if value == 100.0 {
            IncrementStep::Hundred
        } else {
            IncrementStep::One
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_wraps_both_directions() {
        let mut step = IncrementStep::One;
        for _ in 0..5 {
            step = step.next();
        }
        assert_eq!(step, IncrementStep::One);
        assert_eq!(IncrementStep::Hundred.next(), IncrementStep::Centi);
        assert_eq!(IncrementStep::Centi.prev(), IncrementStep::Hundred);
    }

    #[test]
    fn persisted_values_snap_to_ladder() {
        assert_eq!(IncrementStep::from_value(0.1), IncrementStep::Deci);
        assert_eq!(IncrementStep::from_value(100.0), IncrementStep::Hundred);
        assert_eq!(IncrementStep::from_value(7.0), IncrementStep::One);
    }
}
