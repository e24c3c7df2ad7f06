//! Scrolling margins.

/// An inclusive `[min, max]` band of rows or columns.
///
/// An unset margin places no restriction and contains every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margin {
    min: u16,
    max: u16,
    is_set: bool,
}

impl Margin {
    /// Build a margin. `min >= max` yields an unset margin.
    #[must_use]
    pub fn new(min: u16, max: u16) -> Self {
        if min >= max {
            tracing::debug!(min, max, "invalid margin, leaving unset");
            return Self::unset();
        }
        Self {
            min,
            max,
            is_set: true,
        }
    }

    #[must_use]
    pub const fn unset() -> Self {
        Self {
            min: 0,
            max: 0,
            is_set: false,
        }
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    #[must_use]
    pub fn min(&self) -> u16 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Whether `v` lies inside the margin (always true when unset).
    #[must_use]
    pub fn contains(&self, v: u16) -> bool {
        !self.is_set || (self.min..=self.max).contains(&v)
    }

    /// Effective `(top, bottom)` bounds given the screen `extent`.
    #[must_use]
    pub fn bounds(&self, extent: u16) -> (u16, u16) {
        let last = extent.saturating_sub(1);
        if self.is_set {
            (self.min.min(last), self.max.min(last))
        } else {
            (0, last)
        }
    }

    /// Sequence that re-establishes this margin, 1-based. `final_byte` is
    /// `r` for the vertical margin and `s` for the horizontal one.
    #[must_use]
    pub fn ansi_string(&self, final_byte: char) -> String {
        if self.is_set {
            format!("\x1b[{};{}{final_byte}", self.min + 1, self.max + 1)
        } else {
            format!("\x1b[{final_byte}")
        }
    }
}
