//! Cursor position.

/// Zero-based cursor position. The terminal keeps it on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub row: u16,
    pub col: u16,
}

impl Cursor {
    #[must_use]
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// CUP sequence that moves a terminal here.
    ///
    /// Coordinates are emitted 1-based; a field at the origin is left empty
    /// since CUP defaults it to 1.
    #[must_use]
    pub fn ansi_string(&self) -> String {
        let field = |v: u16| {
            if v == 0 {
                String::new()
            } else {
                (u32::from(v) + 1).to_string()
            }
        };
        format!("\x1b[{};{}H", field(self.row), field(self.col))
    }

    /// Clamp onto a `rows × cols` screen.
    #[must_use]
    pub fn clamped(self, rows: u16, cols: u16) -> Self {
        Self {
            row: self.row.min(rows.saturating_sub(1)),
            col: self.col.min(cols.saturating_sub(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_string_omits_origin_fields() {
        assert_eq!(Cursor::new(0, 0).ansi_string(), "\x1b[;H");
        assert_eq!(Cursor::new(2, 0).ansi_string(), "\x1b[3;H");
        assert_eq!(Cursor::new(0, 9).ansi_string(), "\x1b[;10H");
        assert_eq!(Cursor::new(23, 79).ansi_string(), "\x1b[24;80H");
    }

    #[test]
    fn clamped_stays_on_screen() {
        assert_eq!(Cursor::new(50, 200).clamped(24, 80), Cursor::new(23, 79));
        assert_eq!(Cursor::new(5, 5).clamped(24, 80), Cursor::new(5, 5));
    }
}
