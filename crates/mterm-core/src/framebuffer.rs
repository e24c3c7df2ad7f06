//! Framebuffer: fixed rows × cols matrix of glyphs.
//!
//! Cells live in a flat row-major `Vec<Glyph>`. Every write clamps its
//! coordinates to the screen first, so callers never need to pre-validate.
//! Region arguments are inclusive, matching [`Margin`](crate::margin::Margin).

use crate::format::Format;
use crate::glyph::Glyph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    glyphs: Vec<Glyph>,
    rows: u16,
    cols: u16,
}

impl Framebuffer {
    /// Create a blank framebuffer. Zero dimensions are raised to one.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            glyphs: vec![Glyph::default(); usize::from(rows) * usize::from(cols)],
            rows,
            cols,
        }
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    fn index(&self, row: u16, col: u16) -> usize {
        usize::from(row) * usize::from(self.cols) + usize::from(col)
    }

    fn clamp(&self, row: u16, col: u16) -> (u16, u16) {
        (row.min(self.rows - 1), col.min(self.cols - 1))
    }

    /// Glyph at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn glyph(&self, row: u16, col: u16) -> Option<&Glyph> {
        if row < self.rows && col < self.cols {
            Some(&self.glyphs[self.index(row, col)])
        } else {
            None
        }
    }

    /// Write a glyph, clamping the position onto the screen.
    pub fn set_glyph(&mut self, row: u16, col: u16, glyph: Glyph) {
        let (row, col) = self.clamp(row, col);
        let idx = self.index(row, col);
        self.glyphs[idx] = glyph;
    }

    /// Every cell, row by row.
    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Cells of one row.
    #[must_use]
    pub fn row(&self, row: u16) -> Option<&[Glyph]> {
        if row < self.rows {
            let start = self.index(row, 0);
            Some(&self.glyphs[start..start + usize::from(self.cols)])
        } else {
            None
        }
    }

    fn row_mut(&mut self, row: u16) -> &mut [Glyph] {
        let row = row.min(self.rows - 1);
        let start = self.index(row, 0);
        let cols = usize::from(self.cols);
        &mut self.glyphs[start..start + cols]
    }

    /// Row runes as a string, trailing blanks kept.
    #[must_use]
    pub fn row_text(&self, row: u16) -> String {
        self.row(row)
            .map(|cells| cells.iter().map(|g| g.rune).collect())
            .unwrap_or_default()
    }

    // ── Resets ──────────────────────────────────────────────────────

    /// Blank columns `start_col..=end_col` of `row` with `format`.
    pub fn reset_cells(&mut self, row: u16, start_col: u16, end_col: u16, format: Format) {
        let (row, start_col) = self.clamp(row, start_col);
        let end_col = end_col.min(self.cols - 1);
        if start_col > end_col {
            return;
        }
        let blank = Glyph::blank(format);
        let cells = self.row_mut(row);
        cells[usize::from(start_col)..=usize::from(end_col)].fill(blank);
    }

    /// Blank whole rows `start_row..=end_row` with `format`.
    pub fn reset_rows(&mut self, start_row: u16, end_row: u16, format: Format) {
        let start_row = start_row.min(self.rows - 1);
        let end_row = end_row.min(self.rows - 1);
        if start_row > end_row {
            return;
        }
        let start = self.index(start_row, 0);
        let end = self.index(end_row, 0) + usize::from(self.cols);
        self.glyphs[start..end].fill(Glyph::blank(format));
    }

    /// Blank the whole screen.
    pub fn reset_all(&mut self, format: Format) {
        self.glyphs.fill(Glyph::blank(format));
    }

    /// Fill every cell with `rune` (DECALN).
    pub fn fill(&mut self, rune: char, format: Format) {
        self.glyphs.fill(Glyph::new(rune, format));
    }

    // ── Insert / delete characters ──────────────────────────────────

    /// ICH: insert `count` blanks at `(row, col)`, shifting cells up to
    /// `right` (inclusive) rightwards. Cells pushed past `right` are lost.
    pub fn insert_blanks(&mut self, row: u16, col: u16, right: u16, count: u16, format: Format) {
        let (row, col) = self.clamp(row, col);
        let right = right.min(self.cols - 1);
        if count == 0 || col > right {
            return;
        }
        let c = usize::from(col);
        let end = usize::from(right) + 1;
        let n = usize::from(count).min(end - c);
        let cells = self.row_mut(row);
        cells.copy_within(c..end - n, c + n);
        cells[c..c + n].fill(Glyph::blank(format));
    }

    /// DCH: delete `count` cells at `(row, col)`, pulling cells up to
    /// `right` (inclusive) leftwards and blanking the vacated tail.
    pub fn delete_cells(&mut self, row: u16, col: u16, right: u16, count: u16, format: Format) {
        let (row, col) = self.clamp(row, col);
        let right = right.min(self.cols - 1);
        if count == 0 || col > right {
            return;
        }
        let c = usize::from(col);
        let end = usize::from(right) + 1;
        let n = usize::from(count).min(end - c);
        let cells = self.row_mut(row);
        cells.copy_within(c + n..end, c);
        cells[end - n..end].fill(Glyph::blank(format));
    }

    // ── Scrolling ───────────────────────────────────────────────────

    /// Move rows `top..=bottom` up by `count`, blanking the rows that open
    /// at the bottom.
    pub fn scroll_up(&mut self, top: u16, bottom: u16, count: u16, format: Format) {
        let top = top.min(self.rows - 1);
        let bottom = bottom.min(self.rows - 1);
        if top > bottom || count == 0 {
            return;
        }
        let height = bottom - top + 1;
        let count = count.min(height);
        let cols = usize::from(self.cols);

        let dst = usize::from(top) * cols;
        let src = usize::from(top + count) * cols;
        let len = usize::from(height - count) * cols;
        self.glyphs.copy_within(src..src + len, dst);

        self.reset_rows(bottom + 1 - count, bottom, format);
    }

    /// Move rows `top..=bottom` down by `count`, blanking the rows that open
    /// at the top.
    pub fn scroll_down(&mut self, top: u16, bottom: u16, count: u16, format: Format) {
        let top = top.min(self.rows - 1);
        let bottom = bottom.min(self.rows - 1);
        if top > bottom || count == 0 {
            return;
        }
        let height = bottom - top + 1;
        let count = count.min(height);
        let cols = usize::from(self.cols);

        let src = usize::from(top) * cols;
        let len = usize::from(height - count) * cols;
        let dst = usize::from(top + count) * cols;
        self.glyphs.copy_within(src..src + len, dst);

        self.reset_rows(top, top + count - 1, format);
    }
}
