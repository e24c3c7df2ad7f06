//! G0/G1 character set designation and shifting.

/// Which designated set is invoked into GL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSet {
    #[default]
    G0,
    G1,
}

/// Character set state. Only DEC special graphics and ASCII are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Charset {
    pub active: ActiveSet,
    pub g0_line_drawing: bool,
    pub g1_line_drawing: bool,
}

impl Charset {
    /// Designate a set (SCS). `bracket` is `(` for G0 or `)` for G1; the
    /// designator `0` selects line drawing and anything else selects ASCII.
    pub fn set_cs(&mut self, bracket: u8, designator: u8) {
        let line_drawing = designator == b'0';
        match bracket {
            b'(' => self.g0_line_drawing = line_drawing,
            b')' => self.g1_line_drawing = line_drawing,
            _ => tracing::debug!(
                bracket = %char::from(bracket),
                designator = %char::from(designator),
                "unsupported charset slot"
            ),
        }
    }

    /// SI: invoke G0.
    pub fn shift_in(&mut self) {
        self.active = ActiveSet::G0;
    }

    /// SO: invoke G1.
    pub fn shift_out(&mut self) {
        self.active = ActiveSet::G1;
    }

    /// Whether the invoked set is DEC special graphics.
    #[must_use]
    pub fn is_line_drawing(&self) -> bool {
        match self.active {
            ActiveSet::G0 => self.g0_line_drawing,
            ActiveSet::G1 => self.g1_line_drawing,
        }
    }

    /// Map a printed rune through the invoked set.
    #[must_use]
    pub fn rune_for(&self, r: char) -> char {
        if self.is_line_drawing() {
            dec_special_graphics(r)
        } else {
            r
        }
    }
}

/// DEC special graphics for 0x60..=0x7E.
static DEC_GRAPHICS: [char; 31] = [
    '◆', '▒', '␉', '␌', '␍', '␊', '°', '±', '␤', '␋', '┘', '┐', '┌', '└', '┼', '⎺', '⎻', '─',
    '⎼', '⎽', '├', '┤', '┴', '┬', '│', '≤', '≥', 'π', '≠', '£', '·',
];

fn dec_special_graphics(r: char) -> char {
    match r {
        '`'..='~' => DEC_GRAPHICS[(r as usize) - 0x60],
        _ => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designate_g1_line_drawing_leaves_g0() {
        let mut cs = Charset::default();
        cs.set_cs(b')', b'0');
        assert!(cs.g1_line_drawing);
        assert!(!cs.g0_line_drawing);
        assert_eq!(cs.rune_for('a'), 'a');
        cs.shift_out();
        assert_eq!(cs.rune_for('a'), '▒');
        cs.shift_in();
        assert_eq!(cs.rune_for('a'), 'a');
    }

    #[test]
    fn ascii_designator_clears_line_drawing() {
        let mut cs = Charset::default();
        cs.set_cs(b'(', b'0');
        assert_eq!(cs.rune_for('q'), '─');
        cs.set_cs(b'(', b'B');
        assert_eq!(cs.rune_for('q'), 'q');
    }

    #[test]
    fn graphics_table_edges() {
        let cs = Charset {
            g0_line_drawing: true,
            ..Charset::default()
        };
        assert_eq!(cs.rune_for('`'), '◆');
        assert_eq!(cs.rune_for('x'), '│');
        assert_eq!(cs.rune_for('~'), '·');
        assert_eq!(cs.rune_for('A'), 'A');
        assert_eq!(cs.rune_for('中'), '中');
    }
}
