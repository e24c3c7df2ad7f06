//! Terminal state and action dispatch.
//!
//! [`Terminal`] owns a [`Parser`] and everything the parser's actions act on:
//! the framebuffer, cursor, margins, modes, charset, current format, OSC
//! state and tab stops. Bytes go in through [`Terminal::feed`]; the resulting
//! state is read back through the accessors.

use tracing::{debug, trace};

use crate::charset::Charset;
use crate::config::{ConfigError, TerminalConfig};
use crate::cursor::Cursor;
use crate::format::Format;
use crate::framebuffer::Framebuffer;
use crate::glyph::{Glyph, HyperlinkId, HyperlinkRegistry};
use crate::margin::Margin;
use crate::modes::{self, ModeState, Modes};
use crate::osc::{Osc8, OscBuffer, OscCommand, parse_osc};
use crate::parser::{Action, Dispatch, Parser};

const TAB_WIDTH: u16 = 8;

/// State saved by DECSC / SCOSC.
#[derive(Debug, Clone, Copy)]
struct SavedCursor {
    cursor: Cursor,
    format: Format,
    charset: Charset,
    origin_mode: bool,
}

/// A VT100-family terminal model.
#[derive(Debug, Clone)]
pub struct Terminal {
    config: TerminalConfig,
    parser: Parser,
    framebuffer: Framebuffer,
    cursor: Cursor,
    /// Set when a print filled the last column with autowrap on.
    pending_wrap: bool,
    vertical_margin: Margin,
    horizontal_margin: Margin,
    modes: Modes,
    charset: Charset,
    format: Format,
    hyperlink: Option<Osc8>,
    hyperlink_id: HyperlinkId,
    hyperlinks: HyperlinkRegistry,
    title: String,
    icon: String,
    osc: OscBuffer,
    saved: Option<SavedCursor>,
    tab_stops: Vec<bool>,
    last_printed: Option<char>,
    /// Scratch buffer reused by `feed`.
    actions: Vec<Action>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::build(TerminalConfig::default())
    }
}

impl Terminal {
    /// Create a `rows × cols` terminal with default bounds. Zero dimensions
    /// are raised to one.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self::build(TerminalConfig::new(rows.max(1), cols.max(1)))
    }

    /// Create a terminal from a validated config.
    pub fn with_config(config: TerminalConfig) -> Result<Self, Vec<ConfigError>> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TerminalConfig) -> Self {
        let framebuffer = Framebuffer::new(config.rows, config.cols);
        let cols = framebuffer.cols();
        Self {
            config,
            parser: Parser::new(),
            framebuffer,
            cursor: Cursor::default(),
            pending_wrap: false,
            vertical_margin: Margin::unset(),
            horizontal_margin: Margin::unset(),
            modes: Modes::new(),
            charset: Charset::default(),
            format: Format::default(),
            hyperlink: None,
            hyperlink_id: 0,
            hyperlinks: HyperlinkRegistry::new(),
            title: String::new(),
            icon: String::new(),
            osc: OscBuffer::new(config.max_osc_len),
            saved: None,
            tab_stops: default_tab_stops(cols),
            last_printed: None,
            actions: Vec::new(),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.framebuffer.rows()
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.framebuffer.cols()
    }

    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Glyph at `(row, col)`.
    #[must_use]
    pub fn glyph(&self, row: u16, col: u16) -> Option<&Glyph> {
        self.framebuffer.glyph(row, col)
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn pending_wrap(&self) -> bool {
        self.pending_wrap
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn modes(&self) -> &Modes {
        &self.modes
    }

    #[must_use]
    pub fn vertical_margin(&self) -> Margin {
        self.vertical_margin
    }

    #[must_use]
    pub fn horizontal_margin(&self) -> Margin {
        self.horizontal_margin
    }

    #[must_use]
    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Format applied to the next printed glyph.
    #[must_use]
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// The open OSC 8 hyperlink, if any.
    #[must_use]
    pub fn hyperlink(&self) -> Option<&Osc8> {
        self.hyperlink.as_ref()
    }

    /// URI behind a glyph's hyperlink id.
    #[must_use]
    pub fn hyperlink_uri(&self, id: HyperlinkId) -> Option<&str> {
        self.hyperlinks.get(id)
    }

    #[must_use]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Move the cursor directly, clamped to the screen.
    pub fn set_cursor(&mut self, row: u16, col: u16) {
        self.move_to(row, col);
    }

    /// Sequence that re-creates the margins, set modes, current format, open
    /// hyperlink and cursor position on a fresh terminal.
    #[must_use]
    pub fn replay_string(&self) -> String {
        let mut out = String::new();
        if self.vertical_margin.is_set() {
            out.push_str(&self.vertical_margin.ansi_string('r'));
        }
        for mode in self.modes.iter().filter(|m| m.state == ModeState::Set) {
            out.push_str(&mode.ansi_string());
        }
        // DECSLRM is only recognised once DECLRMM is on.
        if self.horizontal_margin.is_set() {
            out.push_str(&self.horizontal_margin.ansi_string('s'));
        }
        out.push_str(&self.format.ansi_string());
        if let Some(link) = &self.hyperlink {
            out.push_str(&link.ansi_string());
        }
        let cursor = if self.origin_mode() {
            let (top, _) = self.row_bounds();
            let (left, _) = self.col_bounds();
            Cursor::new(
                self.cursor.row.saturating_sub(top),
                self.cursor.col.saturating_sub(left),
            )
        } else {
            self.cursor
        };
        out.push_str(&cursor.ansi_string());
        out
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Parse `bytes` and apply every resulting action in order.
    pub fn feed(&mut self, bytes: &[u8]) {
        let mut actions = std::mem::take(&mut self.actions);
        for &b in bytes {
            actions.clear();
            self.parser.advance_into(b, &mut actions);
            for action in &actions {
                self.dispatch(action);
            }
        }
        actions.clear();
        self.actions = actions;
    }

    /// Apply one parser action.
    pub fn dispatch(&mut self, action: &Action) {
        match action {
            Action::Print(ch) => self.print(*ch),
            Action::Execute(b) => self.execute(*b),
            Action::Collect(_) | Action::Param(_) | Action::Clear => {}
            Action::CsiDispatch(d) => self.csi_dispatch(d),
            Action::EscDispatch(d) => self.esc_dispatch(d),
            Action::Hook(d) => debug!(
                final_byte = %char::from(d.final_byte),
                params = ?d.params.as_slice(),
                "DCS not supported"
            ),
            Action::Put(_) => {}
            Action::Unhook => trace!("DCS end"),
            Action::OscStart => self.osc.clear(),
            Action::OscPut(ch) => self.osc.push(*ch),
            Action::OscEnd => self.osc_end(),
            Action::Error(err) => debug!(%err, "parse error"),
        }
    }

    // ── Geometry helpers ────────────────────────────────────────────

    fn origin_mode(&self) -> bool {
        self.modes.is_set(modes::DECOM, true)
    }

    fn autowrap(&self) -> bool {
        self.modes.is_set(modes::DECAWM, true)
    }

    /// Scroll region rows.
    fn row_bounds(&self) -> (u16, u16) {
        self.vertical_margin.bounds(self.rows())
    }

    fn col_bounds(&self) -> (u16, u16) {
        self.horizontal_margin.bounds(self.cols())
    }

    /// Vertical limits for relative motion: the margin when the cursor is
    /// inside it, otherwise the screen.
    fn motion_row_bounds(&self) -> (u16, u16) {
        if self.vertical_margin.is_set() && self.vertical_margin.contains(self.cursor.row) {
            self.row_bounds()
        } else {
            (0, self.rows() - 1)
        }
    }

    fn motion_col_bounds(&self) -> (u16, u16) {
        if self.horizontal_margin.is_set() && self.horizontal_margin.contains(self.cursor.col) {
            self.col_bounds()
        } else {
            (0, self.cols() - 1)
        }
    }

    fn move_to(&mut self, row: u16, col: u16) {
        self.cursor = Cursor::new(row, col).clamped(self.rows(), self.cols());
        self.pending_wrap = false;
    }

    /// Absolute row addressing, relative to the margin under origin mode.
    fn absolute_row(&self, row: u16) -> u16 {
        if self.origin_mode() {
            let (top, bottom) = self.row_bounds();
            top.saturating_add(row).min(bottom)
        } else {
            row
        }
    }

    fn absolute_col(&self, col: u16) -> u16 {
        if self.origin_mode() {
            let (left, right) = self.col_bounds();
            left.saturating_add(col).min(right)
        } else {
            col
        }
    }

    fn home(&mut self) {
        let (row, col) = (self.absolute_row(0), self.absolute_col(0));
        self.move_to(row, col);
    }

    // ── Print / controls ────────────────────────────────────────────

    fn print(&mut self, ch: char) {
        let rune = self.charset.rune_for(ch);
        // A wrap armed under DECAWM is dropped if autowrap was turned off since.
        if std::mem::take(&mut self.pending_wrap) && self.autowrap() {
            let (left, _) = self.motion_col_bounds();
            self.cursor.col = left;
            self.index_down();
        }

        let Cursor { row, col } = self.cursor;
        let (_, right) = self.motion_col_bounds();
        if self.modes.is_set(modes::IRM, false) {
            self.framebuffer.insert_blanks(row, col, right, 1, self.format);
        }
        let glyph = Glyph::new(rune, self.format).with_hyperlink(self.hyperlink_id);
        self.framebuffer.set_glyph(row, col, glyph);
        self.last_printed = Some(ch);

        if col < right {
            self.cursor.col = col + 1;
        } else if self.autowrap() {
            self.pending_wrap = true;
        }
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            0x07 => {}
            0x08 => {
                let col = self.cursor.col.saturating_sub(1);
                self.move_to(self.cursor.row, col);
            }
            0x09 => self.tab_forward(1),
            0x0A..=0x0C => {
                self.index_down();
                if self.modes.is_set(modes::LNM, false) {
                    self.carriage_return();
                }
            }
            0x0D => self.carriage_return(),
            0x0E => self.charset.shift_out(),
            0x0F => self.charset.shift_in(),
            0x84 => self.index_down(),
            0x85 => {
                self.index_down();
                self.carriage_return();
            }
            0x88 => self.set_tab_stop(),
            0x8D => self.reverse_index(),
            other => debug!(byte = other, "unhandled control"),
        }
    }

    fn carriage_return(&mut self) {
        let (left, _) = self.col_bounds();
        let col = if self.horizontal_margin.is_set() && self.cursor.col >= left {
            left
        } else {
            0
        };
        self.move_to(self.cursor.row, col);
    }

    /// IND / LF: down one row, scrolling the region at its bottom edge.
    fn index_down(&mut self) {
        let (top, bottom) = self.row_bounds();
        self.pending_wrap = false;
        if self.cursor.row == bottom {
            self.framebuffer.scroll_up(top, bottom, 1, self.format);
        } else if self.cursor.row < self.rows() - 1 {
            self.cursor.row += 1;
        }
    }

    /// RI: up one row, scrolling the region down at its top edge.
    fn reverse_index(&mut self) {
        let (top, bottom) = self.row_bounds();
        self.pending_wrap = false;
        if self.cursor.row == top {
            self.framebuffer.scroll_down(top, bottom, 1, self.format);
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
        }
    }

    // ── Tab stops ───────────────────────────────────────────────────

    fn set_tab_stop(&mut self) {
        if let Some(stop) = self.tab_stops.get_mut(usize::from(self.cursor.col)) {
            *stop = true;
        }
    }

    fn tab_forward(&mut self, count: u16) {
        let (_, right) = self.motion_col_bounds();
        let mut col = self.cursor.col;
        for _ in 0..count {
            if col >= right {
                break;
            }
            col = (col + 1..=right)
                .find(|&c| self.tab_stops[usize::from(c)])
                .unwrap_or(right);
        }
        self.move_to(self.cursor.row, col);
    }

    fn tab_backward(&mut self, count: u16) {
        let (left, _) = self.motion_col_bounds();
        let mut col = self.cursor.col;
        for _ in 0..count {
            if col <= left {
                break;
            }
            col = (left..col)
                .rev()
                .find(|&c| self.tab_stops[usize::from(c)])
                .unwrap_or(left);
        }
        self.move_to(self.cursor.row, col);
    }

    // ── CSI ─────────────────────────────────────────────────────────

    fn csi_dispatch(&mut self, d: &Dispatch) {
        trace!(
            final_byte = %char::from(d.final_byte),
            params = ?d.params.as_slice(),
            intermediates = ?d.intermediates.as_slice(),
            "csi"
        );

        if d.is_private() {
            match d.final_byte {
                b'h' => self.set_modes(d, true, ModeState::Set),
                b'l' => self.set_modes(d, true, ModeState::Reset),
                _ => debug!(
                    final_byte = %char::from(d.final_byte),
                    "unimplemented private CSI"
                ),
            }
            return;
        }
        if !d.intermediates.is_empty() {
            debug!(
                final_byte = %char::from(d.final_byte),
                intermediates = ?d.intermediates.as_slice(),
                "unimplemented CSI with intermediates"
            );
            return;
        }

        let p = &d.params;
        let n = p.item_default_one_if_zero(0, 1);
        let Cursor { row, col } = self.cursor;

        match d.final_byte {
            b'A' => {
                let (top, _) = self.motion_row_bounds();
                self.move_to(row.saturating_sub(n).max(top), col);
            }
            b'B' => {
                let (_, bottom) = self.motion_row_bounds();
                self.move_to(row.saturating_add(n).min(bottom), col);
            }
            b'C' => {
                let (_, right) = self.motion_col_bounds();
                self.move_to(row, col.saturating_add(n).min(right));
            }
            b'D' => {
                let (left, _) = self.motion_col_bounds();
                self.move_to(row, col.saturating_sub(n).max(left));
            }
            b'E' => {
                let (_, bottom) = self.motion_row_bounds();
                self.move_to(row.saturating_add(n).min(bottom), 0);
            }
            b'F' => {
                let (top, _) = self.motion_row_bounds();
                self.move_to(row.saturating_sub(n).max(top), 0);
            }
            b'G' | b'`' => {
                let col = self.absolute_col(n - 1);
                self.move_to(row, col);
            }
            b'H' | b'f' => {
                let r = self.absolute_row(n - 1);
                let c = self.absolute_col(p.item_default_one_if_zero(1, 1) - 1);
                self.move_to(r, c);
            }
            b'd' => {
                let r = self.absolute_row(n - 1);
                self.move_to(r, col);
            }
            b'a' => self.move_to(row, col.saturating_add(n)),
            b'e' => self.move_to(row.saturating_add(n), col),
            b'J' => self.erase_display(p.item(0, 0)),
            b'K' => self.erase_line(p.item(0, 0)),
            b'm' => self.format = self.format.apply_parameters(p),
            b'h' => self.set_modes(d, false, ModeState::Set),
            b'l' => self.set_modes(d, false, ModeState::Reset),
            b'r' => self.set_vertical_margin(d),
            b's' => {
                if self.modes.is_set(modes::DECLRMM, true) {
                    self.set_horizontal_margin(d);
                } else {
                    self.save_cursor();
                }
            }
            b'u' => self.restore_cursor(),
            b'@' => {
                let (_, right) = self.motion_col_bounds();
                self.framebuffer.insert_blanks(row, col, right, n, self.format);
                self.pending_wrap = false;
            }
            b'P' => {
                let (_, right) = self.motion_col_bounds();
                self.framebuffer.delete_cells(row, col, right, n, self.format);
                self.pending_wrap = false;
            }
            b'X' => {
                let end = col.saturating_add(n - 1);
                self.framebuffer.reset_cells(row, col, end, self.format);
                self.pending_wrap = false;
            }
            b'L' => {
                let (top, bottom) = self.row_bounds();
                if (top..=bottom).contains(&row) {
                    self.framebuffer.scroll_down(row, bottom, n, self.format);
                    self.move_to(row, 0);
                }
            }
            b'M' => {
                let (top, bottom) = self.row_bounds();
                if (top..=bottom).contains(&row) {
                    self.framebuffer.scroll_up(row, bottom, n, self.format);
                    self.move_to(row, 0);
                }
            }
            b'S' => {
                let (top, bottom) = self.row_bounds();
                self.framebuffer.scroll_up(top, bottom, n, self.format);
            }
            b'T' => {
                let (top, bottom) = self.row_bounds();
                self.framebuffer.scroll_down(top, bottom, n, self.format);
            }
            b'I' => self.tab_forward(n),
            b'Z' => self.tab_backward(n),
            b'g' => match p.item(0, 0) {
                0 => {
                    if let Some(stop) = self.tab_stops.get_mut(usize::from(col)) {
                        *stop = false;
                    }
                }
                3 => self.tab_stops.fill(false),
                other => debug!(mode = other, "unknown TBC mode"),
            },
            b'b' => {
                if let Some(ch) = self.last_printed {
                    let limit = usize::from(self.rows()) * usize::from(self.cols());
                    for _ in 0..usize::from(n).min(limit) {
                        self.print(ch);
                    }
                }
            }
            b'c' | b'n' => debug!(
                final_byte = %char::from(d.final_byte),
                "report requests are not answered"
            ),
            other => debug!(
                final_byte = %char::from(other),
                params = ?p.as_slice(),
                "unimplemented CSI"
            ),
        }
    }

    /// ED. Rows outside the cursor line go through the row reset; the cursor
    /// line itself is handled by the matching EL step.
    fn erase_display(&mut self, mode: u16) {
        let Cursor { row, .. } = self.cursor;
        let last = self.rows() - 1;
        match mode {
            0 => {
                self.erase_line(0);
                if row < last {
                    self.framebuffer.reset_rows(row + 1, last, self.format);
                }
            }
            1 => {
                if row > 0 {
                    self.framebuffer.reset_rows(0, row - 1, self.format);
                }
                self.erase_line(1);
            }
            2 => {
                self.framebuffer.reset_all(self.format);
                self.pending_wrap = false;
            }
            other => debug!(mode = other, "unimplemented ED mode"),
        }
    }

    fn erase_line(&mut self, mode: u16) {
        let Cursor { row, col } = self.cursor;
        let last = self.cols() - 1;
        match mode {
            0 => self.framebuffer.reset_cells(row, col, last, self.format),
            1 => self.framebuffer.reset_cells(row, 0, col, self.format),
            2 => self.framebuffer.reset_cells(row, 0, last, self.format),
            other => {
                debug!(mode = other, "unimplemented EL mode");
                return;
            }
        }
        self.pending_wrap = false;
    }

    fn set_modes(&mut self, d: &Dispatch, private: bool, state: ModeState) {
        for code in d.params.iter() {
            if !self.modes.set(code, private, state) {
                continue;
            }
            trace!(code, private, ?state, "mode");
            if private {
                match code {
                    modes::DECOM => self.home(),
                    modes::DECLRMM if state == ModeState::Reset => {
                        self.horizontal_margin = Margin::unset();
                    }
                    _ => {}
                }
            }
        }
    }

    fn set_vertical_margin(&mut self, d: &Dispatch) {
        self.vertical_margin = if d.params.is_empty() {
            Margin::unset()
        } else {
            let rows = self.rows();
            let top = d.params.item_default_one_if_zero(0, 1);
            let bottom = match d.params.item(1, 0) {
                0 => rows,
                v => v.min(rows),
            };
            Margin::new(top - 1, bottom - 1)
        };
        self.home();
    }

    fn set_horizontal_margin(&mut self, d: &Dispatch) {
        self.horizontal_margin = if d.params.is_empty() {
            Margin::unset()
        } else {
            let cols = self.cols();
            let left = d.params.item_default_one_if_zero(0, 1);
            let right = match d.params.item(1, 0) {
                0 => cols,
                v => v.min(cols),
            };
            Margin::new(left - 1, right - 1)
        };
        self.home();
    }

    // ── ESC ─────────────────────────────────────────────────────────

    fn esc_dispatch(&mut self, d: &Dispatch) {
        trace!(
            final_byte = %char::from(d.final_byte),
            intermediates = ?d.intermediates.as_slice(),
            "esc"
        );
        match (d.intermediate(), d.final_byte) {
            (Some(bracket @ (b'(' | b')')), designator) => self.charset.set_cs(bracket, designator),
            (Some(b'#'), b'8') => self.screen_alignment(),
            (None, b'7') => self.save_cursor(),
            (None, b'8') => self.restore_cursor(),
            (None, b'D') => self.index_down(),
            (None, b'E') => {
                self.index_down();
                self.carriage_return();
            }
            (None, b'H') => self.set_tab_stop(),
            (None, b'M') => self.reverse_index(),
            (None, b'c') => self.full_reset(),
            // ST closing an OSC/DCS/APC string.
            (None, b'\\') => {}
            (intermediate, final_byte) => debug!(
                final_byte = %char::from(final_byte),
                intermediate = ?intermediate.map(char::from),
                "unimplemented ESC"
            ),
        }
    }

    /// DECALN: fill with `E`, drop margins, home.
    fn screen_alignment(&mut self) {
        self.framebuffer.fill('E', Format::default());
        self.vertical_margin = Margin::unset();
        self.horizontal_margin = Margin::unset();
        self.move_to(0, 0);
    }

    fn save_cursor(&mut self) {
        self.saved = Some(SavedCursor {
            cursor: self.cursor,
            format: self.format,
            charset: self.charset,
            origin_mode: self.origin_mode(),
        });
    }

    fn restore_cursor(&mut self) {
        let saved = self.saved.unwrap_or(SavedCursor {
            cursor: Cursor::default(),
            format: Format::default(),
            charset: Charset::default(),
            origin_mode: false,
        });
        self.format = saved.format;
        self.charset = saved.charset;
        let state = if saved.origin_mode {
            ModeState::Set
        } else {
            ModeState::Reset
        };
        self.modes.set(modes::DECOM, true, state);
        self.move_to(saved.cursor.row, saved.cursor.col);
    }

    /// RIS: everything back to power-on state except the configuration.
    fn full_reset(&mut self) {
        *self = Self::build(self.config);
    }

    // ── OSC ─────────────────────────────────────────────────────────

    fn osc_end(&mut self) {
        if self.osc.overflowed() {
            debug!("dispatching truncated OSC string");
        }
        let data = self.osc.take();
        match parse_osc(&data) {
            Some(OscCommand::TitleAndIcon(text)) => {
                self.title = text.to_string();
                self.icon = text.to_string();
            }
            Some(OscCommand::Icon(text)) => self.icon = text.to_string(),
            Some(OscCommand::Title(text)) => self.title = text.to_string(),
            Some(OscCommand::Hyperlink(link)) => self.set_hyperlink(link),
            Some(OscCommand::Unsupported(code)) => debug!(code, "unsupported OSC"),
            None => debug!(len = data.len(), "malformed OSC string"),
        }
    }

    fn set_hyperlink(&mut self, link: Osc8) {
        if link.is_cancel() {
            self.hyperlink = None;
            self.hyperlink_id = 0;
            return;
        }
        let mut id = self.hyperlinks.intern(link.uri());
        if id == 0 && !link.uri().is_empty() {
            self.collect_hyperlinks();
            id = self.hyperlinks.intern(link.uri());
        }
        self.hyperlink_id = id;
        self.hyperlink = Some(link);
    }

    /// Release registry ids that no glyph and no open link refer to.
    fn collect_hyperlinks(&mut self) {
        let mut live = vec![false; usize::from(HyperlinkId::MAX) + 1];
        live[usize::from(self.hyperlink_id)] = true;
        for glyph in self.framebuffer.glyphs() {
            live[usize::from(glyph.hyperlink)] = true;
        }
        let released = self.hyperlinks.retain(|id| live[usize::from(id)]);
        debug!(released, live = self.hyperlinks.len(), "collected hyperlink ids");
    }
}

fn default_tab_stops(cols: u16) -> Vec<bool> {
    (0..cols).map(|c| c > 0 && c % TAB_WIDTH == 0).collect()
}
