//! VT/ANSI parser.
//!
//! A table-driven implementation of the DEC ANSI parser state machine. Each
//! input byte is first decoded into a rune (UTF-8 aware), then looked up in a
//! static `[state][code]` transition table that yields an operation and an
//! optional next state. On a state change the exit operation of the old state,
//! the transition operation and the entry operation of the new state run in
//! that order; each may emit an [`Action`].
//!
//! The parser never touches terminal state. It only collects parameters and
//! intermediate bytes and reports what it saw; interpretation is the
//! terminal's job.

use std::fmt;

use smallvec::SmallVec;

use crate::params::Params;

/// Maximum number of intermediate bytes kept for a sequence.
pub const MAX_INTERMEDIATES: usize = 2;

/// Parser states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Ground,
    Escape,
    EscapeIntermediate,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    CsiIgnore,
    DcsEntry,
    DcsParam,
    DcsIntermediate,
    DcsPassthrough,
    DcsIgnore,
    OscString,
    SosPmApcString,
}

const STATE_COUNT: usize = 14;

/// A completed control sequence: parameters, intermediates and final byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub params: Params,
    pub intermediates: SmallVec<[u8; MAX_INTERMEDIATES]>,
    pub final_byte: u8,
}

impl Dispatch {
    /// Whether the sequence carried the DEC private marker `?`.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.intermediates.first() == Some(&b'?')
    }

    /// First intermediate byte, if any.
    #[must_use]
    pub fn intermediate(&self) -> Option<u8> {
        self.intermediates.first().copied()
    }
}

/// Decoding failure reported through [`Action::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The byte cannot start or continue a valid UTF-8 sequence.
    InvalidUtf8(u8),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUtf8(b) => write!(f, "invalid UTF-8 byte 0x{b:02x}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parser output actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Printable rune.
    Print(char),
    /// C0 or C1 control byte.
    Execute(u8),
    /// Intermediate byte appended to the sequence.
    Collect(u8),
    /// Parameter byte (digit or `;`) accumulated into the parameters.
    Param(u8),
    /// Parameters and intermediates were reset.
    Clear,
    /// CSI final byte reached.
    CsiDispatch(Dispatch),
    /// ESC final byte reached.
    EscDispatch(Dispatch),
    /// DCS final byte reached; passthrough begins.
    Hook(Dispatch),
    /// DCS passthrough data.
    Put(char),
    /// DCS passthrough ended.
    Unhook,
    /// OSC string started.
    OscStart,
    /// OSC string data.
    OscPut(char),
    /// OSC string ended.
    OscEnd,
    /// Input that could not be decoded. The parser has already recovered.
    Error(ParseError),
}

/// Table operations. `Ignore` never produces an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Ignore,
    Print,
    Execute,
    Collect,
    Param,
    Clear,
    CsiDispatch,
    EscDispatch,
    Hook,
    Put,
    Unhook,
    OscStart,
    OscPut,
    OscEnd,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    op: Op,
    /// `None` keeps the current state without running entry/exit operations.
    next: Option<State>,
}

type Table = [[Option<Transition>; 256]; STATE_COUNT];

static TRANSITIONS: Table = build_table();

const fn set(table: &mut Table, state: State, lo: u8, hi: u8, op: Op, next: Option<State>) {
    let mut b = lo as usize;
    while b <= hi as usize {
        table[state as usize][b] = Some(Transition { op, next });
        b += 1;
    }
}

/// C0 controls other than CAN, SUB and ESC (those are handled "anywhere").
const fn set_c0(table: &mut Table, state: State, op: Op) {
    set(table, state, 0x00, 0x17, op, None);
    set(table, state, 0x19, 0x19, op, None);
    set(table, state, 0x1C, 0x1F, op, None);
}

const fn build_table() -> Table {
    use State::*;

    let mut t: Table = [[None; 256]; STATE_COUNT];

    set_c0(&mut t, Ground, Op::Execute);
    set(&mut t, Ground, 0x20, 0x7E, Op::Print, None);
    set(&mut t, Ground, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, Ground, 0xA0, 0xFF, Op::Print, None);

    set_c0(&mut t, Escape, Op::Execute);
    set(&mut t, Escape, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, Escape, 0x20, 0x2F, Op::Collect, Some(EscapeIntermediate));
    set(&mut t, Escape, 0x30, 0x4F, Op::EscDispatch, Some(Ground));
    set(&mut t, Escape, 0x51, 0x57, Op::EscDispatch, Some(Ground));
    set(&mut t, Escape, 0x59, 0x5A, Op::EscDispatch, Some(Ground));
    set(&mut t, Escape, 0x5C, 0x5C, Op::EscDispatch, Some(Ground));
    set(&mut t, Escape, 0x60, 0x7E, Op::EscDispatch, Some(Ground));
    set(&mut t, Escape, 0x50, 0x50, Op::Ignore, Some(DcsEntry));
    set(&mut t, Escape, 0x5B, 0x5B, Op::Ignore, Some(CsiEntry));
    set(&mut t, Escape, 0x5D, 0x5D, Op::Ignore, Some(OscString));
    set(&mut t, Escape, 0x58, 0x58, Op::Ignore, Some(SosPmApcString));
    set(&mut t, Escape, 0x5E, 0x5F, Op::Ignore, Some(SosPmApcString));

    set_c0(&mut t, EscapeIntermediate, Op::Execute);
    set(&mut t, EscapeIntermediate, 0x20, 0x2F, Op::Collect, None);
    set(&mut t, EscapeIntermediate, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, EscapeIntermediate, 0x30, 0x7E, Op::EscDispatch, Some(Ground));

    set_c0(&mut t, CsiEntry, Op::Execute);
    set(&mut t, CsiEntry, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, CsiEntry, 0x20, 0x2F, Op::Collect, Some(CsiIntermediate));
    set(&mut t, CsiEntry, 0x3A, 0x3A, Op::Ignore, Some(CsiIgnore));
    set(&mut t, CsiEntry, 0x30, 0x39, Op::Param, Some(CsiParam));
    set(&mut t, CsiEntry, 0x3B, 0x3B, Op::Param, Some(CsiParam));
    set(&mut t, CsiEntry, 0x3C, 0x3F, Op::Collect, Some(CsiParam));
    set(&mut t, CsiEntry, 0x40, 0x7E, Op::CsiDispatch, Some(Ground));

    set_c0(&mut t, CsiParam, Op::Execute);
    set(&mut t, CsiParam, 0x30, 0x39, Op::Param, None);
    set(&mut t, CsiParam, 0x3B, 0x3B, Op::Param, None);
    set(&mut t, CsiParam, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, CsiParam, 0x3A, 0x3A, Op::Ignore, Some(CsiIgnore));
    set(&mut t, CsiParam, 0x3C, 0x3F, Op::Ignore, Some(CsiIgnore));
    set(&mut t, CsiParam, 0x20, 0x2F, Op::Collect, Some(CsiIntermediate));
    set(&mut t, CsiParam, 0x40, 0x7E, Op::CsiDispatch, Some(Ground));

    set_c0(&mut t, CsiIntermediate, Op::Execute);
    set(&mut t, CsiIntermediate, 0x20, 0x2F, Op::Collect, None);
    set(&mut t, CsiIntermediate, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, CsiIntermediate, 0x30, 0x3F, Op::Ignore, Some(CsiIgnore));
    set(&mut t, CsiIntermediate, 0x40, 0x7E, Op::CsiDispatch, Some(Ground));

    set_c0(&mut t, CsiIgnore, Op::Execute);
    set(&mut t, CsiIgnore, 0x20, 0x3F, Op::Ignore, None);
    set(&mut t, CsiIgnore, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, CsiIgnore, 0x40, 0x7E, Op::Ignore, Some(Ground));

    set_c0(&mut t, DcsEntry, Op::Ignore);
    set(&mut t, DcsEntry, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, DcsEntry, 0x20, 0x2F, Op::Collect, Some(DcsIntermediate));
    set(&mut t, DcsEntry, 0x3A, 0x3A, Op::Ignore, Some(DcsIgnore));
    set(&mut t, DcsEntry, 0x30, 0x39, Op::Param, Some(DcsParam));
    set(&mut t, DcsEntry, 0x3B, 0x3B, Op::Param, Some(DcsParam));
    set(&mut t, DcsEntry, 0x3C, 0x3F, Op::Collect, Some(DcsParam));
    set(&mut t, DcsEntry, 0x40, 0x7E, Op::Ignore, Some(DcsPassthrough));

    set_c0(&mut t, DcsParam, Op::Ignore);
    set(&mut t, DcsParam, 0x30, 0x39, Op::Param, None);
    set(&mut t, DcsParam, 0x3B, 0x3B, Op::Param, None);
    set(&mut t, DcsParam, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, DcsParam, 0x3A, 0x3A, Op::Ignore, Some(DcsIgnore));
    set(&mut t, DcsParam, 0x3C, 0x3F, Op::Ignore, Some(DcsIgnore));
    set(&mut t, DcsParam, 0x20, 0x2F, Op::Collect, Some(DcsIntermediate));
    set(&mut t, DcsParam, 0x40, 0x7E, Op::Ignore, Some(DcsPassthrough));

    set_c0(&mut t, DcsIntermediate, Op::Ignore);
    set(&mut t, DcsIntermediate, 0x20, 0x2F, Op::Collect, None);
    set(&mut t, DcsIntermediate, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, DcsIntermediate, 0x30, 0x3F, Op::Ignore, Some(DcsIgnore));
    set(&mut t, DcsIntermediate, 0x40, 0x7E, Op::Ignore, Some(DcsPassthrough));

    set_c0(&mut t, DcsPassthrough, Op::Put);
    set(&mut t, DcsPassthrough, 0x20, 0x7E, Op::Put, None);
    set(&mut t, DcsPassthrough, 0x7F, 0x7F, Op::Ignore, None);
    set(&mut t, DcsPassthrough, 0xA0, 0xFF, Op::Put, None);

    set_c0(&mut t, DcsIgnore, Op::Ignore);
    set(&mut t, DcsIgnore, 0x20, 0x7F, Op::Ignore, None);

    set_c0(&mut t, OscString, Op::Ignore);
    // xterm accepts BEL as an OSC terminator.
    set(&mut t, OscString, 0x07, 0x07, Op::Ignore, Some(Ground));
    set(&mut t, OscString, 0x20, 0x7F, Op::OscPut, None);

    set_c0(&mut t, SosPmApcString, Op::Ignore);
    set(&mut t, SosPmApcString, 0x20, 0x7F, Op::Ignore, None);

    // Transitions valid from any state.
    let mut s = 0;
    while s < STATE_COUNT {
        let state = STATES[s];
        set(&mut t, state, 0x18, 0x18, Op::Execute, Some(Ground));
        set(&mut t, state, 0x1A, 0x1A, Op::Execute, Some(Ground));
        set(&mut t, state, 0x1B, 0x1B, Op::Ignore, Some(Escape));
        set(&mut t, state, 0x80, 0x8F, Op::Execute, Some(Ground));
        set(&mut t, state, 0x91, 0x97, Op::Execute, Some(Ground));
        set(&mut t, state, 0x99, 0x9A, Op::Execute, Some(Ground));
        set(&mut t, state, 0x9C, 0x9C, Op::Ignore, Some(Ground));
        set(&mut t, state, 0x90, 0x90, Op::Ignore, Some(DcsEntry));
        set(&mut t, state, 0x9B, 0x9B, Op::Ignore, Some(CsiEntry));
        set(&mut t, state, 0x9D, 0x9D, Op::Ignore, Some(OscString));
        set(&mut t, state, 0x98, 0x98, Op::Ignore, Some(SosPmApcString));
        set(&mut t, state, 0x9E, 0x9F, Op::Ignore, Some(SosPmApcString));
        s += 1;
    }

    t
}

const STATES: [State; STATE_COUNT] = [
    State::Ground,
    State::Escape,
    State::EscapeIntermediate,
    State::CsiEntry,
    State::CsiParam,
    State::CsiIntermediate,
    State::CsiIgnore,
    State::DcsEntry,
    State::DcsParam,
    State::DcsIntermediate,
    State::DcsPassthrough,
    State::DcsIgnore,
    State::OscString,
    State::SosPmApcString,
];

const fn entry_op(state: State) -> Op {
    match state {
        State::Escape | State::CsiEntry | State::DcsEntry => Op::Clear,
        State::OscString => Op::OscStart,
        State::DcsPassthrough => Op::Hook,
        _ => Op::Ignore,
    }
}

const fn exit_op(state: State) -> Op {
    match state {
        State::OscString => Op::OscEnd,
        State::DcsPassthrough => Op::Unhook,
        _ => Op::Ignore,
    }
}

/// VT/ANSI parser state.
#[derive(Debug, Clone)]
pub struct Parser {
    state: State,
    params: Params,
    /// Set once a `;` arrives with the parameter list already full.
    params_overflow: bool,
    intermediates: SmallVec<[u8; MAX_INTERMEDIATES]>,
    intermediates_overflow: bool,
    /// Accumulator for multi-byte UTF-8 rune assembly.
    utf8_buf: [u8; 4],
    utf8_len: u8,
    utf8_remaining: u8,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a new parser in ground state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            params: Params::new(),
            params_overflow: false,
            intermediates: SmallVec::new(),
            intermediates_overflow: false,
            utf8_buf: [0; 4],
            utf8_len: 0,
            utf8_remaining: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Return to ground state, dropping any partial sequence.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feed a chunk of bytes and return parsed actions in emission order.
    #[must_use]
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Action> {
        let mut out = Vec::new();
        for &b in bytes {
            self.advance_into(b, &mut out);
        }
        out
    }

    /// Advance the parser by one byte.
    #[must_use]
    pub fn advance(&mut self, byte: u8) -> Vec<Action> {
        let mut out = Vec::new();
        self.advance_into(byte, &mut out);
        out
    }

    /// Advance by one byte, appending any actions to `out`.
    pub fn advance_into(&mut self, byte: u8, out: &mut Vec<Action>) {
        if self.utf8_remaining > 0 {
            if (0x80..=0xBF).contains(&byte) {
                self.utf8_buf[self.utf8_len as usize] = byte;
                self.utf8_len += 1;
                self.utf8_remaining -= 1;
                if self.utf8_remaining == 0 {
                    let len = self.utf8_len as usize;
                    let lead = self.utf8_buf[0];
                    let decoded = core::str::from_utf8(&self.utf8_buf[..len])
                        .ok()
                        .and_then(|s| s.chars().next());
                    self.utf8_len = 0;
                    match decoded {
                        Some(ch) => self.step(ch, out),
                        None => out.push(Action::Error(ParseError::InvalidUtf8(lead))),
                    }
                }
                return;
            }
            // Truncated sequence: report it and reprocess this byte.
            out.push(Action::Error(ParseError::InvalidUtf8(self.utf8_buf[0])));
            self.utf8_len = 0;
            self.utf8_remaining = 0;
        }

        match byte {
            0x00..=0x7F => self.step(char::from(byte), out),
            // A lone C1 byte is an 8-bit control.
            0x80..=0x9F => self.step(char::from(byte), out),
            0xC2..=0xDF => self.begin_utf8(byte, 1),
            0xE0..=0xEF => self.begin_utf8(byte, 2),
            0xF0..=0xF4 => self.begin_utf8(byte, 3),
            _ => out.push(Action::Error(ParseError::InvalidUtf8(byte))),
        }
    }

    fn begin_utf8(&mut self, lead: u8, continuation: u8) {
        self.utf8_buf[0] = lead;
        self.utf8_len = 1;
        self.utf8_remaining = continuation;
    }

    /// Run one decoded rune through the transition table.
    fn step(&mut self, ch: char, out: &mut Vec<Action>) {
        let code = (ch as u32).min(0xFF) as usize;
        let transition = match TRANSITIONS[self.state as usize][code] {
            Some(t) => t,
            None => self.fallback(ch),
        };

        match transition.next {
            Some(next) => {
                self.run(exit_op(self.state), ch, out);
                self.run(transition.op, ch, out);
                self.state = next;
                self.run(entry_op(next), ch, out);
            }
            None => self.run(transition.op, ch, out),
        }
    }

    fn fallback(&self, ch: char) -> Transition {
        let op = match self.state {
            State::Ground => Op::Print,
            State::OscString => Op::OscPut,
            state => {
                tracing::debug!(?state, rune = ?ch, "no transition for input, ignoring");
                Op::Ignore
            }
        };
        Transition { op, next: None }
    }

    fn run(&mut self, op: Op, ch: char, out: &mut Vec<Action>) {
        match op {
            Op::Ignore => {}
            Op::Print => out.push(Action::Print(ch)),
            Op::Execute => out.push(Action::Execute(ascii_byte(ch))),
            Op::Collect => {
                let b = ascii_byte(ch);
                if self.intermediates.len() < MAX_INTERMEDIATES {
                    self.intermediates.push(b);
                } else {
                    self.intermediates_overflow = true;
                }
                out.push(Action::Collect(b));
            }
            Op::Param => {
                let b = ascii_byte(ch);
                self.param(b);
                out.push(Action::Param(b));
            }
            Op::Clear => {
                self.params.reset();
                self.params_overflow = false;
                self.intermediates.clear();
                self.intermediates_overflow = false;
                out.push(Action::Clear);
            }
            Op::CsiDispatch => {
                if let Some(d) = self.dispatch(ch) {
                    out.push(Action::CsiDispatch(d));
                }
            }
            Op::EscDispatch => {
                if let Some(d) = self.dispatch(ch) {
                    out.push(Action::EscDispatch(d));
                }
            }
            Op::Hook => {
                if let Some(d) = self.dispatch(ch) {
                    out.push(Action::Hook(d));
                }
            }
            Op::Put => out.push(Action::Put(ch)),
            Op::Unhook => out.push(Action::Unhook),
            Op::OscStart => out.push(Action::OscStart),
            Op::OscPut => out.push(Action::OscPut(ch)),
            Op::OscEnd => out.push(Action::OscEnd),
        }
    }

    fn param(&mut self, b: u8) {
        if self.params_overflow {
            return;
        }
        if b == b';' {
            if self.params.is_full() {
                self.params_overflow = true;
                return;
            }
            if self.params.is_empty() {
                self.params.add_item(0);
            }
            self.params.add_item(0);
            return;
        }
        let digit = u16::from(b - b'0');
        match self.params.last() {
            None => self.params.add_item(digit),
            Some(last) => self
                .params
                .alter_item(last.saturating_mul(10).saturating_add(digit)),
        }
    }

    fn dispatch(&self, ch: char) -> Option<Dispatch> {
        let final_byte = ascii_byte(ch);
        if self.intermediates_overflow {
            tracing::debug!(
                final_byte = %char::from(final_byte),
                intermediates = ?self.intermediates.as_slice(),
                "too many intermediates, dropping sequence"
            );
            return None;
        }
        Some(Dispatch {
            params: self.params.clone(),
            intermediates: self.intermediates.clone(),
            final_byte,
        })
    }
}

/// Table operations that carry a byte only ever fire for codes below 0xA0.
fn ascii_byte(ch: char) -> u8 {
    u8::try_from(u32::from(ch)).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strip bookkeeping actions so tests can focus on what the terminal sees.
    fn significant(actions: Vec<Action>) -> Vec<Action> {
        actions
            .into_iter()
            .filter(|a| !matches!(a, Action::Collect(_) | Action::Param(_) | Action::Clear))
            .collect()
    }

    fn csi(params: &[u16], intermediates: &[u8], final_byte: u8) -> Action {
        Action::CsiDispatch(Dispatch {
            params: Params::from_slice(params),
            intermediates: SmallVec::from_slice(intermediates),
            final_byte,
        })
    }

    fn esc(intermediates: &[u8], final_byte: u8) -> Action {
        Action::EscDispatch(Dispatch {
            params: Params::new(),
            intermediates: SmallVec::from_slice(intermediates),
            final_byte,
        })
    }

    // ── Ground ─────────────────────────────────────────────────────

    #[test]
    fn printable_ascii_emits_print() {
        let mut p = Parser::new();
        assert_eq!(p.feed(b"hi"), vec![Action::Print('h'), Action::Print('i')]);
    }

    #[test]
    fn c0_controls_execute() {
        let mut p = Parser::new();
        assert_eq!(
            p.feed(b"\x07\x08\t\r\n"),
            vec![
                Action::Execute(0x07),
                Action::Execute(0x08),
                Action::Execute(b'\t'),
                Action::Execute(b'\r'),
                Action::Execute(b'\n'),
            ]
        );
    }

    #[test]
    fn del_is_ignored_in_ground() {
        let mut p = Parser::new();
        assert!(p.feed(b"\x7f").is_empty());
    }

    // ── UTF-8 ──────────────────────────────────────────────────────

    #[test]
    fn utf8_runes_print() {
        let mut p = Parser::new();
        assert_eq!(
            p.feed("aé中🎉".as_bytes()),
            vec![
                Action::Print('a'),
                Action::Print('é'),
                Action::Print('中'),
                Action::Print('🎉'),
            ]
        );
    }

    #[test]
    fn utf8_split_across_feeds() {
        let mut p = Parser::new();
        assert!(p.feed(&[0xE4]).is_empty());
        assert!(p.feed(&[0xB8]).is_empty());
        assert_eq!(p.feed(&[0xAD]), vec![Action::Print('中')]);
    }

    #[test]
    fn truncated_utf8_reports_error_and_reprocesses() {
        let mut p = Parser::new();
        assert_eq!(
            p.feed(&[0xC3, b'a']),
            vec![Action::Error(ParseError::InvalidUtf8(0xC3)), Action::Print('a')]
        );
    }

    #[test]
    fn invalid_lead_bytes_report_errors() {
        let mut p = Parser::new();
        assert_eq!(
            p.feed(&[0xC0, 0xFF]),
            vec![
                Action::Error(ParseError::InvalidUtf8(0xC0)),
                Action::Error(ParseError::InvalidUtf8(0xFF)),
            ]
        );
    }

    #[test]
    fn surrogate_encoding_is_rejected() {
        let mut p = Parser::new();
        assert_eq!(
            p.feed(&[0xED, 0xA0, 0x80, b'x']),
            vec![Action::Error(ParseError::InvalidUtf8(0xED)), Action::Print('x')]
        );
    }

    #[test]
    fn non_ascii_rune_is_ignored_inside_csi() {
        let mut p = Parser::new();
        let actions = significant(p.feed("\x1b[3中m".as_bytes()));
        assert_eq!(actions, vec![csi(&[3], &[], b'm')]);
    }

    // ── Parameters ─────────────────────────────────────────────────

    #[test]
    fn csi_parameters_accumulate() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b[12;345H"));
        assert_eq!(actions, vec![csi(&[12, 345], &[], b'H')]);
    }

    #[test]
    fn empty_leading_field_becomes_zero() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b[;5H"));
        assert_eq!(actions, vec![csi(&[0, 5], &[], b'H')]);
    }

    #[test]
    fn empty_fields_default_to_zero() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b[1;;m"));
        assert_eq!(actions, vec![csi(&[1, 0, 0], &[], b'm')]);
    }

    #[test]
    fn parameter_values_saturate() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b[999999A"));
        assert_eq!(actions, vec![csi(&[u16::MAX], &[], b'A')]);
    }

    #[test]
    fn parameter_count_is_bounded() {
        let mut p = Parser::new();
        let mut input = b"\x1b[".to_vec();
        for _ in 0..100 {
            input.extend_from_slice(b"1;");
        }
        input.push(b'm');
        let actions = significant(p.feed(&input));
        let [Action::CsiDispatch(d)] = actions.as_slice() else {
            panic!("expected a single dispatch, got {actions:?}");
        };
        assert_eq!(d.params.len(), crate::params::MAX_PARAMS);
    }

    #[test]
    fn param_and_collect_actions_are_reported() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b[?1h");
        assert_eq!(
            actions,
            vec![
                // ESC and CSI entry both clear.
                Action::Clear,
                Action::Clear,
                Action::Collect(b'?'),
                Action::Param(b'1'),
                csi(&[1], b"?", b'h'),
            ]
        );
    }

    // ── CSI ────────────────────────────────────────────────────────

    #[test]
    fn private_marker_is_collected() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b[?25l"));
        let [Action::CsiDispatch(d)] = actions.as_slice() else {
            panic!("expected dispatch, got {actions:?}");
        };
        assert!(d.is_private());
        assert_eq!(d.params.as_slice(), &[25]);
        assert_eq!(d.final_byte, b'l');
    }

    #[test]
    fn colon_sends_sequence_to_ignore() {
        let mut p = Parser::new();
        assert!(significant(p.feed(b"\x1b[4:3m")).is_empty());
        assert_eq!(p.state(), State::Ground);
        assert_eq!(p.feed(b"x"), vec![Action::Print('x')]);
    }

    #[test]
    fn c0_inside_csi_executes_without_aborting() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b[2\rJ"));
        assert_eq!(actions, vec![Action::Execute(b'\r'), csi(&[2], &[], b'J')]);
    }

    #[test]
    fn can_aborts_sequence() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b[31\x18m"));
        assert_eq!(actions, vec![Action::Execute(0x18), Action::Print('m')]);
    }

    #[test]
    fn esc_restarts_sequence() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b[31\x1b[2J"));
        assert_eq!(actions, vec![csi(&[2], &[], b'J')]);
    }

    #[test]
    fn eight_bit_csi_introducer() {
        let mut p = Parser::new();
        let actions = significant(p.feed(&[0x9B, b'5', b'C']));
        assert_eq!(actions, vec![csi(&[5], &[], b'C')]);
    }

    #[test]
    fn utf8_encoded_c1_introducer() {
        let mut p = Parser::new();
        let actions = significant(p.feed(&[0xC2, 0x9B, b'2', b'J']));
        assert_eq!(actions, vec![csi(&[2], &[], b'J')]);
    }

    #[test]
    fn too_many_intermediates_drop_dispatch() {
        let mut p = Parser::new();
        assert!(significant(p.feed(b"\x1b[ !\"q")).is_empty());
        assert_eq!(p.state(), State::Ground);
    }

    // ── ESC ────────────────────────────────────────────────────────

    #[test]
    fn esc_dispatch_with_intermediate() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b(0\x1b7"));
        assert_eq!(actions, vec![esc(b"(", b'0'), esc(&[], b'7')]);
    }

    // ── OSC ────────────────────────────────────────────────────────

    #[test]
    fn osc_st_terminated() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b]0;hi\x1b\\");
        assert_eq!(
            significant(actions),
            vec![
                Action::OscStart,
                Action::OscPut('0'),
                Action::OscPut(';'),
                Action::OscPut('h'),
                Action::OscPut('i'),
                Action::OscEnd,
                esc(&[], b'\\'),
            ]
        );
    }

    #[test]
    fn osc_bel_terminated() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b]2;x\x07y"));
        assert_eq!(
            actions,
            vec![
                Action::OscStart,
                Action::OscPut('2'),
                Action::OscPut(';'),
                Action::OscPut('x'),
                Action::OscEnd,
                Action::Print('y'),
            ]
        );
    }

    #[test]
    fn osc_accepts_utf8_text() {
        let mut p = Parser::new();
        let actions = significant(p.feed("\x1b]2;é\x07".as_bytes()));
        assert!(actions.contains(&Action::OscPut('é')));
    }

    #[test]
    fn eight_bit_st_ends_osc() {
        let mut p = Parser::new();
        let actions = significant(p.feed(&[0x9D, b'1', b';', b'a', 0x9C]));
        assert_eq!(
            actions,
            vec![
                Action::OscStart,
                Action::OscPut('1'),
                Action::OscPut(';'),
                Action::OscPut('a'),
                Action::OscEnd,
            ]
        );
    }

    // ── DCS / SOS / PM / APC ───────────────────────────────────────

    #[test]
    fn dcs_hook_put_unhook() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1bP1$qm\x1b\\"));
        assert_eq!(
            actions,
            vec![
                Action::Hook(Dispatch {
                    params: Params::from_slice(&[1]),
                    intermediates: SmallVec::from_slice(b"$"),
                    final_byte: b'q',
                }),
                Action::Put('m'),
                Action::Unhook,
                esc(&[], b'\\'),
            ]
        );
    }

    #[test]
    fn apc_string_is_swallowed() {
        let mut p = Parser::new();
        let actions = significant(p.feed(b"\x1b_Gf=100;payload\x1b\\z"));
        assert_eq!(actions, vec![esc(&[], b'\\'), Action::Print('z')]);
    }

    // ── Recovery ───────────────────────────────────────────────────

    #[test]
    fn parser_recovers_after_garbage() {
        let mut p = Parser::new();
        let _ = p.feed(b"\x1b[?\x1bP\x90\x9d\xff\x1b[");
        p.reset();
        assert_eq!(p.state(), State::Ground);
        assert_eq!(p.feed(b"ok"), vec![Action::Print('o'), Action::Print('k')]);
    }

    #[test]
    fn table_has_no_gaps_for_ascii_in_ground() {
        for b in 0x20u8..=0x7E {
            assert!(TRANSITIONS[State::Ground as usize][b as usize].is_some());
        }
    }
}
