//! ANSI (public) and DEC private modes.
//!
//! Modes are keyed by `(code, private)`. Only codes in the name tables below
//! are tracked; `SM`/`RM` for anything else is logged and dropped.

use std::fmt;

/// Keyboard action mode.
pub const KAM: u16 = 2;
/// Insert/replace mode.
pub const IRM: u16 = 4;
/// Send/receive mode.
pub const SRM: u16 = 12;
/// Line feed/new line mode.
pub const LNM: u16 = 20;

pub const DECCKM: u16 = 1;
pub const DECANM: u16 = 2;
pub const DECCOLM: u16 = 3;
pub const DECSCLM: u16 = 4;
pub const DECSCNM: u16 = 5;
/// Origin mode.
pub const DECOM: u16 = 6;
/// Autowrap.
pub const DECAWM: u16 = 7;
pub const DECARM: u16 = 8;
pub const X10_MOUSE: u16 = 9;
/// Cursor visible.
pub const DECTCEM: u16 = 25;
/// Left/right margin mode.
pub const DECLRMM: u16 = 69;
pub const MOUSE_NORMAL: u16 = 1000;
pub const MOUSE_BUTTON: u16 = 1002;
pub const MOUSE_ANY: u16 = 1003;
pub const FOCUS_EVENTS: u16 = 1004;
pub const MOUSE_UTF8: u16 = 1005;
pub const MOUSE_SGR: u16 = 1006;
pub const ALT_SCREEN: u16 = 1049;
pub const BRACKETED_PASTE: u16 = 2004;
pub const SYNC_OUTPUT: u16 = 2026;

const PUBLIC_MODES: [(&str, u16); 4] = [("KAM", KAM), ("IRM", IRM), ("SRM", SRM), ("LNM", LNM)];

const PRIVATE_MODES: [(&str, u16); 20] = [
    ("DECCKM", DECCKM),
    ("DECANM", DECANM),
    ("DECCOLM", DECCOLM),
    ("DECSCLM", DECSCLM),
    ("DECSCNM", DECSCNM),
    ("DECOM", DECOM),
    ("DECAWM", DECAWM),
    ("DECARM", DECARM),
    ("X10MOUSE", X10_MOUSE),
    ("DECTCEM", DECTCEM),
    ("DECLRMM", DECLRMM),
    ("MOUSE_NORMAL", MOUSE_NORMAL),
    ("MOUSE_BUTTON", MOUSE_BUTTON),
    ("MOUSE_ANY", MOUSE_ANY),
    ("FOCUS", FOCUS_EVENTS),
    ("MOUSE_UTF8", MOUSE_UTF8),
    ("MOUSE_SGR", MOUSE_SGR),
    ("ALT_SCREEN", ALT_SCREEN),
    ("BRACKETED_PASTE", BRACKETED_PASTE),
    ("SYNC_OUTPUT", SYNC_OUTPUT),
];

fn table(private: bool) -> &'static [(&'static str, u16)] {
    if private { &PRIVATE_MODES } else { &PUBLIC_MODES }
}

fn position(code: u16, private: bool) -> Option<usize> {
    table(private).iter().position(|&(_, c)| c == code)
}

/// Symbolic name for a known mode.
#[must_use]
pub fn mode_name(code: u16, private: bool) -> Option<&'static str> {
    position(code, private).map(|i| table(private)[i].0)
}

/// Code for a symbolic name, searching the given namespace.
#[must_use]
pub fn mode_code(name: &str, private: bool) -> Option<u16> {
    table(private)
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeState {
    Set,
    #[default]
    Reset,
}

/// One mode and its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode {
    pub code: u16,
    pub private: bool,
    pub state: ModeState,
}

impl Mode {
    /// `SM`/`RM` sequence that puts a terminal into this state.
    #[must_use]
    pub fn ansi_string(&self) -> String {
        let marker = if self.private { "?" } else { "" };
        let action = match self.state {
            ModeState::Set => 'h',
            ModeState::Reset => 'l',
        };
        format!("\x1b[{marker}{}{action}", self.code)
    }

    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        mode_name(self.code, self.private)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            ModeState::Set => "set",
            ModeState::Reset => "reset",
        };
        match self.name() {
            Some(name) => write!(f, "{name} {state}"),
            None => write!(f, "{}{} {state}", if self.private { "?" } else { "" }, self.code),
        }
    }
}

/// State of every known mode. All modes start reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modes {
    public: [ModeState; PUBLIC_MODES.len()],
    private: [ModeState; PRIVATE_MODES.len()],
}

impl Default for Modes {
    fn default() -> Self {
        Self::new()
    }
}

impl Modes {
    #[must_use]
    pub fn new() -> Self {
        Self {
            public: [ModeState::Reset; PUBLIC_MODES.len()],
            private: [ModeState::Reset; PRIVATE_MODES.len()],
        }
    }

    /// Change a mode. Returns `false` (and logs) for unknown codes.
    pub fn set(&mut self, code: u16, private: bool, state: ModeState) -> bool {
        let Some(i) = position(code, private) else {
            tracing::debug!(code, private, ?state, "unknown mode");
            return false;
        };
        if private {
            self.private[i] = state;
        } else {
            self.public[i] = state;
        }
        true
    }

    /// State of a known mode.
    #[must_use]
    pub fn get(&self, code: u16, private: bool) -> Option<ModeState> {
        let i = position(code, private)?;
        Some(if private { self.private[i] } else { self.public[i] })
    }

    /// Whether a mode is known and set.
    #[must_use]
    pub fn is_set(&self, code: u16, private: bool) -> bool {
        self.get(code, private) == Some(ModeState::Set)
    }

    /// Every known mode, public first, in table order.
    pub fn iter(&self) -> impl Iterator<Item = Mode> + '_ {
        let public = PUBLIC_MODES
            .iter()
            .zip(self.public.iter())
            .map(|(&(_, code), &state)| Mode {
                code,
                private: false,
                state,
            });
        let private = PRIVATE_MODES
            .iter()
            .zip(self.private.iter())
            .map(|(&(_, code), &state)| Mode {
                code,
                private: true,
                state,
            });
        public.chain(private)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_string_per_namespace() {
        let m = Mode {
            code: 5,
            private: true,
            state: ModeState::Set,
        };
        assert_eq!(m.ansi_string(), "\x1b[?5h");
        let m = Mode {
            code: 4,
            private: false,
            state: ModeState::Reset,
        };
        assert_eq!(m.ansi_string(), "\x1b[4l");
    }

    #[test]
    fn modes_start_reset() {
        let modes = Modes::new();
        assert!(modes.iter().all(|m| m.state == ModeState::Reset));
        assert_eq!(modes.iter().count(), 24);
    }

    #[test]
    fn namespaces_are_independent() {
        let mut modes = Modes::new();
        assert!(modes.set(4, false, ModeState::Set));
        assert!(modes.is_set(IRM, false));
        assert!(!modes.is_set(DECSCLM, true));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let mut modes = Modes::new();
        assert!(!modes.set(9999, true, ModeState::Set));
        assert_eq!(modes.get(9999, true), None);
        assert!(!modes.set(25, false, ModeState::Set));
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(mode_name(1049, true), Some("ALT_SCREEN"));
        assert_eq!(mode_name(20, false), Some("LNM"));
        assert_eq!(mode_code("decawm", true), Some(DECAWM));
        assert_eq!(mode_code("DECAWM", false), None);
    }

    #[test]
    fn display_uses_names() {
        let m = Mode {
            code: DECTCEM,
            private: true,
            state: ModeState::Set,
        };
        assert_eq!(m.to_string(), "DECTCEM set");
        let m = Mode {
            code: 77,
            private: true,
            state: ModeState::Reset,
        };
        assert_eq!(m.to_string(), "?77 reset");
    }
}
