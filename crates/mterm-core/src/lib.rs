#![forbid(unsafe_code)]

//! VT100-family byte-stream interpreter.
//!
//! `mterm-core` turns the raw bytes a remote shell writes into the visible
//! state of a character terminal: screen cells, cursor, colours, modes,
//! margins, title and hyperlinks. It does no I/O; the host feeds bytes and
//! reads state back.
//!
//! # Layers
//!
//! - **Parser**: table-driven DEC ANSI state machine producing [`Action`]s.
//! - **Terminal**: the single dispatch target; applies actions to its state.
//! - **Framebuffer**: fixed rows × cols grid of [`Glyph`]s.
//! - **Format / Color**: SGR attributes and the colour model.
//! - **Modes, Margin, Charset, Osc8**: supporting value types, each able to
//!   emit the sequence that recreates it.
//!
//! # Example
//!
//! ```
//! use mterm_core::Terminal;
//!
//! let mut term = Terminal::new(24, 80);
//! term.feed(b"\x1b]0;hello\x1b\\\x1b[1;1HA");
//! assert_eq!(term.title(), "hello");
//! assert_eq!(term.glyph(0, 0).map(|g| g.rune), Some('A'));
//! assert_eq!((term.cursor().row, term.cursor().col), (0, 1));
//! ```
//!
//! # Design principles
//!
//! - **No I/O**: all types are pure data + logic.
//! - **Deterministic**: identical byte sequences always produce identical state.
//! - **Bounded**: parameters, intermediates and OSC text have fixed caps.

pub mod charset;
pub mod color;
pub mod config;
pub mod cursor;
pub mod format;
pub mod framebuffer;
pub mod glyph;
pub mod margin;
pub mod modes;
pub mod osc;
pub mod params;
pub mod parser;
pub mod terminal;

pub use charset::{ActiveSet, Charset};
pub use color::Color;
pub use config::{ConfigError, TerminalConfig, TerminalConfigParse};
pub use cursor::Cursor;
pub use format::{Brightness, Format, FormatFlags, Underline, extended_color};
pub use framebuffer::Framebuffer;
pub use glyph::{Glyph, HyperlinkId, HyperlinkRegistry};
pub use margin::Margin;
pub use modes::{Mode, ModeState, Modes};
pub use osc::{Osc8, OscCommand, parse_osc};
pub use params::{MAX_PARAMS, Params};
pub use parser::{Action, Dispatch, ParseError, Parser, State};
pub use terminal::Terminal;
