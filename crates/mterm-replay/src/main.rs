#![forbid(unsafe_code)]

//! Replay a captured byte stream through the terminal model and print the
//! resulting screen.
//!
//! # Running
//!
//! ```sh
//! cargo run -p mterm-replay -- capture.bin
//! printf '\e]0;hi\a\e[2;3Hx' | cargo run -p mterm-replay
//! ```
//!
//! Dimensions come from `MTERM_ROWS` / `MTERM_COLS` (see
//! [`TerminalConfig`]). Diagnostics go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use mterm_core::{Color, Terminal, TerminalConfig};
use tracing_subscriber::EnvFilter;

const CHUNK: usize = 8 * 1024;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_input(path: Option<&str>) -> io::Result<Box<dyn Read>> {
    match path {
        None | Some("-") => Ok(Box::new(io::stdin().lock())),
        Some(path) => Ok(Box::new(File::open(path)?)),
    }
}

fn load_config() -> io::Result<TerminalConfig> {
    let parsed = TerminalConfig::from_env_with_diagnostics();
    for err in &parsed.errors {
        tracing::warn!(%err, "ignoring environment override");
    }
    parsed.config.validate().map_err(|errors| {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        io::Error::new(io::ErrorKind::InvalidInput, message)
    })?;
    Ok(parsed.config)
}

fn dump(term: &Terminal, out: &mut impl Write) -> io::Result<()> {
    let fb = term.framebuffer();
    for row in 0..fb.rows() {
        writeln!(out, "{}", fb.row_text(row).trim_end())?;
    }
    writeln!(out, "---")?;
    let cursor = term.cursor();
    writeln!(out, "cursor: {},{}", cursor.row, cursor.col)?;
    writeln!(out, "title: {}", term.title())?;
    writeln!(out, "icon: {}", term.icon())?;
    let format = term.format();
    writeln!(out, "fg: {}", describe_color(format.fg))?;
    writeln!(out, "bg: {}", describe_color(format.bg))?;
    for mode in term.modes().iter() {
        if mode.state == mterm_core::ModeState::Set {
            writeln!(out, "mode: {mode}")?;
        }
    }
    writeln!(out, "replay: {}", term.replay_string().escape_debug())?;
    Ok(())
}

/// Pen colour with the xterm palette value it resolves to.
fn describe_color(color: Option<Color>) -> String {
    match color {
        None => "default".to_string(),
        Some(color) => {
            let (r, g, b) = color.to_rgb();
            format!("{color} (#{r:02x}{g:02x}{b:02x})")
        }
    }
}

fn main() -> io::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 1 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: mterm-replay [PATH|-]",
        ));
    }

    let config = load_config()?;
    let mut term = Terminal::with_config(config).map_err(|errors| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("{errors:?}"))
    })?;
    tracing::debug!(rows = config.rows, cols = config.cols, "replaying");

    let mut input = open_input(args.first().map(String::as_str))?;
    let mut buf = vec![0u8; CHUNK];
    let mut total = 0usize;
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        term.feed(&buf[..n]);
        total += n;
    }
    tracing::debug!(bytes = total, "input consumed");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    dump(&term, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump_text(term: &Terminal) -> String {
        let mut out = Vec::new();
        dump(term, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dump_resolves_pen_colours() {
        let mut term = Terminal::new(2, 8);
        term.feed(b"\x1b[31;48;5;232mhi");
        let text = dump_text(&term);
        assert!(text.starts_with("hi\n\n---\n"), "{text}");
        assert!(text.contains("cursor: 0,2\n"), "{text}");
        assert!(text.contains("fg: ansi:1 (#cd0000)\n"), "{text}");
        assert!(text.contains("bg: index:232 (#080808)\n"), "{text}");
    }

    #[test]
    fn dump_reports_default_colours() {
        let term = Terminal::new(1, 4);
        let text = dump_text(&term);
        assert!(text.contains("fg: default\nbg: default\n"), "{text}");
    }
}
