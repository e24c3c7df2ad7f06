//! Text format (graphic rendition) and the SGR algorithm.

use bitflags::bitflags;

use crate::color::Color;
use crate::params::Params;

bitflags! {
    /// Boolean SGR attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatFlags: u8 {
        const ITALIC    = 1 << 0;
        const BLINK     = 1 << 1;
        const REVERSED  = 1 << 2;
        const INVISIBLE = 1 << 3;
        const STRIKEOUT = 1 << 4;
    }
}

/// Intensity. Bold and dim are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brightness {
    #[default]
    Normal,
    Bold,
    Dim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
}

/// Graphic rendition applied to printed glyphs and erased regions.
///
/// `None` colours are the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Format {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub brightness: Brightness,
    pub underline: Underline,
    pub flags: FormatFlags,
}

impl Format {
    /// Apply an SGR parameter list on top of `self`.
    ///
    /// An empty list is SGR 0. Codes are consumed front to back and are
    /// cumulative; unknown codes are skipped.
    #[must_use]
    pub fn apply_parameters(&self, params: &Params) -> Self {
        if params.is_empty() {
            return Self::default();
        }

        let mut f = *self;
        let mut params = params.clone();
        while let Some(code) = params.consume_item() {
            match code {
                0 => f = Self::default(),
                1 => f.brightness = Brightness::Bold,
                2 => f.brightness = Brightness::Dim,
                3 => f.flags.insert(FormatFlags::ITALIC),
                4 => f.underline = Underline::Single,
                5 | 6 => f.flags.insert(FormatFlags::BLINK),
                7 => f.flags.insert(FormatFlags::REVERSED),
                8 => f.flags.insert(FormatFlags::INVISIBLE),
                9 => f.flags.insert(FormatFlags::STRIKEOUT),
                21 => f.underline = Underline::Double,
                22 => f.brightness = Brightness::Normal,
                23 => f.flags.remove(FormatFlags::ITALIC),
                24 => f.underline = Underline::None,
                25 => f.flags.remove(FormatFlags::BLINK),
                27 => f.flags.remove(FormatFlags::REVERSED),
                28 => f.flags.remove(FormatFlags::INVISIBLE),
                29 => f.flags.remove(FormatFlags::STRIKEOUT),
                30..=37 => f.fg = Some(Color::Ansi(ansi_index(code, 30))),
                38 | 48 => {
                    let (color, consumed) = extended_color_tail(params.remaining());
                    params.skip(consumed);
                    if let Some(color) = color {
                        if code == 38 {
                            f.fg = Some(color);
                        } else {
                            f.bg = Some(color);
                        }
                    }
                }
                39 => f.fg = None,
                40..=47 => f.bg = Some(Color::Ansi(ansi_index(code, 40))),
                49 => f.bg = None,
                90..=97 => f.fg = Some(Color::Ansi(ansi_index(code, 90) + 8)),
                100..=107 => f.bg = Some(Color::Ansi(ansi_index(code, 100) + 8)),
                _ => tracing::debug!(code, "unimplemented SGR code"),
            }
        }
        f
    }

    /// SGR sequence that reproduces this format starting from the default.
    #[must_use]
    pub fn ansi_string(&self) -> String {
        let mut parts: Vec<String> = vec!["0".to_string()];
        match self.brightness {
            Brightness::Normal => {}
            Brightness::Bold => parts.push("1".into()),
            Brightness::Dim => parts.push("2".into()),
        }
        if self.flags.contains(FormatFlags::ITALIC) {
            parts.push("3".into());
        }
        match self.underline {
            Underline::None => {}
            Underline::Single => parts.push("4".into()),
            Underline::Double => parts.push("21".into()),
        }
        for (flag, code) in [
            (FormatFlags::BLINK, "5"),
            (FormatFlags::REVERSED, "7"),
            (FormatFlags::INVISIBLE, "8"),
            (FormatFlags::STRIKEOUT, "9"),
        ] {
            if self.flags.contains(flag) {
                parts.push(code.into());
            }
        }
        if let Some(fg) = self.fg {
            parts.push(fg.sgr_fragment(false));
        }
        if let Some(bg) = self.bg {
            parts.push(bg.sgr_fragment(true));
        }
        format!("\x1b[{}m", parts.join(";"))
    }
}

fn ansi_index(code: u16, base: u16) -> u8 {
    u8::try_from(code - base).unwrap_or(0)
}

fn clamp_component(v: u16) -> u8 {
    u8::try_from(v).unwrap_or(u8::MAX)
}

/// Decode an extended colour introduced by `38` or `48`.
///
/// `items[0]` is the introducer. Returns the colour, if one could be built,
/// and how many items (introducer included) it used. Missing values read as
/// zero; an unknown or missing selector yields no colour.
#[must_use]
pub fn extended_color(items: &[u16]) -> (Option<Color>, usize) {
    match items.split_first() {
        None => (None, 0),
        Some((_, rest)) => {
            let (color, consumed) = extended_color_tail(rest);
            (color, consumed + 1)
        }
    }
}

/// Same as [`extended_color`] with the introducer already consumed.
fn extended_color_tail(items: &[u16]) -> (Option<Color>, usize) {
    let Some((&selector, rest)) = items.split_first() else {
        return (None, 0);
    };
    match selector {
        5 => {
            let index = rest.first().copied().unwrap_or(0);
            let used = rest.len().min(1);
            (Some(Color::Indexed(clamp_component(index))), 1 + used)
        }
        2 => {
            let used = rest.len().min(3);
            let c = |i: usize| clamp_component(rest.get(i).copied().unwrap_or(0));
            (Some(Color::Rgb(c(0), c(1), c(2))), 1 + used)
        }
        other => {
            tracing::debug!(selector = other, "unknown extended colour selector");
            (None, 1)
        }
    }
}
