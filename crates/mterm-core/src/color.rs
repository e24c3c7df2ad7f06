//! Terminal colour model.
//!
//! The default colour is not a variant: a [`Format`](crate::format::Format)
//! stores `Option<Color>` and `None` means "terminal default", so an unset
//! colour and an explicit SGR 39/49 compare equal.

use std::fmt;

/// A non-default terminal colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 ANSI colours (0-7 standard, 8-15 bright).
    Ansi(u8),
    /// 256-colour palette index.
    Indexed(u8),
    /// 24-bit true colour.
    Rgb(u8, u8, u8),
}

impl Color {
    /// SGR parameter fragment selecting this colour as foreground or background.
    ///
    /// `Ansi(1)` as foreground is `31`, `Ansi(9)` is `91`, `Indexed(n)` is
    /// `38;5;n` and `Rgb` is `38;2;r;g;b`.
    #[must_use]
    pub fn sgr_fragment(self, background: bool) -> String {
        let (base, bright_base, extended) = if background {
            (40, 100, 48)
        } else {
            (30, 90, 38)
        };
        match self {
            Self::Ansi(n) if n < 8 => format!("{}", base + u16::from(n)),
            Self::Ansi(n) => format!("{}", bright_base + u16::from(n.min(15) - 8)),
            Self::Indexed(n) => format!("{extended};5;{n}"),
            Self::Rgb(r, g, b) => format!("{extended};2;{r};{g};{b}"),
        }
    }

    /// Resolve to an RGB triple using the xterm default palette.
    #[must_use]
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Ansi(n) => PALETTE_256[usize::from(n.min(15))],
            Self::Indexed(n) => PALETTE_256[usize::from(n)],
            Self::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ansi(n) => write!(f, "ansi:{n}"),
            Self::Indexed(n) => write!(f, "index:{n}"),
            Self::Rgb(r, g, b) => write!(f, "rgb:#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

const fn generate_palette() -> [(u8, u8, u8); 256] {
    const fn cube_val(v: u8) -> u8 {
        if v == 0 { 0 } else { 55 + 40 * v }
    }

    let mut palette = [(0u8, 0u8, 0u8); 256];

    palette[0] = (0, 0, 0);
    palette[1] = (205, 0, 0);
    palette[2] = (0, 205, 0);
    palette[3] = (205, 205, 0);
    palette[4] = (0, 0, 238);
    palette[5] = (205, 0, 205);
    palette[6] = (0, 205, 205);
    palette[7] = (229, 229, 229);
    palette[8] = (127, 127, 127);
    palette[9] = (255, 0, 0);
    palette[10] = (0, 255, 0);
    palette[11] = (255, 255, 0);
    palette[12] = (92, 92, 255);
    palette[13] = (255, 0, 255);
    palette[14] = (0, 255, 255);
    palette[15] = (255, 255, 255);

    // 6x6x6 cube.
    let mut i = 16usize;
    while i < 232 {
        let n = (i - 16) as u8;
        palette[i] = (cube_val(n / 36), cube_val((n / 6) % 6), cube_val(n % 6));
        i += 1;
    }

    // Grayscale ramp.
    let mut i = 232usize;
    while i < 256 {
        let v = (8 + 10 * (i - 232)) as u8;
        palette[i] = (v, v, v);
        i += 1;
    }

    palette
}

static PALETTE_256: [(u8, u8, u8); 256] = generate_palette();
