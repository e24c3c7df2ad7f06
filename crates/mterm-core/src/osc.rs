//! Operating system commands: title, icon name and OSC 8 hyperlinks.

/// An OSC 8 hyperlink as received: `params;uri`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Osc8 {
    payload: String,
}

impl Osc8 {
    /// Wrap a raw `params;uri` payload.
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// The link-closing form, `;` with empty params and URI.
    #[must_use]
    pub fn cancel() -> Self {
        Self::new(";")
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Key/value parameter text before the URI.
    #[must_use]
    pub fn params(&self) -> &str {
        self.payload
            .split_once(';')
            .map_or(self.payload.as_str(), |(p, _)| p)
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        self.payload.split_once(';').map_or("", |(_, u)| u)
    }

    /// An empty URI closes the open link.
    #[must_use]
    pub fn is_cancel(&self) -> bool {
        self.uri().is_empty()
    }

    #[must_use]
    pub fn ansi_string(&self) -> String {
        format!("\x1b]8;{}\x1b\\", self.payload)
    }
}

/// A decoded OSC string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OscCommand<'a> {
    /// `0`: window title and icon name.
    TitleAndIcon(&'a str),
    /// `1`: icon name.
    Icon(&'a str),
    /// `2`: window title.
    Title(&'a str),
    /// `8`: open or close a hyperlink.
    Hyperlink(Osc8),
    /// A well-formed but unsupported command number.
    Unsupported(u16),
}

/// Split `code;text` and decode it. Returns `None` when the command number is
/// missing or not numeric.
#[must_use]
pub fn parse_osc(data: &str) -> Option<OscCommand<'_>> {
    let (code, text) = data.split_once(';').unwrap_or((data, ""));
    let code: u16 = code.parse().ok()?;
    Some(match code {
        0 => OscCommand::TitleAndIcon(text),
        1 => OscCommand::Icon(text),
        2 => OscCommand::Title(text),
        8 => OscCommand::Hyperlink(Osc8::new(text)),
        other => OscCommand::Unsupported(other),
    })
}

/// Accumulates OSC text up to a fixed number of runes.
#[derive(Debug, Clone, Default)]
pub struct OscBuffer {
    text: String,
    runes: usize,
    limit: usize,
    overflowed: bool,
}

impl OscBuffer {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            runes: 0,
            limit,
            overflowed: false,
        }
    }

    /// Append a rune, dropping it once the limit is reached.
    pub fn push(&mut self, ch: char) {
        if self.runes >= self.limit {
            if !self.overflowed {
                tracing::debug!(limit = self.limit, "OSC string too long, truncating");
                self.overflowed = true;
            }
            return;
        }
        self.text.push(ch);
        self.runes += 1;
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.runes = 0;
        self.overflowed = false;
    }

    /// Hand out the accumulated text and start over.
    pub fn take(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.clear();
        text
    }
}
