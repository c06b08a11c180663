/// Text to type: the `data-text` attribute unless it is missing or empty,
/// else the element's current content.
pub fn source_text(attribute: Option<String>, content: Option<String>) -> String {
    attribute
        .filter(|s| !s.is_empty())
        .or(content)
        .unwrap_or_default()
}

/// Character-by-character text reveal.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal one more character and return the visible prefix, or `None`
    /// once the whole text is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.shown += 1;
        Some(self.visible())
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }
}
