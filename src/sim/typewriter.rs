//! Character-by-character text reveal

/// Reveals `message` one character per tick
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(message: &str) -> Self {
        Self {
            chars: message.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal the next character. Returns the text shown so far, or `None`
    /// once the whole message was already visible.
    pub fn tick(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.text())
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_by_char_including_emoji() {
        let mut tw = Typewriter::new("Hi 💜");
        let frames: Vec<String> = std::iter::from_fn(|| tw.tick()).collect();
        assert_eq!(frames, vec!["H", "Hi", "Hi ", "Hi 💜"]);
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
    }
}
