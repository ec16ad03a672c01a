//! Static text written by the scenes and the page glue

/// A letter shown in the letter viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub title: &'static str,
    pub body: &'static str,
}

pub const LETTERS: [Letter; 2] = [
    Letter {
        title: "To kylla 💜",
        body: "I know your heart feels heavy and your spirit weary, but please remember that this moment is not the end of your story. Rest if you must — you are not falling behind by pausing to breathe. The world can wait while you gather your strength again. You are still worthy, still loved, and still growing in ways unseen. Even on the quiet days when your light feels dim, it has not gone out — it's only resting, waiting for the dawn that will come, just as surely as it always does. 🌤️",
    },
    Letter {
        title: "To kylla 💜",
        body: "I've watched you move through your days with such quiet dignity and kindness that it's become one of my favorite sights in the world. There's a strength in your gentleness, a clarity in your compassion, and an elegance in how you simply are—no fanfare needed. I hope you know how deeply your presence matters, even when you believe you're going unseen. You inspire far more than you realise.",
    },
];

/// Letter by 1-based number
pub fn letter(number: usize) -> Option<&'static Letter> {
    number.checked_sub(1).and_then(|i| LETTERS.get(i))
}

pub const WELCOME_MESSAGE: &str = "Welcome Mikylla Gicale 💜";

pub const POEM: &str = "Like flowers in a field,\nyou bloom in your own time.\nEach petal a reminder—\nyou are beautifully divine.\n\n🌸💜🌸";

/// Words revealed one per correct puzzle step
pub const SECRET_WORDS: [&str; 9] = [
    "Keep", "Going", "You're", "Doing", "An", "Amazing", "Job", ".", "💜",
];

pub const PUZZLE_COMPLETE_MESSAGE: &str =
    "💜 You're worth every bit of love and care you give to others. 💜";

/// Glyph used by the celebration cascade
pub const CASCADE_GLYPH: &str = "💜";

pub const LOGIN_DENIED: &str = "You are not kylla!";
pub const LOGIN_LOCKED: &str = "Too many failed attempts! Please refresh the page.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_lookup_is_one_based() {
        assert_eq!(letter(1), Some(&LETTERS[0]));
        assert_eq!(letter(2), Some(&LETTERS[1]));
        assert_eq!(letter(0), None);
        assert_eq!(letter(3), None);
    }
}
