use std::fmt;

/// Identity of a question, unique across the whole bank.
pub type QuestionId = u32;

/// Identity of a batch of questions.
pub type BatchId = u32;

/// One of the three answer choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    A,
    B,
    C,
}

impl Letter {
    pub const ALL: [Letter; 3] = [Letter::A, Letter::B, Letter::C];

    /// Position of the letter in `Letter::ALL`.
    pub fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
        }
    }

    /// Parses a trimmed, case-insensitive single letter.
    pub fn parse(text: &str) -> Option<Letter> {
        match text.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Letter::A),
            "B" => Some(Letter::B),
            "C" => Some(Letter::C),
            _ => None,
        }
    }

    pub fn next(self) -> Letter {
        Letter::ALL[(self.index() + 1) % Letter::ALL.len()]
    }

    pub fn previous(self) -> Letter {
        Letter::ALL[(self.index() + Letter::ALL.len() - 1) % Letter::ALL.len()]
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
        };
        write!(f, "{}", c)
    }
}

/// A question as held by the bank, tagged with its batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub n: QuestionId,
    pub batch_id: BatchId,
    pub prompt: String,
    /// Option texts for A, B and C, in that order.
    pub options: [String; 3],
    /// The answer key as written in the source: a letter or the text of an option.
    /// `None` when the source held a non-string value.
    pub correct: Option<String>,
}

impl Question {
    pub fn option(&self, letter: Letter) -> &str {
        &self.options[letter.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_parse() {
        assert_eq!(Letter::parse("a"), Some(Letter::A));
        assert_eq!(Letter::parse("  C "), Some(Letter::C));
        assert_eq!(Letter::parse("D"), None);
        assert_eq!(Letter::parse(""), None);
        assert_eq!(Letter::parse("AB"), None);
    }

    #[test]
    fn test_letter_cycles() {
        assert_eq!(Letter::A.next(), Letter::B);
        assert_eq!(Letter::C.next(), Letter::A);
        assert_eq!(Letter::A.previous(), Letter::C);
    }
}
