//! Line splitting for icon text.
//!
//! # Rules
//!
//! | Input                     | line1                  | line2               |
//! |---------------------------|------------------------|---------------------|
//! | two or more words         | first `n / 2` words    | remaining words     |
//! | one word, > 10 chars      | up to a vowel near mid | rest of the word    |
//! | one word, <= 10 chars     | the word               | empty               |

/// Single words longer than this are broken across two lines.
const MAX_SINGLE_LINE_CHARS: usize = 10;

/// Text divided into a main line and an optional second line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSplit {
    pub line1: String,
    pub line2: String,
}

impl LineSplit {
    /// Split icon text into at most two lines.
    pub fn new(text: &str) -> Self {
        let words: Vec<&str> = text.split_whitespace().collect();

        match words.as_slice() {
            [] => Self::single(""),
            [word] if word.chars().count() > MAX_SINGLE_LINE_CHARS => Self::break_word(word),
            [word] => Self::single(word),
            words => {
                let mid = words.len() / 2;
                Self {
                    line1: words[..mid].join(" "),
                    line2: words[mid..].join(" "),
                }
            }
        }
    }

    fn single(line: &str) -> Self {
        Self {
            line1: line.to_owned(),
            line2: String::new(),
        }
    }

    /// Break a long word just after a vowel close to its middle.
    fn break_word(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let at = vowel_split_point(&chars);
        Self {
            line1: chars[..at].iter().collect(),
            line2: chars[at..].iter().collect(),
        }
    }

    /// Whether the text occupies two lines.
    pub fn has_second_line(&self) -> bool {
        !self.line2.is_empty()
    }
}

/// Split index for a long word: just after the first vowel in `mid-2..=mid+2`,
/// or `mid` itself when that window holds no vowel.
///
/// Positions outside the word are skipped.
fn vowel_split_point(chars: &[char]) -> usize {
    let mid = chars.len() / 2;
    (mid.saturating_sub(2)..=mid + 2)
        .find(|&i| chars.get(i).is_some_and(|&c| is_vowel(c)))
        .map_or(mid, |i| i + 1)
}

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
