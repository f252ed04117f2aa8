//! Typing effect for the hero title

/// Yields the successive prefixes of a text, one more character each step.
///
/// ```
/// # use studio_landing::core::Typewriter;
/// let frames: Vec<String> = Typewriter::new("Hi!").collect();
/// assert_eq!(frames, ["H", "Hi", "Hi!"]);
/// ```
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_frames() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_done());
        assert_eq!(typewriter.next(), None);
    }

    #[test]
    fn test_frames_grow_by_one_char() {
        let frames: Vec<String> = Typewriter::new("Build").collect();
        assert_eq!(frames, ["B", "Bu", "Bui", "Buil", "Build"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let frames: Vec<String> = Typewriter::new("Café ✓").collect();
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[3], "Café");
        assert_eq!(frames.last().map(String::as_str), Some("Café ✓"));
    }
}
