//! Typewriter buffer for the title effect.
//!
//! Each step appends exactly one character to a retained buffer, so ticking
//! through a title is linear in its length.

pub struct Typewriter {
    chars: Vec<char>,
    typed: String,
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: String::with_capacity(text.len()),
            cursor: 0,
        }
    }

    /// Append the next character and return the text typed so far; `None`
    /// once the full text has been produced.
    pub fn step(&mut self) -> Option<&str> {
        let next = *self.chars.get(self.cursor)?;
        self.typed.push(next);
        self.cursor += 1;
        Some(&self.typed)
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_accumulate_one_char_at_a_time() {
        let mut writer = Typewriter::new("abc");
        assert_eq!(writer.step(), Some("a"));
        assert_eq!(writer.step(), Some("ab"));
        assert_eq!(writer.step(), Some("abc"));
        assert!(writer.is_done());
        assert_eq!(writer.step(), None);
        assert_eq!(writer.step(), None);
    }

    #[test]
    fn multibyte_text_steps_by_character() {
        let text = "互联网已经死了吗？";
        let mut writer = Typewriter::new(text);
        let mut steps = 0;
        let mut last = String::new();
        while let Some(typed) = writer.step() {
            steps += 1;
            last = typed.to_string();
        }
        assert_eq!(steps, text.chars().count());
        assert_eq!(last, text);
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert_eq!(writer.step(), None);
    }
}
