//! Cursor state machine for the hero typing effect.
//!
//! The driver calls [`Typewriter::tick`] once per interval. Each tick reveals
//! one more character; the first tick after the text is complete reports
//! [`TypingStep::Finished`] and the driver stops. Nothing is revealed after
//! that, so a 20-character string takes 21 ticks.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Result of one typing tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypingStep {
    /// A character was appended; holds the text now visible.
    Revealed(String),
    /// The full text is already visible. No mutation.
    Finished,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    cursor: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), cursor: 0 }
    }

    pub fn tick(&mut self) -> TypingStep {
        if self.is_finished() {
            return TypingStep::Finished;
        }
        self.cursor += 1;
        TypingStep::Revealed(self.visible())
    }

    /// Text revealed so far.
    #[must_use]
    pub fn visible(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Ticks needed to reveal everything and observe completion.
    #[cfg(test)]
    pub fn total_ticks(&self) -> usize {
        self.chars.len() + 1
    }
}
