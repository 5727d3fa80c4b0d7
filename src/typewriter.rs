/// Endless type / hold / delete cycle over a list of words, advanced one tick
/// at a time by the caller's timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    shown: usize,
    phase: Phase,
    hold_ticks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str], hold_ticks: u32) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            hold_ticks,
        }
    }

    fn current_len(&self) -> usize {
        self.words
            .get(self.word)
            .map(|w| w.chars().count())
            .unwrap_or(0)
    }

    pub fn tick(&mut self) {
        if self.words.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                if self.shown < self.current_len() {
                    self.shown += 1;
                }
                if self.shown == self.current_len() {
                    self.phase = Phase::Holding(self.hold_ticks);
                }
            }
            Phase::Holding(0) => self.phase = Phase::Deleting,
            Phase::Holding(n) => self.phase = Phase::Holding(n - 1),
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|w| w.chars().take(self.shown).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "xyz"];

    #[test]
    fn test_types_holds_deletes_and_advances() {
        let mut tw = Typewriter::new(WORDS, 1);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "ab");
        // hold for one tick, then switch to deleting
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "ab");
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_wraps_to_first_word() {
        let mut tw = Typewriter::new(WORDS, 0);
        let mut seen = Vec::new();
        for _ in 0..40 {
            tw.tick();
            let text = tw.text();
            if WORDS.contains(&text.as_str()) && seen.last() != Some(&text) {
                seen.push(text);
            }
        }
        assert!(seen.len() >= 3);
        assert_eq!(&seen[..3], &["ab", "xyz", "ab"]);
    }

    #[test]
    fn test_multibyte_words() {
        let mut tw = Typewriter::new(&["héllo"], 0);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_empty_word_list() {
        let mut tw = Typewriter::new(&[], 3);
        tw.tick();
        assert_eq!(tw.text(), "");
    }
}
