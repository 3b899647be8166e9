//! Timer / score / best-score display
//!
//! Formatting only. Where the strings end up is behind [`ScoreDisplay`].

/// The three display targets
pub trait ScoreDisplay {
    fn show_timer(&mut self, label: &str);
    fn show_score(&mut self, label: &str);
    fn show_best(&mut self, label: &str);
}

/// Two-digit countdown. Only the low two digits are shown, so 100 reads "00".
pub fn format_timer(seconds: u32) -> String {
    format!("{:02}", seconds % 100)
}

pub fn timer_label(timer: &str) -> String {
    format!("Timer : {}", timer)
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn best_label(best: u32) -> String {
    format!("Highest: {}", best)
}

/// Push the per-frame scoreboard
pub fn present<D: ScoreDisplay>(display: &mut D, seconds_remaining: u32, score: u32, best: u32) {
    display.show_timer(&timer_label(&format_timer(seconds_remaining)));
    display.show_score(&score_label(score));
    display.show_best(&best_label(best));
}

/// Scoreboard shown on page load, before the first frame runs. The timer is
/// not zero-padded here.
pub fn present_initial<D: ScoreDisplay>(display: &mut D, seconds_remaining: u32, score: u32, best: u32) {
    display.show_timer(&timer_label(&seconds_remaining.to_string()));
    display.show_score(&score_label(score));
    display.show_best(&best_label(best));
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomScoreboard;

#[cfg(target_arch = "wasm32")]
mod dom {
    use web_sys::{Document, Element};

    use super::ScoreDisplay;
    use crate::error::GameError;

    /// Writes labels into the `value` attribute of three page elements
    pub struct DomScoreboard {
        timer: Element,
        score: Element,
        best: Element,
    }

    fn element(document: &Document, id: &str) -> Result<Element, GameError> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::MissingElement(id.to_string()))
    }

    impl DomScoreboard {
        pub fn new(document: &Document) -> Result<Self, GameError> {
            Ok(Self {
                timer: element(document, "clock")?,
                score: element(document, "score")?,
                best: element(document, "bestscore")?,
            })
        }

        fn set(el: &Element, label: &str) {
            let _ = el.set_attribute("value", label);
        }
    }

    impl ScoreDisplay for DomScoreboard {
        fn show_timer(&mut self, label: &str) {
            Self::set(&self.timer, label);
        }
        fn show_score(&mut self, label: &str) {
            Self::set(&self.score, label);
        }
        fn show_best(&mut self, label: &str) {
            Self::set(&self.best, label);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingDisplay;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_timer() {
        assert_eq!(format_timer(5), "05");
        assert_eq!(format_timer(12), "12");
        assert_eq!(format_timer(0), "00");
        assert_eq!(format_timer(50), "50");
        // Three digits: only the last two show
        assert_eq!(format_timer(100), "00");
        assert_eq!(format_timer(123), "23");
    }

    #[test]
    fn test_present_labels() {
        let mut display = RecordingDisplay::default();
        present(&mut display, 7, 3, 12);
        assert_eq!(display.timer, "Timer : 07");
        assert_eq!(display.score, "Score: 3");
        assert_eq!(display.best, "Highest: 12");
    }

    #[test]
    fn test_initial_timer_unpadded() {
        let mut display = RecordingDisplay::default();
        present_initial(&mut display, 5, 0, 0);
        assert_eq!(display.timer, "Timer : 5");
        assert_eq!(display.score, "Score: 0");
        assert_eq!(display.best, "Highest: 0");
    }

    proptest! {
        #[test]
        fn prop_timer_always_two_digits(secs in any::<u32>()) {
            let s = format_timer(secs);
            prop_assert_eq!(s.len(), 2);
            prop_assert_eq!(s.parse::<u32>().unwrap(), secs % 100);
        }
    }
}
