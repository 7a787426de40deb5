//! Bounded message log owned by a session and shown to the player.
use std::collections::VecDeque;

use crate::color::Rgb;

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: Rgb,
    /// Number of consecutive times this text was logged.
    pub count: u32,
}

impl Message {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
            count: 1,
        }
    }

    /// Text as displayed, including the repeat counter.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    entries: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity.min(Self::DEFAULT_CAPACITY)),
            capacity: bounded_capacity,
        }
    }

    /// Appends a message, stacking it onto the previous one when the text repeats.
    pub fn add_message(&mut self, text: impl Into<String>, color: Rgb) {
        let text = text.into();
        if let Some(last) = self.entries.back_mut() {
            if last.text == text {
                last.count += 1;
                return;
            }
        }
        self.push(Message::new(text, color));
    }

    pub fn push(&mut self, message: Message) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&Message> {
        self.entries.front()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.entries.iter().any(|message| message.text.contains(needle))
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn repeated_text_stacks() {
        let mut log = MessageLog::new(8);
        log.add_message("You wait.", color::WHITE);
        log.add_message("You wait.", color::WHITE);
        log.add_message("Something else", color::WHITE);

        assert_eq!(log.len(), 2);
        assert_eq!(log.first().unwrap().full_text(), "You wait. (x2)");
        assert_eq!(log.last().unwrap().full_text(), "Something else");
    }

    #[test]
    fn oldest_entries_are_evicted() {
        let mut log = MessageLog::new(2);
        log.add_message("one", color::WHITE);
        log.add_message("two", color::WHITE);
        log.add_message("three", color::WHITE);

        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.last().unwrap().text, "three");
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut log = MessageLog::new(0);
        log.add_message("kept", color::ERROR);
        assert_eq!(log.len(), 1);
    }
}
