//! Player-facing narration. Rendering and scrollback live outside the core.

use crate::types::Severity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    /// How many consecutive times the same text was logged.
    pub count: u32,
}

impl Message {
    pub fn full_text(&self) -> String {
        if self.count > 1 { format!("{} (x{})", self.text, self.count) } else { self.text.clone() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Appends `text`, or bumps the last entry's count when the text repeats.
    pub fn add(&mut self, text: impl Into<String>, severity: Severity) {
        let text = text.into();
        if let Some(last) = self.messages.last_mut()
            && last.text == text
        {
            last.count += 1;
            return;
        }
        self.messages.push(Message { text, severity, count: 1 });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of logged lines (stacked repeats included) whose text equals `text`.
    pub fn count_of(&self, text: &str) -> u32 {
        self.messages.iter().filter(|message| message.text == text).map(|message| message.count).sum()
    }
}
