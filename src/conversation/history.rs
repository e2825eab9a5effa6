use super::entry::ConversationEntry;
use super::entry::Speaker;

/// Append-only transcript, oldest first.
#[derive(Debug, Default, Clone)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.push(ConversationEntry::new(speaker, text));
    }
    pub fn push(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }
    /// Restartable view in insertion order; clone the iterator to walk it again.
    pub fn all(&self) -> std::slice::Iter<'_, ConversationEntry> {
        self.entries.iter()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn last(&self) -> Option<&ConversationEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a ConversationEntry;
    type IntoIter = std::slice::Iter<'a, ConversationEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order() {
        let mut log = ConversationLog::default();
        log.append(Speaker::User, "first");
        log.append(Speaker::Bot, "second");
        log.append(Speaker::User, "third");
        let texts = log.all().map(|e| e.text()).collect::<Vec<_>>();
        assert!(texts == ["first", "second", "third"]);
        assert!(log.last().map(|e| e.speaker()) == Some(Speaker::User));
    }

    #[test]
    fn all_is_idempotent() {
        let mut log = ConversationLog::default();
        log.append(Speaker::User, "hi");
        log.append(Speaker::Bot, "hello");
        let view = log.all();
        let once = view.clone().cloned().collect::<Vec<_>>();
        let twice = view.cloned().collect::<Vec<_>>();
        let again = log.all().cloned().collect::<Vec<_>>();
        assert!(once == twice);
        assert!(once == again);
        assert!(log.len() == 2);
    }

    #[test]
    fn display_uses_labels() {
        let entry = ConversationEntry::new(Speaker::Bot, "raise");
        assert!(entry.to_string() == "AI Coach: raise");
    }
}
