use super::entry::ConversationEntry;
use super::entry::Speaker;
use super::history::ConversationLog;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Conversation log plus the bot replies still in flight.
///
/// User turns land in the log immediately. Each question reserves a reply
/// position, and replies are released in reservation order: two overlapping
/// questions always read Q1, Q2, A1, A2 regardless of which answer arrives first.
#[derive(Debug, Default)]
pub struct Transcript {
    log: ConversationLog,
    issued: u64,
    released: u64,
    ready: BTreeMap<u64, Option<ConversationEntry>>,
}

impl Transcript {
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }
    /// Replies reserved but not yet released to the log.
    pub fn pending(&self) -> usize {
        (self.issued - self.released) as usize
    }
    pub fn say(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.log.append(speaker, text);
    }
}

impl Transcript {
    fn reserve(&mut self) -> u64 {
        let ticket = self.issued;
        self.issued += 1;
        ticket
    }
    fn settle(&mut self, ticket: u64, entry: Option<ConversationEntry>) {
        self.ready.insert(ticket, entry);
        while let Some(next) = self.ready.remove(&self.released) {
            if let Some(entry) = next {
                self.log.push(entry);
            }
            self.released += 1;
        }
    }
}

/// A reserved reply position.
///
/// Dropping a slot without filling it releases the position empty so later
/// replies are never held back by an abandoned request.
#[derive(Debug)]
pub struct Slot<'a> {
    transcript: &'a RefCell<Transcript>,
    ticket: u64,
    open: bool,
}

impl<'a> Slot<'a> {
    /// Append a user turn and reserve the position of its answer.
    pub fn ask(transcript: &'a RefCell<Transcript>, question: impl Into<String>) -> Self {
        let ticket = {
            let mut t = transcript.borrow_mut();
            t.say(Speaker::User, question);
            t.reserve()
        };
        Self {
            transcript,
            ticket,
            open: true,
        }
    }
    pub fn fill(mut self, speaker: Speaker, text: impl Into<String>) {
        self.open = false;
        self.transcript
            .borrow_mut()
            .settle(self.ticket, Some(ConversationEntry::new(speaker, text)));
    }
}

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        if self.open {
            log::debug!("reply slot {} abandoned", self.ticket);
            self.transcript.borrow_mut().settle(self.ticket, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(transcript: &RefCell<Transcript>) -> Vec<String> {
        transcript
            .borrow()
            .log()
            .all()
            .map(|e| e.text().to_string())
            .collect()
    }

    #[test]
    fn replies_release_in_question_order() {
        let transcript = RefCell::new(Transcript::default());
        let a = Slot::ask(&transcript, "q1");
        let b = Slot::ask(&transcript, "q2");
        b.fill(Speaker::Bot, "a2");
        assert!(texts(&transcript) == ["q1", "q2"]);
        assert!(transcript.borrow().pending() == 2);
        a.fill(Speaker::Bot, "a1");
        assert!(texts(&transcript) == ["q1", "q2", "a1", "a2"]);
        assert!(transcript.borrow().pending() == 0);
    }

    #[test]
    fn abandoned_slot_does_not_block() {
        let transcript = RefCell::new(Transcript::default());
        let a = Slot::ask(&transcript, "q1");
        let b = Slot::ask(&transcript, "q2");
        b.fill(Speaker::Bot, "a2");
        drop(a);
        assert!(texts(&transcript) == ["q1", "q2", "a2"]);
    }

    #[test]
    fn direct_turns_skip_the_queue() {
        let transcript = RefCell::new(Transcript::default());
        let a = Slot::ask(&transcript, "q1");
        transcript.borrow_mut().say(Speaker::Bot, "noted");
        a.fill(Speaker::Bot, "a1");
        assert!(texts(&transcript) == ["q1", "noted", "a1"]);
    }
}
