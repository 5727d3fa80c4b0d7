//! The floating assistant widget.
//!
//! Replies arrive after a simulated typing delay. Every delayed reply is tied
//! to a [`Ticket`]; closing the widget or starting another reply invalidates
//! all outstanding tickets, so a late timer can never overwrite newer state.

use rand::Rng;

use crate::content::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Greeting,
    Navigation,
    Time,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub text: &'static str,
    pub kind: MessageKind,
}

pub const HELP_MESSAGES: [Message; 3] = [
    Message {
        text: "Hi there! I'm Dheeraj's virtual assistant. How can I help you today?",
        kind: MessageKind::Greeting,
    },
    Message {
        text: "You can explore Dheeraj's projects in the Projects section.",
        kind: MessageKind::Navigation,
    },
    Message {
        text: "Dheeraj is a design enthusiast and media production specialist.",
        kind: MessageKind::Info,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..12 => Self::Morning,
            12..18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub fn greeting(self) -> Message {
        let text = match self {
            Self::Morning => "Good morning! Ready to explore Dheeraj's portfolio?",
            Self::Afternoon => "Good afternoon! Thanks for visiting Dheeraj's portfolio.",
            Self::Evening => "Good evening! Discover Dheeraj's creative work.",
        };
        Message {
            text,
            kind: MessageKind::Time,
        }
    }
}

pub fn random_help<R: Rng + ?Sized>(rng: &mut R) -> Message {
    HELP_MESSAGES[rng.random_range(0..HELP_MESSAGES.len())]
}

/// Buttons offered under a shown message. Each scrolls to its section and
/// closes the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickReply {
    Projects,
    Skills,
    About,
    Contact,
}

impl QuickReply {
    pub const ALL: [QuickReply; 4] = [
        QuickReply::Projects,
        QuickReply::Skills,
        QuickReply::About,
        QuickReply::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "View Projects",
            Self::Skills => "See Skills",
            Self::About => "About Me",
            Self::Contact => "Contact",
        }
    }

    pub fn target(self) -> Section {
        match self {
            Self::Projects => Section::Projects,
            Self::Skills => Section::Skills,
            Self::About => Section::About,
            Self::Contact => Section::Contact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Closed,
    Typing,
    Showing(Message),
}

/// Handle for one pending reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct ChatWidget {
    phase: ChatPhase,
    generation: u64,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ChatPhase::Closed
    }

    pub fn is_typing(&self) -> bool {
        self.phase == ChatPhase::Typing
    }

    pub fn message(&self) -> Option<Message> {
        match self.phase {
            ChatPhase::Showing(message) => Some(message),
            _ => None,
        }
    }

    pub fn shows_quick_replies(&self) -> bool {
        self.message().is_some()
    }

    fn start_typing(&mut self) -> Ticket {
        self.generation += 1;
        self.phase = ChatPhase::Typing;
        Ticket(self.generation)
    }

    /// Open the widget. The greeting is due on the returned ticket. Opening an
    /// already open widget does nothing.
    pub fn open(&mut self) -> Option<Ticket> {
        if self.is_open() {
            return None;
        }
        Some(self.start_typing())
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.phase = ChatPhase::Closed;
    }

    /// The launcher button flips between open and closed.
    pub fn toggle(&mut self) -> Option<Ticket> {
        if self.is_open() {
            self.close();
            None
        } else {
            self.open()
        }
    }

    /// Start typing a random help reply. Ignored while closed.
    /// The help button sits below the conversation, so it stays usable
    /// while a reply is still being typed.
    pub fn offers_help(&self) -> bool {
        self.is_open()
    }

    pub fn ask_for_help(&mut self) -> Option<Ticket> {
        if !self.is_open() {
            return None;
        }
        Some(self.start_typing())
    }

    /// Show `message` if `ticket` is still the latest reply. Returns whether
    /// the message was shown.
    pub fn deliver(&mut self, ticket: Ticket, message: Message) -> bool {
        if ticket.0 != self.generation || self.phase != ChatPhase::Typing {
            return false;
        }
        self.phase = ChatPhase::Showing(message);
        true
    }

    /// Follow a quick reply: close and hand back the section to scroll to.
    pub fn choose(&mut self, reply: QuickReply) -> Section {
        self.close();
        reply.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_open_types_before_greeting() {
        let mut chat = ChatWidget::new();
        assert_eq!(chat.phase(), ChatPhase::Closed);

        let ticket = chat.open().expect("closed widget should open");
        assert!(chat.is_typing());
        assert_eq!(chat.message(), None);
        assert!(!chat.shows_quick_replies());

        let greeting = DayPart::for_hour(9).greeting();
        assert!(chat.deliver(ticket, greeting));
        assert_eq!(chat.message(), Some(greeting));
        assert!(chat.shows_quick_replies());
    }

    #[test]
    fn test_greeting_matches_hour_bucket() {
        for hour in 0..24 {
            let expected = if hour < 12 {
                "Good morning"
            } else if hour < 18 {
                "Good afternoon"
            } else {
                "Good evening"
            };
            let greeting = DayPart::for_hour(hour).greeting();
            assert!(greeting.text.starts_with(expected), "hour {hour}");
            assert_eq!(greeting.kind, MessageKind::Time);
        }
    }

    #[test]
    fn test_stale_greeting_after_reopen_is_dropped() {
        let mut chat = ChatWidget::new();
        let stale = chat.open().unwrap();
        chat.close();
        let fresh = chat.open().unwrap();

        assert!(!chat.deliver(stale, DayPart::Morning.greeting()));
        assert!(chat.is_typing());
        assert!(chat.deliver(fresh, DayPart::Evening.greeting()));
        assert_eq!(chat.message(), Some(DayPart::Evening.greeting()));
    }

    #[test]
    fn test_late_reply_after_close_is_dropped() {
        let mut chat = ChatWidget::new();
        let ticket = chat.open().unwrap();
        chat.close();
        assert!(!chat.deliver(ticket, DayPart::Morning.greeting()));
        assert_eq!(chat.phase(), ChatPhase::Closed);
    }

    #[test]
    fn test_help_supersedes_pending_greeting() {
        let mut chat = ChatWidget::new();
        let greeting = chat.open().unwrap();
        let help = chat.ask_for_help().unwrap();

        assert!(!chat.deliver(greeting, DayPart::Morning.greeting()));
        assert!(chat.deliver(help, HELP_MESSAGES[1]));
        assert_eq!(chat.message(), Some(HELP_MESSAGES[1]));

        // asking again goes back through typing
        let again = chat.ask_for_help().unwrap();
        assert!(chat.is_typing());
        assert!(chat.deliver(again, HELP_MESSAGES[2]));
    }

    #[test]
    fn test_help_ignored_when_closed() {
        let mut chat = ChatWidget::new();
        assert_eq!(chat.ask_for_help(), None);
        assert_eq!(chat.phase(), ChatPhase::Closed);
    }

    #[test]
    fn test_quick_reply_closes() {
        let mut chat = ChatWidget::new();
        let ticket = chat.open().unwrap();
        chat.deliver(ticket, DayPart::Afternoon.greeting());

        assert_eq!(chat.choose(QuickReply::Skills), Section::Skills);
        assert!(!chat.is_open());
        assert_eq!(chat.message(), None);
    }

    #[test]
    fn test_help_offered_while_typing() {
        let mut chat = ChatWidget::new();
        assert!(!chat.offers_help());

        let greeting = chat.open().unwrap();
        assert!(chat.is_typing());
        assert!(chat.offers_help());
        assert!(!chat.shows_quick_replies());

        // asking mid-greeting restarts typing and drops the greeting
        let help = chat.ask_for_help().unwrap();
        assert!(!chat.deliver(greeting, DayPart::Morning.greeting()));
        assert!(chat.deliver(help, HELP_MESSAGES[0]));
        assert!(chat.offers_help());

        chat.close();
        assert!(!chat.offers_help());
    }

    #[test]
    fn test_toggle_flips() {
        let mut chat = ChatWidget::new();
        assert!(chat.toggle().is_some());
        assert!(chat.is_open());
        assert!(chat.toggle().is_none());
        assert!(!chat.is_open());
        assert!(chat.open().is_some());
        assert!(chat.open().is_none());
    }

    #[test]
    fn test_random_help_stays_in_list() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; HELP_MESSAGES.len()];
        for _ in 0..200 {
            let message = random_help(&mut rng);
            let i = HELP_MESSAGES
                .iter()
                .position(|m| *m == message)
                .expect("message should come from the help list");
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
