//! Cosmetic "who else is here" simulation plus the visitor's own session
//! record. Nothing here talks to a server.

use rand::{seq::IndexedRandom, Rng};

use crate::{
    config::{VISITOR_MAX_AGE_MS, VISITOR_MOVE_CHANCE},
    content::Section,
    storage::{self, PreferenceStore},
};

pub const VISITOR_NAMES: [&str; 5] = ["Aarav", "Priya", "Rahul", "Neha", "Vikram"];

/// Sections fake visitors wander between.
pub const WANDER_SECTIONS: [Section; 5] = [
    Section::Home,
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Contact,
];

pub const VISITOR_AVATAR: &str = "/placeholder.svg?height=40&width=40";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    pub id: String,
    pub name: &'static str,
    pub avatar: &'static str,
    pub section: Section,
    /// Milliseconds since the epoch of the last move.
    pub timestamp: i64,
}

impl Visitor {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

fn random_section<R: Rng + ?Sized>(rng: &mut R) -> Section {
    *WANDER_SECTIONS
        .choose(rng)
        .unwrap_or(&Section::Home)
}

pub fn simulate_visitors<R: Rng + ?Sized>(rng: &mut R, now_ms: i64, count: usize) -> Vec<Visitor> {
    (0..count)
        .map(|i| Visitor {
            id: format!("visitor-{i}"),
            name: VISITOR_NAMES.choose(rng).copied().unwrap_or("Guest"),
            avatar: VISITOR_AVATAR,
            section: random_section(rng),
            timestamp: now_ms - rng.random_range(0..VISITOR_MAX_AGE_MS),
        })
        .collect()
}

/// Give every visitor a chance to move to a random section.
pub fn wander<R: Rng + ?Sized>(visitors: &mut [Visitor], rng: &mut R, now_ms: i64) {
    for visitor in visitors {
        if rng.random_bool(VISITOR_MOVE_CHANCE) {
            visitor.section = random_section(rng);
            visitor.timestamp = now_ms;
        }
    }
}

pub fn time_ago(now_ms: i64, timestamp_ms: i64) -> String {
    let seconds = (now_ms - timestamp_ms).max(0) / 1000;
    if seconds < 60 {
        return format!("{seconds}s ago");
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    format!("{}h ago", minutes / 60)
}

/// Viewport-relative vertical bounds of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

/// The first section whose box contains the marker line (usually the middle
/// of the viewport).
pub fn section_at(marker: f64, bounds: &[SectionBounds]) -> Option<Section> {
    bounds
        .iter()
        .find(|b| b.top <= marker && marker <= b.bottom)
        .map(|b| b.section)
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn generate_user_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix = (0..7)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect::<String>();
    format!("user-{suffix}")
}

/// The current visitor's own presence record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub section: Option<Section>,
}

impl Session {
    /// Reuse the stored id or mint and store a new one.
    pub fn resume<S, R>(store: &mut S, rng: &mut R) -> Self
    where
        S: PreferenceStore + ?Sized,
        R: Rng + ?Sized,
    {
        let user_id = store
            .get(storage::USER_ID)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| generate_user_id(rng));
        store.set(storage::USER_ID, &user_id);
        Self {
            user_id,
            section: None,
        }
    }

    /// Record the section now under the viewport. Returns whether anything
    /// was written.
    pub fn observe<S>(&mut self, section: Section, now_ms: i64, store: &mut S) -> bool
    where
        S: PreferenceStore + ?Sized,
    {
        if self.section == Some(section) {
            return false;
        }
        self.section = Some(section);
        store.set(storage::CURRENT_SECTION, section.id());
        storage::save(store, storage::TIMESTAMP, &now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::{rngs::StdRng, SeedableRng};

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_simulated_visitors_are_recent() {
        let mut rng = StdRng::seed_from_u64(1);
        let visitors = simulate_visitors(&mut rng, NOW, 3);
        assert_eq!(visitors.len(), 3);
        for (i, v) in visitors.iter().enumerate() {
            assert_eq!(v.id, format!("visitor-{i}"));
            assert!(VISITOR_NAMES.contains(&v.name));
            assert!(WANDER_SECTIONS.contains(&v.section));
            assert!(v.timestamp <= NOW && v.timestamp > NOW - VISITOR_MAX_AGE_MS);
        }
    }

    #[test]
    fn test_wander_moves_some_visitors() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut visitors = simulate_visitors(&mut rng, NOW, 50);
        let later = NOW + 15_000;
        wander(&mut visitors, &mut rng, later);

        let moved = visitors.iter().filter(|v| v.timestamp == later).count();
        assert!(moved > 0 && moved < visitors.len(), "moved {moved}");
        assert!(visitors.iter().all(|v| WANDER_SECTIONS.contains(&v.section)));
    }

    #[test]
    fn test_time_ago_units() {
        assert_eq!(time_ago(NOW, NOW), "0s ago");
        assert_eq!(time_ago(NOW, NOW - 59_999), "59s ago");
        assert_eq!(time_ago(NOW, NOW - 60_000), "1m ago");
        assert_eq!(time_ago(NOW, NOW - 59 * 60_000), "59m ago");
        assert_eq!(time_ago(NOW, NOW - 2 * 3_600_000), "2h ago");
        assert_eq!(time_ago(NOW, NOW + 5_000), "0s ago");
    }

    #[test]
    fn test_section_at_marker_line() {
        let bounds = [
            SectionBounds { section: Section::Home, top: -800.0, bottom: 0.0 },
            SectionBounds { section: Section::About, top: 0.0, bottom: 600.0 },
            SectionBounds { section: Section::Skills, top: 600.0, bottom: 1400.0 },
        ];
        assert_eq!(section_at(300.0, &bounds), Some(Section::About));
        assert_eq!(section_at(600.0, &bounds), Some(Section::About));
        assert_eq!(section_at(900.0, &bounds), Some(Section::Skills));
        assert_eq!(section_at(5000.0, &bounds), None);
    }

    #[test]
    fn test_user_id_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let id = generate_user_id(&mut rng);
        assert_eq!(id.len(), "user-".len() + 7);
        assert!(id.starts_with("user-"));
        assert!(id[5..].bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_session_reuses_stored_id() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut store = MemoryStore::new();
        let first = Session::resume(&mut store, &mut rng);
        assert_eq!(store.get(storage::USER_ID), Some(first.user_id.clone()));

        let second = Session::resume(&mut store, &mut rng);
        assert_eq!(first.user_id, second.user_id);
    }

    #[test]
    fn test_session_records_section_changes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut store = MemoryStore::new();
        let mut session = Session::resume(&mut store, &mut rng);
        assert_eq!(session.section, None);

        assert!(session.observe(Section::Home, NOW, &mut store));
        assert_eq!(store.get(storage::CURRENT_SECTION).as_deref(), Some("home"));
        assert!(!session.observe(Section::Home, NOW + 1, &mut store));

        assert!(session.observe(Section::Projects, NOW + 2, &mut store));
        assert_eq!(store.get(storage::CURRENT_SECTION).as_deref(), Some("projects"));
        assert_eq!(storage::load::<i64, _>(&store, storage::TIMESTAMP), Some(NOW + 2));
    }

    #[test]
    fn test_new_page_load_rewrites_section() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut store = MemoryStore::new();
        store.set(storage::CURRENT_SECTION, "projects");

        let mut session = Session::resume(&mut store, &mut rng);
        assert!(session.observe(Section::Home, NOW, &mut store));
        assert_eq!(store.get(storage::CURRENT_SECTION).as_deref(), Some("home"));
    }
}
