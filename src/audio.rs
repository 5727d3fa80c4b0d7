use std::{fmt, str::FromStr};

use crate::{
    error::PortfolioError,
    storage::{self, PreferenceStore},
};

/// Short sound effects played on interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Click,
    Hover,
    Success,
    Section,
}

impl SoundKind {
    pub const ALL: [SoundKind; 4] = [
        SoundKind::Click,
        SoundKind::Hover,
        SoundKind::Success,
        SoundKind::Section,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
            Self::Success => "success",
            Self::Section => "section",
        }
    }

    pub fn asset_path(self) -> &'static str {
        match self {
            Self::Click => "/assets/audio/click.mp3",
            Self::Hover => "/assets/audio/hover.mp3",
            Self::Success => "/assets/audio/success.mp3",
            Self::Section => "/assets/audio/section.mp3",
        }
    }

    pub fn volume(self) -> f64 {
        match self {
            Self::Click => 0.2,
            Self::Hover => 0.1,
            Self::Success => 0.3,
            Self::Section => 0.2,
        }
    }
}

impl fmt::Display for SoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoundKind {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| PortfolioError::UnknownSound(s.to_string()))
    }
}

/// Interactions that carry an audible cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Hero call to action.
    Explore,
    SelectTab,
    SelectFilter,
    OpenProject,
    ChangeSlide,
    ToggleVideo,
    HoverFeaturedCard,
    HoverSoftSkill,
    ChatButton,
    SendMessage,
    EnterSection,
}

impl Interaction {
    pub fn sound(self) -> SoundKind {
        match self {
            Self::Explore
            | Self::SelectTab
            | Self::SelectFilter
            | Self::OpenProject
            | Self::ChangeSlide
            | Self::ToggleVideo
            | Self::ChatButton => SoundKind::Click,
            Self::HoverFeaturedCard | Self::HoverSoftSkill => SoundKind::Hover,
            Self::SendMessage => SoundKind::Success,
            Self::EnterSection => SoundKind::Section,
        }
    }
}

/// The user's mute choice, mirrored to storage on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutePreference {
    muted: bool,
}

impl Default for MutePreference {
    fn default() -> Self {
        Self { muted: true }
    }
}

impl MutePreference {
    /// Restore the saved choice, staying muted when nothing usable is stored.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let muted = storage::load::<bool, _>(store, storage::IS_MUTED).unwrap_or(true);
        Self { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the flag and persist it. Returns the new value.
    pub fn toggle<S: PreferenceStore + ?Sized>(&mut self, store: &mut S) -> bool {
        self.muted = !self.muted;
        storage::save(store, storage::IS_MUTED, &self.muted);
        self.muted
    }
}

/// What the ambient loop should be doing given the current preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientAction {
    Play,
    Pause,
    Wait,
}

/// Browsers refuse to start audio before a user gesture, so an unmuted loop
/// waits until the page has seen one.
pub fn ambient_action(pref: MutePreference, has_interacted: bool) -> AmbientAction {
    match (pref.is_muted(), has_interacted) {
        (true, _) => AmbientAction::Pause,
        (false, true) => AmbientAction::Play,
        (false, false) => AmbientAction::Wait,
    }
}

pub fn has_interacted<S: PreferenceStore + ?Sized>(store: &S) -> bool {
    storage::load::<bool, _>(store, storage::HAS_INTERACTED).unwrap_or(false)
}

pub fn mark_interacted<S: PreferenceStore + ?Sized>(store: &mut S) {
    storage::save(store, storage::HAS_INTERACTED, &true);
}

/// The first click or touch of a page load. Playback started before it is
/// refused by the browser even for returning visitors, so the loop is retried
/// here every time. `hasInteracted` is only written the first time.
pub fn first_gesture<S: PreferenceStore + ?Sized>(
    pref: MutePreference,
    store: &mut S,
) -> AmbientAction {
    if !has_interacted(store) {
        mark_interacted(store);
    }
    ambient_action(pref, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, IS_MUTED};

    #[test]
    fn test_muted_by_default() {
        let store = MemoryStore::new();
        assert!(MutePreference::load(&store).is_muted());
        assert!(MutePreference::default().is_muted());
    }

    #[test]
    fn test_restores_saved_choice() {
        let mut store = MemoryStore::new();
        store.set(IS_MUTED, "false");
        assert!(!MutePreference::load(&store).is_muted());

        store.set(IS_MUTED, "not-a-bool");
        assert!(MutePreference::load(&store).is_muted());
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        let mut store = MemoryStore::new();
        let mut pref = MutePreference::load(&store);
        let original = pref.is_muted();

        let after_first = pref.toggle(&mut store);
        assert_eq!(after_first, !original);
        assert_eq!(store.get(IS_MUTED), Some(after_first.to_string()));
        assert_eq!(MutePreference::load(&store), pref);

        let after_second = pref.toggle(&mut store);
        assert_eq!(after_second, original);
        assert_eq!(store.get(IS_MUTED), Some(original.to_string()));
        assert_eq!(MutePreference::load(&store), pref);
    }

    #[test]
    fn test_ambient_waits_for_interaction() {
        let mut store = MemoryStore::new();
        let mut pref = MutePreference::load(&store);
        assert_eq!(ambient_action(pref, has_interacted(&store)), AmbientAction::Pause);

        pref.toggle(&mut store);
        assert_eq!(ambient_action(pref, has_interacted(&store)), AmbientAction::Wait);

        mark_interacted(&mut store);
        assert_eq!(store.get(storage::HAS_INTERACTED).as_deref(), Some("true"));
        assert_eq!(ambient_action(pref, has_interacted(&store)), AmbientAction::Play);
    }

    #[test]
    fn test_sound_names() {
        for kind in SoundKind::ALL {
            assert_eq!(kind.name().parse::<SoundKind>(), Ok(kind));
            assert!(kind.asset_path().ends_with(&format!("{}.mp3", kind.name())));
            assert!(kind.volume() > 0.0 && kind.volume() <= 1.0);
        }
        assert!("boom".parse::<SoundKind>().is_err());
    }

    #[test]
    fn test_first_gesture_restarts_loop_for_returning_visitor() {
        let mut store = MemoryStore::new();
        store.set(IS_MUTED, "false");
        mark_interacted(&mut store);
        let pref = MutePreference::load(&store);

        // stored flag alone says play, but this page load has had no gesture yet
        assert_eq!(ambient_action(pref, has_interacted(&store)), AmbientAction::Play);
        assert_eq!(first_gesture(pref, &mut store), AmbientAction::Play);
        assert_eq!(store.get(storage::HAS_INTERACTED).as_deref(), Some("true"));
    }

    #[test]
    fn test_first_gesture_marks_new_visitor() {
        let mut store = MemoryStore::new();
        let pref = MutePreference::load(&store);
        assert_eq!(first_gesture(pref, &mut store), AmbientAction::Pause);
        assert!(has_interacted(&store));
    }

    #[test]
    fn test_gallery_interactions_click_and_featured_card_hovers() {
        assert_eq!(Interaction::ChangeSlide.sound(), SoundKind::Click);
        assert_eq!(Interaction::ToggleVideo.sound(), SoundKind::Click);
        assert_eq!(Interaction::OpenProject.sound(), SoundKind::Click);
        assert_eq!(Interaction::HoverFeaturedCard.sound(), SoundKind::Hover);
        assert_eq!(Interaction::SendMessage.sound(), SoundKind::Success);
        assert_eq!(Interaction::EnterSection.sound(), SoundKind::Section);
    }
}
