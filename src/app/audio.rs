use std::collections::HashMap;

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlMediaElement};

use super::storage::BrowserStore;
use crate::{
    audio::{self, AmbientAction, Interaction, MutePreference, SoundKind},
    config::{AMBIENT_TRACK, AMBIENT_VOLUME},
};

#[derive(Default)]
struct SoundBank {
    sounds: HashMap<SoundKind, HtmlAudioElement>,
}

impl SoundBank {
    fn preload() -> Self {
        let sounds = SoundKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let el = HtmlAudioElement::new_with_src(kind.asset_path()).ok()?;
                el.set_volume(kind.volume());
                Some((kind, el))
            })
            .collect();
        Self { sounds }
    }
}

/// Start playback and drop the outcome. Browsers reject `play()` until the
/// page has had a user gesture.
pub fn play_detached(el: &HtmlMediaElement) {
    if let Ok(promise) = el.play() {
        leptos::task::spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}

/// Mute preference plus the preloaded effect clips.
#[derive(Clone, Copy)]
pub struct AudioHandle {
    pref: RwSignal<MutePreference>,
    bank: StoredValue<SoundBank, LocalStorage>,
}

impl AudioHandle {
    pub fn new() -> Self {
        let pref = RwSignal::new(MutePreference::default());
        let bank = StoredValue::new_local(SoundBank::default());
        Effect::new(move |_| {
            bank.set_value(SoundBank::preload());
            pref.set(MutePreference::load(&BrowserStore));
        });
        Self { pref, bank }
    }

    pub fn preference(&self) -> MutePreference {
        self.pref.get()
    }

    pub fn is_muted(&self) -> bool {
        self.pref.with(MutePreference::is_muted)
    }

    pub fn toggle_mute(&self) {
        let muted = self.pref.try_update(|p| p.toggle(&mut BrowserStore));
        if let Some(muted) = muted {
            log::debug!("muted: {muted}");
        }
    }

    pub fn cue(&self, interaction: Interaction) {
        self.play_sound(interaction.sound());
    }

    /// Play a clip over whatever is already playing. Silent when muted or when
    /// the clip never loaded.
    pub fn play_sound(&self, kind: SoundKind) {
        if self.pref.with_untracked(MutePreference::is_muted) {
            return;
        }
        self.bank.with_value(|bank| {
            let Some(clip) = bank.sounds.get(&kind) else {
                return;
            };
            let Some(copy) = clip
                .clone_node()
                .ok()
                .and_then(|n| n.dyn_into::<HtmlAudioElement>().ok())
            else {
                return;
            };
            // volume is a property, not an attribute, so clones start at 1.0
            copy.set_volume(kind.volume());
            play_detached(&copy);
        });
    }
}

/// Background loop. Paused while muted; while unmuted it starts on the first
/// click or touch of each page load.
#[component]
pub fn AmbientAudio(audio: AudioHandle) -> impl IntoView {
    let track = StoredValue::new_local(None::<HtmlAudioElement>);
    let listeners = StoredValue::new_local(Vec::<WindowListenerHandle>::new());

    let ensure_track = move || {
        track.update_value(|t| {
            if t.is_none() {
                *t = HtmlAudioElement::new_with_src(AMBIENT_TRACK).ok().inspect(|el| {
                    el.set_loop(true);
                    el.set_volume(AMBIENT_VOLUME);
                });
            }
        });
    };

    let apply = move |action: AmbientAction| {
        track.with_value(|t| {
            let Some(t) = t else {
                return;
            };
            match action {
                AmbientAction::Play => play_detached(t),
                AmbientAction::Pause => {
                    let _ = t.pause();
                }
                AmbientAction::Wait => {}
            }
        });
    };

    Effect::new(move |_| {
        let pref = audio.preference();
        ensure_track();
        apply(audio::ambient_action(pref, audio::has_interacted(&BrowserStore)));
    });

    let on_first_gesture = move || {
        let pref = audio.pref.get_untracked();
        apply(audio::first_gesture(pref, &mut BrowserStore));
        listeners.update_value(|ls| ls.drain(..).for_each(WindowListenerHandle::remove));
    };

    // installed on every page load: a remembered `hasInteracted` does not
    // unlock playback in a fresh document
    Effect::new(move |_| {
        let click = window_event_listener(ev::click, move |_| on_first_gesture());
        let touch = window_event_listener(ev::touchstart, move |_| on_first_gesture());
        listeners.set_value(vec![click, touch]);
    });

    on_cleanup(move || {
        listeners.try_update_value(|ls| ls.drain(..).for_each(WindowListenerHandle::remove));
        track.try_with_value(|t| {
            if let Some(t) = t {
                let _ = t.pause();
            }
        });
    });
}
