use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::local_hour;
use crate::{config::THEME_REFRESH_MS, theme::Theme};

/// Shared light/dark state. Every write is mirrored onto the `<html>` class.
#[derive(Debug, Clone, Copy)]
pub struct ThemeHandle {
    theme: RwSignal<Theme>,
}

impl ThemeHandle {
    pub fn new() -> Self {
        let theme = RwSignal::new(Theme::default());
        Effect::new(move |_| apply_root_class(theme.get()));
        Self { theme }
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, value: Theme) {
        if self.theme.get_untracked() != value {
            log::debug!("theme -> {value}");
        }
        self.theme.set(value);
    }
}

fn apply_root_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    for other in Theme::ALL {
        let _ = classes.remove_1(other.class());
    }
    let _ = classes.add_1(theme.class());
}

/// Follows the wall clock: applied once on mount and then every hour.
#[component]
pub fn TimeBasedTheme(theme: ThemeHandle) -> impl IntoView {
    let refresh = move || theme.set(Theme::for_hour(local_hour()));
    Effect::new(move |_| refresh());
    let _ = use_interval_fn(refresh, THEME_REFRESH_MS);
}
