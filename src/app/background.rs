use leptos::{ev, prelude::*};

use super::theme::ThemeHandle;
use crate::{
    config,
    content::PROFILE,
    visuals::{gradient, pointer_percent},
};

/// Page backdrop with a soft glow that follows the pointer.
#[component]
pub fn DynamicBackground(theme: ThemeHandle, children: Children) -> impl IntoView {
    let pointer = RwSignal::new((50.0, 50.0));

    let listener = window_event_listener(ev::mousemove, move |e| {
        let win = window();
        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        pointer.set(pointer_percent(
            e.client_x() as f64,
            e.client_y() as f64,
            width,
            height,
        ));
    });
    on_cleanup(move || listener.remove());

    view! {
        <div class="relative min-h-screen bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100 transition-colors duration-700">
            <div
                class="pointer-events-none fixed inset-0 z-0"
                style=move || gradient(theme.get(), pointer.get())
            ></div>
            <div class="relative z-10">{children()}</div>
        </div>
    }
}

/// Full-screen cover until the client has hydrated.
#[component]
pub fn Loading() -> impl IntoView {
    let hydrated = RwSignal::new(false);
    Effect::new(move |_| hydrated.set(true));

    view! {
        <div class=move || {
            if hydrated.get() {
                "fixed inset-0 z-[100] flex items-center justify-center bg-white dark:bg-gray-950 opacity-0 pointer-events-none transition-opacity duration-700"
            } else {
                "fixed inset-0 z-[100] flex items-center justify-center bg-white dark:bg-gray-950 opacity-100"
            }
        }>
            <div class="w-16 h-16 rounded-full bg-gradient-to-br from-indigo-500 to-pink-500 flex items-center justify-center text-3xl font-bold text-white animate-pulse">
                {PROFILE.initial}
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-sm text-gray-500">
            <p>{format!("© {}", PROFILE.name)}</p>
            <p class="mt-1">{format!("Built {}", config::build_date())}</p>
        </footer>
    }
}
