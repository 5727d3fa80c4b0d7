use leptos::{ev, prelude::*};
use leptos_use::use_interval_fn;

use super::{audio::AudioHandle, section::scroll_to, theme::ThemeHandle};
use crate::{
    audio::Interaction,
    config::{TYPEWRITER_HOLD_TICKS, TYPEWRITER_TICK_MS},
    content::{Section, PROFILE},
    typewriter::Typewriter,
    visuals::pointer_offset,
};

const FLOATING_ICONS: [(&str, &str, f64); 4] = [
    ("🎨", "top-1/4 left-[10%]", 1.0),
    ("📷", "top-1/3 right-[12%]", -1.5),
    ("🎬", "bottom-1/4 left-[18%]", 2.0),
    ("💻", "bottom-1/3 right-[20%]", -0.8),
];

#[component]
pub fn Hero(theme: ThemeHandle, audio: AudioHandle) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(PROFILE.roles, TYPEWRITER_HOLD_TICKS));
    let _ = use_interval_fn(move || typewriter.update(Typewriter::tick), TYPEWRITER_TICK_MS);

    let offset = RwSignal::new((0.0, 0.0));
    let on_mousemove = move |e: ev::MouseEvent| {
        let win = window();
        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        offset.set(pointer_offset(
            e.client_x() as f64,
            e.client_y() as f64,
            width,
            height,
        ));
    };

    let backdrop = move || {
        if theme.get().is_dark() {
            "bg-gradient-to-br from-gray-950 via-indigo-950 to-gray-900"
        } else {
            "bg-gradient-to-br from-amber-50 via-rose-50 to-sky-100"
        }
    };

    view! {
        <section
            id=Section::Home.id()
            on:mousemove=on_mousemove
            class=move || {
                format!(
                    "relative min-h-screen flex items-center justify-center overflow-hidden {}",
                    backdrop(),
                )
            }
        >
            {FLOATING_ICONS
                .into_iter()
                .map(|(icon, position, depth)| {
                    view! {
                        <span
                            class=format!(
                                "absolute text-5xl opacity-30 pointer-events-none transition-transform duration-300 {position}",
                            )
                            style=move || {
                                let (x, y) = offset.get();
                                format!(
                                    "transform: translate({:.1}px, {:.1}px)",
                                    x * 20.0 * depth,
                                    y * 20.0 * depth,
                                )
                            }
                        >
                            {icon}
                        </span>
                    }
                })
                .collect_view()}
            <div class="relative z-10 text-center px-6 max-w-3xl">
                <div class="mx-auto mb-8 w-28 h-28 rounded-full bg-gradient-to-br from-indigo-500 to-pink-500 flex items-center justify-center text-5xl font-bold text-white shadow-xl">
                    {PROFILE.initial}
                </div>
                <h1 class="text-5xl md:text-6xl font-extrabold mb-4">{PROFILE.name}</h1>
                <p class="text-2xl md:text-3xl h-10 mb-6 text-indigo-600 dark:text-indigo-300">
                    {move || typewriter.with(Typewriter::text)}
                    <span class="animate-pulse">"|"</span>
                </p>
                <p class="text-lg text-gray-700 dark:text-gray-300 mb-10">{PROFILE.tagline}</p>
                <div class="flex flex-wrap gap-4 justify-center">
                    <button
                        class="px-6 py-3 rounded-full bg-indigo-600 text-white font-semibold hover:bg-indigo-700 transition"
                        on:click=move |_| {
                            audio.cue(Interaction::Explore);
                            scroll_to(Section::About);
                        }
                    >
                        "Explore My Work"
                    </button>
                    <button
                        class="px-6 py-3 rounded-full border-2 border-indigo-600 font-semibold hover:bg-indigo-600 hover:text-white transition"
                        on:click=move |_| scroll_to(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-3xl animate-bounce"
                aria-label="Scroll to about"
                on:click=move |_| scroll_to(Section::About)
            >
                "⌄"
            </button>
        </section>
    }
}
