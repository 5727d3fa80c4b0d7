use leptos::{ev, prelude::*};
use leptos_use::use_interval_fn;

use super::{now_ms, storage::BrowserStore};
use crate::{
    config::{PRESENCE_REFRESH_MS, SIMULATED_VISITORS},
    content::Section,
    presence::{self, SectionBounds, Session, Visitor},
};

fn rendered_bounds() -> Vec<SectionBounds> {
    let doc = document();
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let rect = doc.get_element_by_id(section.id())?.get_bounding_client_rect();
            Some(SectionBounds {
                section,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

fn viewport_centre() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
        / 2.0
}

/// Bottom-left "others are viewing" badge, plus tracking of the visitor's own
/// section in local storage.
#[component]
pub fn SocialPresence() -> impl IntoView {
    let visitors = RwSignal::new(Vec::<Visitor>::new());
    let now = RwSignal::new(0_i64);
    let session = StoredValue::new(None::<Session>);
    let expanded = RwSignal::new(false);

    let track_section = move || {
        let Some(section) = presence::section_at(viewport_centre(), &rendered_bounds()) else {
            return;
        };
        session.update_value(|s| {
            if let Some(s) = s {
                if s.observe(section, now_ms(), &mut BrowserStore) {
                    log::debug!("viewing {section}");
                }
            }
        });
    };

    Effect::new(move |_| {
        let mut rng = rand::rng();
        let started = now_ms();
        now.set(started);
        visitors.set(presence::simulate_visitors(&mut rng, started, SIMULATED_VISITORS));
        session.set_value(Some(Session::resume(&mut BrowserStore, &mut rng)));
        track_section();
    });

    let _ = use_interval_fn(
        move || {
            let at = now_ms();
            now.set(at);
            visitors.update(|v| presence::wander(v, &mut rand::rng(), at));
        },
        PRESENCE_REFRESH_MS,
    );

    let scroll = window_event_listener(ev::scroll, move |_| track_section());
    on_cleanup(move || scroll.remove());

    let count = move || visitors.with(Vec::len);

    view! {
        <div
            class="fixed bottom-4 left-4 z-40"
            on:mouseenter=move |_| expanded.set(true)
            on:mouseleave=move |_| expanded.set(false)
        >
            <div class=move || {
                if expanded.get() {
                    "mb-3 w-64 rounded-2xl bg-white dark:bg-gray-800 shadow-2xl p-4 opacity-100 translate-y-0 transition-all"
                } else {
                    "mb-3 w-64 rounded-2xl bg-white dark:bg-gray-800 shadow-2xl p-4 opacity-0 translate-y-2 pointer-events-none transition-all"
                }
            }>
                <p class="text-sm font-semibold mb-3">{move || format!("{} others viewing", count())}</p>
                <ul class="space-y-2">
                    {move || {
                        let now = now.get();
                        visitors
                            .get()
                            .into_iter()
                            .map(|visitor| {
                                view! {
                                    <li class="flex items-center gap-3">
                                        <img
                                            src=visitor.avatar
                                            alt=visitor.name
                                            class="w-8 h-8 rounded-full bg-indigo-100 dark:bg-indigo-900"
                                        />
                                        <div class="flex-1 min-w-0">
                                            <p class="text-sm font-medium truncate">{visitor.name}</p>
                                            <p class="text-xs text-gray-500">
                                                {format!(
                                                    "{} · {}",
                                                    visitor.section.title(),
                                                    presence::time_ago(now, visitor.timestamp),
                                                )}
                                            </p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
            <button class="relative flex items-center gap-2 px-4 py-2 rounded-full bg-white dark:bg-gray-800 shadow-lg">
                <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                <span class="flex -space-x-2">
                    {move || {
                        visitors
                            .get()
                            .iter()
                            .map(|visitor| {
                                view! {
                                    <span class="w-6 h-6 rounded-full border-2 border-white dark:border-gray-800 bg-indigo-500 text-white text-xs flex items-center justify-center">
                                        {visitor.initial()}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </span>
                <span class="absolute -top-2 -right-2 w-5 h-5 rounded-full bg-indigo-600 text-white text-xs flex items-center justify-center">
                    {count}
                </span>
            </button>
        </div>
    }
}
