use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::audio::AudioHandle;
use crate::{audio::Interaction, content::Section, visuals::reveal};

/// Smooth-scroll the page to a section anchor.
pub fn scroll_to(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section {section}");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Common frame for every content section: anchor id, heading, a cue when
/// the section scrolls into view, and a visibility signal for reveals.
#[component]
pub fn SectionShell<F, V>(
    section: Section,
    audio: AudioHandle,
    #[prop(optional)] intro: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    content: F,
) -> impl IntoView
where
    F: FnOnce(Signal<bool>) -> V,
    V: IntoView + 'static,
{
    let node_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(node_ref);

    Effect::watch(
        move || visible.get(),
        move |now, before, _| {
            if *now && before != Some(&true) {
                audio.cue(Interaction::EnterSection);
            }
        },
        false,
    );

    view! {
        <section
            id=section.id()
            node_ref=node_ref
            class=format!("relative py-24 px-6 scroll-mt-16 {class}")
        >
            <div class="max-w-6xl mx-auto">
                <h2 class=move || {
                    format!("text-4xl font-bold text-center mb-4 {}", reveal(visible.get(), 0))
                }>{section.title()}</h2>
                {intro
                    .map(|text| {
                        view! {
                            <p class=move || {
                                format!(
                                    "text-center text-gray-600 dark:text-gray-400 max-w-2xl mx-auto mb-12 {}",
                                    reveal(visible.get(), 1),
                                )
                            }>{text}</p>
                        }
                    })}
                {content(visible)}
            </div>
        </section>
    }
}
