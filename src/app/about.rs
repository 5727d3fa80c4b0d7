use leptos::prelude::*;

use super::{audio::AudioHandle, section::SectionShell};
use crate::{
    audio::Interaction,
    content::{Section, ABOUT_CARDS, PROFILE, SOFT_SKILLS},
    visuals::reveal,
};

#[component]
pub fn About(audio: AudioHandle) -> impl IntoView {
    view! {
        <SectionShell
            section=Section::About
            audio
            intro=PROFILE.intro
            content={move |visible: Signal<bool>| {
            view! {
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {ABOUT_CARDS
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "p-6 rounded-2xl bg-white/70 dark:bg-gray-800/70 shadow-lg backdrop-blur {}",
                                        reveal(visible.get(), i + 2),
                                    )
                                }>
                                    <div class="text-4xl mb-4">{card.icon}</div>
                                    <h3 class="text-xl font-semibold mb-2">{card.title}</h3>
                                    <p class="text-gray-600 dark:text-gray-400">{card.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
        }} />
    }
}

#[component]
pub fn SoftSkills(audio: AudioHandle) -> impl IntoView {
    view! {
        <SectionShell
            section=Section::SoftSkills
            audio
            intro="Beyond technical abilities, these personal qualities shape how I work."
            class="bg-gray-50 dark:bg-gray-900/50"
            content={move |visible: Signal<bool>| {
                view! {
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                        {SOFT_SKILLS
                            .iter()
                            .enumerate()
                            .map(|(i, card)| {
                                view! {
                                    <div
                                        class=move || {
                                            format!(
                                                "p-5 rounded-xl bg-white dark:bg-gray-800 shadow hover:-translate-y-1 hover:shadow-xl {}",
                                                reveal(visible.get(), i),
                                            )
                                        }
                                        on:mouseenter=move |_| audio.cue(Interaction::HoverSoftSkill)
                                    >
                                        <div class="text-3xl mb-3">{card.icon}</div>
                                        <h3 class="font-semibold mb-1">{card.title}</h3>
                                        <p class="text-sm text-gray-600 dark:text-gray-400">
                                            {card.body}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            }}
        />
    }
}
