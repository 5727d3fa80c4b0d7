use leptos::prelude::*;

use super::{audio::AudioHandle, section::SectionShell};
use crate::{
    audio::Interaction,
    content::{Section, SkillTab},
    visuals::reveal,
};

#[component]
pub fn Skills(audio: AudioHandle) -> impl IntoView {
    let active = RwSignal::new(SkillTab::default());

    view! {
        <SectionShell
            section=Section::Skills
            audio
            intro="The tools and languages I reach for."
            content={move |visible: Signal<bool>| {
                view! {
                    <div class=move || {
                        format!("flex flex-wrap justify-center gap-3 mb-10 {}", reveal(visible.get(), 2))
                    }>
                        {SkillTab::ALL
                            .into_iter()
                            .map(|tab| {
                                let class = move || {
                                    if active.get() == tab {
                                        "px-5 py-2 rounded-full bg-indigo-600 text-white shadow"
                                    } else {
                                        "px-5 py-2 rounded-full bg-gray-200 dark:bg-gray-800 hover:bg-gray-300 dark:hover:bg-gray-700"
                                    }
                                };
                                view! {
                                    <button
                                        class=class
                                        on:click=move |_| {
                                            audio.cue(Interaction::SelectTab);
                                            active.set(tab);
                                        }
                                    >
                                        <span class="mr-2">{tab.icon()}</span>
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="max-w-2xl mx-auto space-y-6">
                        {move || {
                            active
                                .get()
                                .skills()
                                .iter()
                                .map(|skill| {
                                    let width = format!("width: {}%", skill.level.min(100));
                                    view! {
                                        <div>
                                            <div class="flex justify-between mb-1">
                                                <span class="font-medium">{skill.name}</span>
                                                <span class="text-sm text-gray-500">
                                                    {format!("{}%", skill.level)}
                                                </span>
                                            </div>
                                            <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                                                <div
                                                    class="h-full rounded-full bg-gradient-to-r from-indigo-500 to-pink-500 transition-all duration-1000"
                                                    style=width
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                }
            }}
        />
    }
}
