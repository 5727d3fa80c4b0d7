use leptos::prelude::*;

use super::{audio::AudioHandle, section::SectionShell};
use crate::{
    content::{Section, EXPERIENCES},
    visuals::reveal,
};

#[component]
pub fn Experience(audio: AudioHandle) -> impl IntoView {
    view! {
        <SectionShell
            section=Section::Experience
            audio
            class="bg-gray-50 dark:bg-gray-900/50"
            content={move |visible: Signal<bool>| {
                view! {
                    <ol class="relative border-l-2 border-indigo-300 dark:border-indigo-700 ml-4 space-y-10">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(i, job)| {
                                view! {
                                    <li class=move || format!("ml-8 {}", reveal(visible.get(), i + 1))>
                                        <span class="absolute -left-[9px] w-4 h-4 rounded-full bg-indigo-500"></span>
                                        <p class="text-sm text-indigo-600 dark:text-indigo-300">
                                            {job.period}
                                        </p>
                                        <h3 class="text-xl font-semibold">{job.title}</h3>
                                        <p class="text-gray-500 mb-2">
                                            {format!("{} · {}", job.organization, job.location)}
                                        </p>
                                        <p class="text-gray-700 dark:text-gray-300 mb-3">
                                            {job.description}
                                        </p>
                                        <ul class="flex flex-wrap gap-2">
                                            {job
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <li class="text-xs px-3 py-1 rounded-full bg-indigo-100 dark:bg-indigo-900/60">
                                                            {*skill}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                }
            }}
        />
    }
}
