use leptos::{either::Either, prelude::*};

use super::{audio::AudioHandle, section::SectionShell};
use crate::{
    audio::Interaction,
    content::{Section, CONTACT_CHANNELS},
    visuals::reveal,
};

#[component]
pub fn Contact(audio: AudioHandle) -> impl IntoView {
    let mailto = CONTACT_CHANNELS.iter().find_map(|c| c.href);

    view! {
        <SectionShell
            section=Section::Contact
            audio
            intro="Have a project in mind or just want to say hello? Reach out."
            content={move |visible: Signal<bool>| {
                view! {
                    <div class="grid gap-6 md:grid-cols-3 mb-12">
                        {CONTACT_CHANNELS
                            .iter()
                            .enumerate()
                            .map(|(i, channel)| {
                                let value = match channel.href {
                                    Some(href) => {
                                        Either::Left(
                                            view! {
                                                <a class="text-indigo-600 dark:text-indigo-300 hover:underline" href=href>
                                                    {channel.value}
                                                </a>
                                            },
                                        )
                                    }
                                    None => Either::Right(view! { <span>{channel.value}</span> }),
                                };
                                view! {
                                    <div class=move || {
                                        format!(
                                            "p-6 rounded-2xl text-center bg-white dark:bg-gray-800 shadow {}",
                                            reveal(visible.get(), i + 2),
                                        )
                                    }>
                                        <div class="text-3xl mb-2">{channel.icon}</div>
                                        <h3 class="font-semibold mb-1">{channel.label}</h3>
                                        {value}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    {mailto
                        .map(|href| {
                            view! {
                                <div class="text-center">
                                    <a
                                        href=href
                                        class="inline-block px-8 py-3 rounded-full bg-indigo-600 text-white font-semibold hover:bg-indigo-700 transition"
                                        on:click=move |_| audio.cue(Interaction::SendMessage)
                                    >
                                        "Send a Message"
                                    </a>
                                </div>
                            }
                        })}
                }
            }}
        />
    }
}
