use leptos::{either::Either, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{audio::AudioHandle, local_hour, section::scroll_to};
use crate::{
    audio::Interaction,
    chat::{self, ChatWidget, DayPart, QuickReply, Ticket},
    config::{GREETING_DELAY_MS, HELP_DELAY_MS},
    content::PROFILE,
};

/// Floating assistant in the bottom-right corner. Hosts the mute toggle.
#[component]
pub fn Assistant(audio: AudioHandle) -> impl IntoView {
    let chat = RwSignal::new(ChatWidget::new());

    let UseTimeoutFnReturn {
        start: start_greeting,
        stop: stop_greeting,
        ..
    } = use_timeout_fn(
        move |ticket: Ticket| {
            let greeting = DayPart::for_hour(local_hour()).greeting();
            chat.update(|c| {
                c.deliver(ticket, greeting);
            });
        },
        GREETING_DELAY_MS,
    );
    let UseTimeoutFnReturn {
        start: start_help,
        stop: stop_help,
        ..
    } = use_timeout_fn(
        move |ticket: Ticket| {
            let reply = chat::random_help(&mut rand::rng());
            chat.update(|c| {
                c.deliver(ticket, reply);
            });
        },
        HELP_DELAY_MS,
    );

    let stop_timers = move || {
        stop_greeting();
        stop_help();
    };

    let toggle = {
        let stop_timers = stop_timers.clone();
        move |_| {
            audio.cue(Interaction::ChatButton);
            match chat.try_update(ChatWidget::toggle).flatten() {
                Some(ticket) => start_greeting(ticket),
                None => stop_timers(),
            }
        }
    };
    let close = {
        let stop_timers = stop_timers.clone();
        move |_| {
            chat.update(ChatWidget::close);
            stop_timers();
        }
    };
    let ask = {
        let stop_timers = stop_timers.clone();
        move |_| {
            audio.cue(Interaction::ChatButton);
            if let Some(ticket) = chat.try_update(ChatWidget::ask_for_help).flatten() {
                stop_timers();
                start_help(ticket);
            }
        }
    };
    let choose = move |reply: QuickReply| {
        audio.cue(Interaction::ChatButton);
        if let Some(section) = chat.try_update(|c| c.choose(reply)) {
            stop_timers();
            scroll_to(section);
        }
    };

    let panel_class = move || {
        if chat.with(ChatWidget::is_open) {
            "absolute bottom-20 right-0 w-80 origin-bottom-right scale-100 opacity-100 transition-all duration-300"
        } else {
            "absolute bottom-20 right-0 w-80 origin-bottom-right scale-90 opacity-0 pointer-events-none transition-all duration-300"
        }
    };

    let body = move || match chat.with(ChatWidget::message) {
        Some(message) => Either::Left(view! {
            <p class="text-sm leading-relaxed">{message.text}</p>
        }),
        None => Either::Right(view! {
            <div class="flex gap-1 py-2" aria-label="Typing">
                <span class="w-2 h-2 rounded-full bg-gray-400 animate-bounce"></span>
                <span class="w-2 h-2 rounded-full bg-gray-400 animate-bounce delay-100"></span>
                <span class="w-2 h-2 rounded-full bg-gray-400 animate-bounce delay-200"></span>
            </div>
        }),
    };

    let replies = move || {
        chat.with(ChatWidget::shows_quick_replies).then(|| {
            view! {
                <div class="flex flex-wrap gap-2 mt-3">
                    {QuickReply::ALL
                        .into_iter()
                        .map(|reply| {
                            let choose = choose.clone();
                            view! {
                                <button
                                    class="text-xs px-3 py-1 rounded-full bg-indigo-100 dark:bg-indigo-900/60 hover:bg-indigo-200 dark:hover:bg-indigo-800"
                                    on:click=move |_| choose(reply)
                                >
                                    {reply.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    };

    let footer = move || {
        chat.with(ChatWidget::offers_help).then(|| {
            view! {
                <div class="px-4 py-3 border-t border-gray-200 dark:border-gray-700">
                    <button
                        class="w-full text-xs px-3 py-2 rounded-full border border-indigo-300 dark:border-indigo-700 hover:bg-indigo-50 dark:hover:bg-indigo-900/40"
                        on:click=ask.clone()
                    >
                        "Ask something else"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="fixed bottom-4 right-4 z-40">
            <div class=panel_class>
                <div class="rounded-2xl shadow-2xl bg-white dark:bg-gray-800 overflow-hidden">
                    <div class="flex items-center justify-between px-4 py-3 bg-indigo-600 text-white">
                        <span class="font-semibold">{format!("{}'s assistant", PROFILE.name)}</span>
                        <div class="flex items-center gap-2">
                            <button
                                aria-label=move || if audio.is_muted() { "Unmute" } else { "Mute" }
                                on:click=move |_| audio.toggle_mute()
                            >
                                {move || if audio.is_muted() { "🔇" } else { "🔊" }}
                            </button>
                            <button aria-label="Close" on:click=close>
                                "×"
                            </button>
                        </div>
                    </div>
                    <div class="p-4">{body} {replies}</div>
                    {footer}
                </div>
            </div>
            <button
                class="w-16 h-16 rounded-full bg-gradient-to-br from-indigo-500 to-pink-500 text-white text-2xl font-bold shadow-xl hover:scale-105 transition-transform"
                aria-label="Open assistant"
                on:click=toggle
            >
                {PROFILE.initial}
            </button>
        </div>
    }
}
