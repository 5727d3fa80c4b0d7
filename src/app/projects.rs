use leptos::{
    either::{Either, EitherOf3},
    ev, html,
    prelude::*,
};

use leptos_router::hooks::use_location;

use super::{
    audio::{play_detached, AudioHandle},
    section::{scroll_to, SectionShell},
};
use crate::{
    audio::Interaction,
    carousel::Gallery,
    content::Section,
    error::PortfolioError,
    projects::{self, CategoryFilter, Media, Project, PROJECTS},
    visuals::reveal,
};

#[component]
pub fn Projects(audio: AudioHandle) -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::default());
    let selected = RwSignal::new(None::<&'static Project>);
    let gallery = RwSignal::new(Gallery::new(&PROJECTS));

    let open = move |project: &'static Project| {
        audio.cue(Interaction::OpenProject);
        selected.set(Some(project));
    };

    // QR codes on printed work link to `/#project-<id>`
    let location = use_location();
    Effect::new(move |_| match projects::from_anchor(&PROJECTS, &location.hash.get()) {
        Some(Ok(project)) => {
            selected.set(Some(project));
            scroll_to(Section::Projects);
        }
        Some(Err(e)) => log::warn!("{e}"),
        None => {}
    });

    view! {
        <SectionShell
            section=Section::Projects
            audio
            intro="A selection of design, photography, video and code work."
            content={move |visible: Signal<bool>| {
                view! {
                    <div class=move || {
                        format!("flex flex-wrap justify-center gap-3 mb-10 {}", reveal(visible.get(), 2))
                    }>
                        {CategoryFilter::CHOICES
                            .into_iter()
                            .map(|choice| {
                                let class = move || {
                                    if filter.get() == choice {
                                        "px-4 py-2 rounded-full bg-indigo-600 text-white"
                                    } else {
                                        "px-4 py-2 rounded-full bg-gray-200 dark:bg-gray-800 hover:bg-gray-300 dark:hover:bg-gray-700"
                                    }
                                };
                                let icon = match choice {
                                    CategoryFilter::All => "✦",
                                    CategoryFilter::Only(category) => category.icon(),
                                };
                                view! {
                                    <button
                                        class=class
                                        on:click=move |_| {
                                            audio.cue(Interaction::SelectFilter);
                                            filter.set(choice);
                                        }
                                    >
                                        <span class="mr-2">{icon}</span>
                                        {choice.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                        {move || {
                            projects::filter(&PROJECTS, filter.get())
                                .into_iter()
                                .enumerate()
                                .map(|(i, project)| {
                                    let featured = i == 0;
                                    view! {
                                        <ProjectCard
                                            project
                                            featured
                                            audio
                                            on_open=Callback::new(move |_| open(project))
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    {move || {
                        selected
                            .get()
                            .map(|project| {
                                view! {
                                    <ProjectDialog
                                        project
                                        gallery
                                        audio
                                        on_close=Callback::new(move |_| selected.set(None))
                                    />
                                }
                            })
                    }}
                }
            }}
        />
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    featured: bool,
    audio: AudioHandle,
    on_open: Callback<()>,
) -> impl IntoView {
    let class = if featured {
        "group md:col-span-2 lg:col-span-2 rounded-2xl overflow-hidden shadow-xl bg-white dark:bg-gray-800 cursor-pointer ring-2 ring-indigo-500/40 hover:[transform:perspective(1000px)_rotateX(2deg)_rotateY(-2deg)] transition-transform duration-500"
    } else {
        "group rounded-2xl overflow-hidden shadow-lg bg-white dark:bg-gray-800 cursor-pointer hover:-translate-y-1 transition-transform"
    };

    view! {
        <article
            class=class
            on:click=move |_| on_open.run(())
            on:mouseenter=move |_| {
                if featured {
                    audio.cue(Interaction::HoverFeaturedCard);
                }
            }
        >
            <div class="relative aspect-video overflow-hidden">
                <img
                    src=project.cover()
                    alt=project.title
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
                <span class="absolute top-3 left-3 px-3 py-1 rounded-full text-xs bg-black/60 text-white">
                    {format!("{} {}", project.category.icon(), project.category.label())}
                </span>
                {project
                    .has_video()
                    .then(|| {
                        view! {
                            <span class="absolute inset-0 flex items-center justify-center text-5xl text-white/90">
                                "▶"
                            </span>
                        }
                    })}
            </div>
            <div class="p-5">
                <h3 class="text-lg font-semibold mb-1">{project.title}</h3>
                <p class="text-sm text-gray-600 dark:text-gray-400 line-clamp-2">
                    {project.description}
                </p>
            </div>
        </article>
    }
}

fn report(result: Result<usize, PortfolioError>) {
    if let Err(e) = result {
        log::warn!("gallery: {e}");
    }
}

#[component]
fn ProjectDialog(
    project: &'static Project,
    gallery: RwSignal<Gallery>,
    audio: AudioHandle,
    on_close: Callback<()>,
) -> impl IntoView {
    let video_ref = NodeRef::<html::Video>::new();
    // follows the element's own play/pause events
    let playing = RwSignal::new(false);

    let stop_video = move || {
        if let Some(video) = video_ref.get_untracked() {
            let _ = video.pause();
        }
    };
    let step = move |forward: bool| {
        audio.cue(Interaction::ChangeSlide);
        stop_video();
        gallery.update(|g| {
            report(if forward {
                g.next(project.id)
            } else {
                g.prev(project.id)
            })
        });
    };
    let jump = move |index: usize| {
        audio.cue(Interaction::ChangeSlide);
        stop_video();
        gallery.update(|g| report(g.select(project.id, index)));
    };
    let toggle_video = move |_: ev::MouseEvent| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        audio.cue(Interaction::ToggleVideo);
        if video.paused() {
            play_detached(&video);
        } else {
            let _ = video.pause();
        }
    };
    let close = move || {
        stop_video();
        on_close.run(());
    };

    let index = move || gallery.with(|g| g.index(project.id));
    let carousel = gallery.with_untracked(|g| g.get(project.id));
    let has_navigation = carousel.is_some_and(|c| c.has_navigation());
    let slides = carousel.map(|c| c.len()).unwrap_or(0);

    let slide = move || match project.media.get(index()) {
        Some(Media::Image { url }) => EitherOf3::A(view! {
            <img src=*url alt=project.title class="w-full h-full object-contain bg-black" />
        }),
        Some(Media::Video { url, poster }) => EitherOf3::B(view! {
            <div class="relative w-full h-full bg-black">
                <video
                    node_ref=video_ref
                    src=*url
                    poster=*poster
                    class="w-full h-full object-contain"
                    on:play=move |_| playing.set(true)
                    on:pause=move |_| playing.set(false)
                    on:ended=move |_| playing.set(false)
                ></video>
                <button
                    class="absolute bottom-4 left-4 w-12 h-12 rounded-full bg-white/80 text-black text-xl"
                    aria-label=move || if playing.get() { "Pause video" } else { "Play video" }
                    on:click=toggle_video
                >
                    {move || if playing.get() { "⏸" } else { "▶" }}
                </button>
            </div>
        }),
        None => EitherOf3::C(view! {
            <div class="w-full h-full flex items-center justify-center text-gray-400">
                "No media"
            </div>
        }),
    };

    let navigation = has_navigation.then(|| {
        view! {
            <button
                class="absolute left-3 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80 text-black"
                aria-label="Previous slide"
                on:click=move |_| step(false)
            >
                "‹"
            </button>
            <button
                class="absolute right-3 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80 text-black"
                aria-label="Next slide"
                on:click=move |_| step(true)
            >
                "›"
            </button>
            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2">
                {(0..slides)
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if index() == i {
                                        "w-3 h-3 rounded-full bg-white"
                                    } else {
                                        "w-3 h-3 rounded-full bg-white/40"
                                    }
                                }
                                aria-label=format!("Slide {}", i + 1)
                                on:click=move |_| jump(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    let qr_note = if project.qr_code {
        Either::Left(view! {
            <p class="mt-4 p-3 rounded-lg bg-indigo-50 dark:bg-indigo-900/40 text-sm">
                "📱 The printed piece carries a QR code that opens it right here: "
                <code class="text-xs">{format!("/{}", project.anchor())}</code>
            </p>
        })
    } else {
        Either::Right(())
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4"
            on:click=move |_| close()
        >
            <div
                class="relative w-full max-w-4xl rounded-2xl bg-white dark:bg-gray-900 shadow-2xl overflow-hidden"
                on:click=|e| e.stop_propagation()
            >
                <div class="relative aspect-video">{slide} {navigation}</div>
                <div class="p-6">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <p class="text-sm text-indigo-600 dark:text-indigo-300">
                                {format!("{} {}", project.category.icon(), project.category.label())}
                            </p>
                            <h3 class="text-2xl font-bold">{project.title}</h3>
                        </div>
                        <button
                            class="text-2xl leading-none px-2"
                            aria-label="Close"
                            on:click=move |_| close()
                        >
                            "×"
                        </button>
                    </div>
                    <p class="mt-3 text-gray-700 dark:text-gray-300">{project.description}</p>
                    {qr_note}
                </div>
            </div>
        </div>
    }
}
