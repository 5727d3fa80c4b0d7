mod about;
mod assistant;
mod audio;
mod background;
mod contact;
mod experience;
mod hero;
mod presence;
mod projects;
mod section;
mod skills;
mod storage;
mod theme;

use chrono::Timelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::{About, SoftSkills};
use assistant::Assistant;
use audio::{AmbientAudio, AudioHandle};
use background::{DynamicBackground, Footer, Loading};
use contact::Contact;
use experience::Experience;
use hero::Hero;
use presence::SocialPresence;
use projects::Projects;
use skills::Skills;
use theme::{ThemeHandle, TimeBasedTheme};

use crate::content::{PersonSchema, PROFILE};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script
                    type="application/ld+json"
                    inner_html=PersonSchema::for_profile(&PROFILE).to_json().unwrap_or_default()
                ></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.description() />

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site is one scrolling page. Theme and audio are owned here and
/// handed to each part that needs them.
#[component]
fn HomePage() -> impl IntoView {
    let theme = ThemeHandle::new();
    let audio = AudioHandle::new();

    view! {
        <Title text="Portfolio" />
        <Loading />
        <TimeBasedTheme theme />
        <AmbientAudio audio />
        <DynamicBackground theme>
            <main>
                <Hero theme audio />
                <About audio />
                <Skills audio />
                <SoftSkills audio />
                <Experience audio />
                <Projects audio />
                <Contact audio />
            </main>
            <Footer />
        </DynamicBackground>
        <SocialPresence />
        <Assistant audio />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold">"Page not found."</h1>
            <a href="/" class="text-indigo-600 hover:underline">
                "Back to the portfolio"
            </a>
        </main>
    }
}

/// Local wall-clock hour, 0..=23.
pub(crate) fn local_hour() -> u32 {
    chrono::Local::now().hour()
}

/// Milliseconds since the Unix epoch.
pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
