#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod audio;
pub mod carousel;
pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod presence;
pub mod projects;
pub mod storage;
pub mod theme;
pub mod typewriter;
pub mod visuals;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second init (hot reload) is harmless
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
