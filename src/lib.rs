// src/lib.rs
// Single-page portfolio - Leptos WASM frontend (CSR)

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

pub mod content;
mod icons;
pub mod relay;
pub mod sections;
pub mod state;
pub mod viewport;

use sections::{ContactSection, Footer, Header, Hero, ProjectsSection, SkillsSection};
use viewport::provide_section_visibility;

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("portfolio starting...");

    // Mount the app
    leptos::mount::mount_to_body(App);
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_section_visibility();

    // The relay must be configured before the page becomes interactive.
    // Failure disables the contact feature only; everything else renders.
    if let Err(err) = relay::init() {
        log::error!("contact feature disabled: {err}");
    }

    view! {
        <Title text=content::PAGE_TITLE/>
        <Header/>
        <main>
            <Hero/>
            <ProjectsSection/>
            <SkillsSection/>
            <ContactSection/>
        </main>
        <Footer/>
    }
}
