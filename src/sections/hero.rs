// src/sections/hero.rs
// Hero: headline, availability badge, calls to action, social links.
// Animations here play on load, not on viewport entry.

use leptos::prelude::*;

use crate::content::{HERO_BADGE, HERO_BLURB, OWNER_NAME, SOCIAL_LINKS};
use crate::icons::SocialGlyph;
use crate::state::Section;
use crate::viewport::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-inner">
                <span class="hero-badge">{HERO_BADGE}</span>

                <h1 class="hero-title">
                    "Hi, I'm " <span class="accent">{OWNER_NAME}</span>
                </h1>

                <p class="hero-blurb">{HERO_BLURB}</p>

                <div class="hero-actions">
                    <button
                        class="btn btn-primary large"
                        on:click=move |_| scroll_to_section(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                    <a href=Section::Projects.anchor() class="btn btn-outline large">
                        "View Projects"
                    </a>
                </div>

                <div class="hero-social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="social-button"
                                    aria-label=link.label
                                >
                                    <SocialGlyph icon=link.icon/>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            // Scroll indicator
            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-mouse">
                    <div class="scroll-dot"></div>
                </div>
            </div>
        </section>
    }
}
