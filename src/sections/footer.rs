// src/sections/footer.rs
// Footer: about blurb, quick links, social links, copyright.

use leptos::prelude::*;

use crate::content::{FOOTER_ABOUT, FOOTER_SOCIAL_LINKS, OWNER_NAME};
use crate::icons::SocialGlyph;
use crate::state::Section;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3>"About"</h3>
                        <p>{FOOTER_ABOUT}</p>
                    </div>

                    <div>
                        <h3>"Quick Links"</h3>
                        <ul>
                            <li><a href=Section::Projects.anchor()>"Projects"</a></li>
                            <li><a href=Section::Skills.anchor()>"Skills"</a></li>
                            <li><a href=Section::Contact.anchor()>"Contact"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3>"Connect"</h3>
                        <div class="footer-social">
                            {FOOTER_SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                        >
                                            <SocialGlyph icon=link.icon/>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}
