// src/sections/header.rs
// Fixed header: sticky style past the scroll threshold, desktop nav,
// mobile menu that closes after any navigation action.

use leptos::prelude::*;

use crate::content::{BRAND, NAV_ITEMS};
use crate::icons::{CloseIcon, MenuIcon};
use crate::state::{NavMenu, Section, HEADER_SCROLL_THRESHOLD};
use crate::viewport::{scroll_to_section, use_scroll_threshold};

#[component]
pub fn Header() -> impl IntoView {
    let scrolled = use_scroll_threshold(HEADER_SCROLL_THRESHOLD);
    let menu = RwSignal::new(NavMenu::default());

    view! {
        <header class=move || {
            if scrolled.get() { "site-header scrolled" } else { "site-header" }
        }>
            <nav class="header-inner">
                <a href="#" class="brand">{BRAND}</a>

                // Desktop navigation
                <ul class="nav-desktop">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a href=item.href() class="nav-link">{item.label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| scroll_to_section(Section::Contact)
                        >
                            "Contact"
                        </button>
                    </li>
                </ul>

                // Mobile menu button
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || if menu.with(|m| m.is_open()) { "true" } else { "false" }
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    {move || {
                        if menu.with(|m| m.is_open()) {
                            view! { <CloseIcon/> }.into_any()
                        } else {
                            view! { <MenuIcon/> }.into_any()
                        }
                    }}
                </button>
            </nav>

            // Mobile navigation panel
            <div class=move || {
                if menu.with(|m| m.is_open()) { "nav-mobile open" } else { "nav-mobile" }
            }>
                <ul>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a
                                        href=item.href()
                                        class="nav-link"
                                        on:click=move |_| menu.update(|m| m.close())
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <button
                            class="btn btn-primary wide"
                            on:click=move |_| {
                                scroll_to_section(Section::Contact);
                                menu.update(|m| m.close());
                            }
                        >
                            "Contact"
                        </button>
                    </li>
                </ul>
            </div>
        </header>
    }
}
