// src/sections/skills.rs
// Skills grid, one card per category.

use leptos::html;
use leptos::prelude::*;

use crate::content::{SKILLS_LEAD, SKILL_CATEGORIES};
use crate::state::Section;
use crate::viewport::observe_section_entry;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = observe_section_entry(section_ref, Section::Skills);

    view! {
        <section
            id=Section::Skills.id()
            node_ref=section_ref
            class="section skills reveal"
            class:visible=move || entered.get()
        >
            <div class="section-inner">
                <div class="section-heading">
                    <h2>"Skills & Technologies"</h2>
                    <p>{SKILLS_LEAD}</p>
                </div>

                <div class="skill-grid">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="skill-card">
                                    <h3>{category.title}</h3>
                                    <ul>
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li>
                                                        <span class="bullet"></span>
                                                        {*skill}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
