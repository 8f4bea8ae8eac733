// src/sections/projects.rs
// Featured projects grid. The entry animation is gated by the one-shot
// section visibility flag.

use leptos::html;
use leptos::prelude::*;

use crate::content::{Project, PROJECTS, PROJECTS_LEAD};
use crate::icons::{ExternalLinkIcon, GithubIcon};
use crate::state::Section;
use crate::viewport::observe_section_entry;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = observe_section_entry(section_ref, Section::Projects);

    view! {
        <section
            id=Section::Projects.id()
            node_ref=section_ref
            class="section projects reveal"
            class:visible=move || entered.get()
        >
            <div class="section-inner">
                <div class="section-heading">
                    <h2>"Featured Projects"</h2>
                    <p>{PROJECTS_LEAD}</p>
                </div>

                <div class="project-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-media">
                <img src=project.image alt=project.title loading="lazy"/>
                <div class="project-links">
                    <a
                        href=project.demo_link
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Live demo"
                    >
                        <ExternalLinkIcon/>
                    </a>
                    <a
                        href=project.source_link
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Source code"
                    >
                        <GithubIcon/>
                    </a>
                </div>
            </div>

            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tag-row">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{*tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
