// src/sections/contact.rs
// Contact info cards plus the relay-backed form. The form owns the whole
// submission lifecycle; nothing outside this component reads its state.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::content::{CONTACT_LEAD, OWNER_EMAIL, OWNER_LOCATION};
use crate::icons::{MailIcon, MapPinIcon, SendIcon};
use crate::relay;
use crate::state::{ContactForm, Field, Section, SubmissionState, SUCCESS_FEEDBACK_MS};
use crate::viewport::observe_section_entry;

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = observe_section_entry(section_ref, Section::Contact);

    view! {
        <section
            id=Section::Contact.id()
            node_ref=section_ref
            class="section contact reveal"
            class:visible=move || entered.get()
        >
            <div class="section-inner">
                <div class="section-heading">
                    <h2>"Get In Touch"</h2>
                    <p>{CONTACT_LEAD}</p>
                </div>

                <div class="contact-layout">
                    <div class="contact-cards">
                        <div class="info-card">
                            <span class="info-icon"><MailIcon/></span>
                            <div>
                                <h3>"Email"</h3>
                                <a href=format!("mailto:{OWNER_EMAIL}")>{OWNER_EMAIL}</a>
                            </div>
                        </div>

                        <div class="info-card">
                            <span class="info-icon"><MapPinIcon/></span>
                            <div>
                                <h3>"Location"</h3>
                                <p>{OWNER_LOCATION}</p>
                            </div>
                        </div>

                        <div class="info-card highlight">
                            <h3>"Let's Work Together"</h3>
                            <p>
                                "I'm passionate about learning and contributing to innovative \
                                projects. Let's connect and explore opportunities!"
                            </p>
                        </div>
                    </div>

                    <div class="contact-form-panel">
                        <ContactFormView/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    // Resolved once at startup; None means the relay was never configured
    // and the form stays non-operational.
    let client = relay::client();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(client) = client else {
            return;
        };
        let message = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(message)) => message,
            Some(Err(rejected)) => {
                log::warn!("submission rejected: {rejected}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            match client.send(&message).await {
                Ok(()) => {
                    let Some(token) = form.try_update(|f| f.resolve_success()) else {
                        return;
                    };
                    TimeoutFuture::new(SUCCESS_FEEDBACK_MS).await;
                    // try_update so a timer outliving the form is harmless.
                    form.try_update(|f| f.acknowledge_success(token));
                }
                Err(err) => {
                    log::error!("mail relay send failed: {err}; detail: {}", err.detail());
                    form.try_update(|f| f.resolve_failure());
                }
            }
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="field-row">
                <div class="field">
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="Your name"
                        required=true
                        prop:value=move || form.with(|f| f.field(Field::Name).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(Field::Name, event_target_value(&ev)))
                        }
                    />
                </div>
                <div class="field">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="your.email@example.com"
                        required=true
                        prop:value=move || form.with(|f| f.field(Field::Email).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(Field::Email, event_target_value(&ev)))
                        }
                    />
                </div>
            </div>

            <div class="field">
                <label for="subject">"Subject"</label>
                <input
                    id="subject"
                    type="text"
                    placeholder="What's this about?"
                    required=true
                    prop:value=move || form.with(|f| f.field(Field::Subject).to_string())
                    on:input=move |ev| {
                        form.update(|f| f.update_field(Field::Subject, event_target_value(&ev)))
                    }
                />
            </div>

            <div class="field">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    rows="6"
                    placeholder="Tell me about your project or opportunity..."
                    required=true
                    prop:value=move || form.with(|f| f.field(Field::Body).to_string())
                    on:input=move |ev| {
                        form.update(|f| f.update_field(Field::Body, event_target_value(&ev)))
                    }
                ></textarea>
            </div>

            <div class="form-footer">
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || form.with(|f| f.is_submitting()) || client.is_none()
                >
                    {move || {
                        if form.with(|f| f.is_submitting()) {
                            view! {
                                <span class="spinner" aria-hidden="true"></span>
                                "Sending..."
                            }
                                .into_any()
                        } else {
                            view! {
                                <SendIcon/>
                                "Send Message"
                            }
                                .into_any()
                        }
                    }}
                </button>

                {move || match form.with(|f| f.state()) {
                    SubmissionState::Succeeded => {
                        Some(
                            view! {
                                <p class="form-status success">"Message sent successfully!"</p>
                            }
                                .into_any(),
                        )
                    }
                    SubmissionState::Failed => {
                        Some(
                            view! {
                                <p class="form-status error">
                                    "Something went wrong. Please try again."
                                </p>
                            }
                                .into_any(),
                        )
                    }
                    _ => None,
                }}

                {client
                    .is_none()
                    .then(|| {
                        view! {
                            <p class="form-status muted">
                                "The contact form is currently unavailable."
                            </p>
                        }
                    })}
            </div>
        </form>
    }
}
