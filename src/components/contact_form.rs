//! Contact Form Component
//!
//! Validates locally and fakes the round trip: no request leaves the
//! browser. Fields clear once the simulated send completes.

use estate_core::{ContactField, ContactSession, SubmissionState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_site_context;

#[component]
fn FormField(
    session: RwSignal<ContactSession>,
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || session.with(|s| s.form.field(field).to_string());
    let on_input = move |ev: web_sys::Event| {
        session.update(|s| s.edit(field, event_target_value(&ev)));
    };
    let error = move || {
        session
            .with(|s| s.error_for(field))
            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })
    };

    let control = if multiline {
        view! { <textarea rows="4" prop:value=value on:input=on_input></textarea> }.into_any()
    } else {
        view! { <input type=input_type prop:value=value on:input=on_input /> }.into_any()
    };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            {control}
            {error}
        </label>
    }
}

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let ctx = use_site_context();
    let delay_ms = ctx.config.with_value(|c| c.submit_delay_ms);
    let session = RwSignal::new(ContactSession::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let accepted = session.try_update(ContactSession::submit).unwrap_or(false);
        if !accepted {
            return;
        }
        log::info!("[Contact] simulating submission");
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            session.try_update(ContactSession::complete);
        });
    };

    let submitting = move || session.with(|s| s.state == SubmissionState::Submitting);

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <h3>"Send Us a Message"</h3>
            <FormField session=session field=ContactField::Name label="Your Name" />
            <FormField session=session field=ContactField::Phone label="Phone" input_type="tel" />
            <FormField session=session field=ContactField::Email label="Email" input_type="email" />
            <FormField session=session field=ContactField::Message label="Message" multiline=true />

            <button type="submit" class="btn btn-primary btn-block" disabled=submitting>
                {move || if submitting() { "Sending..." } else { "Send Message" }}
            </button>

            <Show when=move || session.with(|s| s.state == SubmissionState::Sent)>
                <p class="form-success">"Thank you! We'll get back to you within 24 hours."</p>
            </Show>
        </form>
    }
}
