use super::call_to_action;
use crate::app::{navigate, use_app};
use leptos::prelude::*;
use rubber_grading_common::content::{CONTACT_CHANNELS, FAQS};
use rubber_grading_common::{ContactDesk, ContactForm, Page};

fn contact_field(
    desk: RwSignal<ContactDesk>,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    read: fn(&ContactForm) -> &String,
    write: fn(&mut ContactForm) -> &mut String,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || desk.with(|d| read(&d.form).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    desk.update(|d| *write(&mut d.form) = value);
                }
            />
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let app = use_app();
    let desk = RwSignal::new(ContactDesk::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(delay) = desk.try_update(ContactDesk::submit).flatten() {
            set_timeout(
                move || {
                    desk.try_update(ContactDesk::acknowledge);
                },
                delay,
            );
        }
    };

    let channels = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            let (label, value, description) = (channel.label, channel.value, channel.description);
            view! {
                <div class="card channel-card">
                    <h3 class="text-muted">{label}</h3>
                    <p>{value}</p>
                    <p class="text-muted">{description}</p>
                </div>
            }
        })
        .collect_view();

    let faqs = FAQS
        .iter()
        .map(|faq| {
            let (question, answer) = (faq.question, faq.answer);
            view! {
                <div class="faq">
                    <h3>{question}</h3>
                    <p class="text-muted">{answer}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="page contact-page">
            <button class="btn-ghost" on:click=move |_| navigate(app, Page::Home)>
                "← Back to Home"
            </button>

            <div class="page-title">
                <h1>"Get in Touch"</h1>
                <p class="text-muted">
                    "Have questions about our rubber grading system? We're here to help!"
                </p>
            </div>

            <div class="grid-3">{channels}</div>

            <div class="grid-2">
                <div class="card">
                    <h2>"Send us a Message"</h2>
                    <Show
                        when=move || desk.with(|d| d.is_submitted())
                        fallback=move || view! {
                            <form on:submit=on_submit>
                                {contact_field(desk, "Full Name *", "text", "Enter your full name", |f| &f.name, |f| &mut f.name)}
                                {contact_field(desk, "Email *", "email", "Enter your email", |f| &f.email, |f| &mut f.email)}
                                {contact_field(desk, "Phone Number", "tel", "Enter your phone number", |f| &f.phone, |f| &mut f.phone)}
                                {contact_field(desk, "Subject *", "text", "Subject of your message", |f| &f.subject, |f| &mut f.subject)}
                                <div class="form-field">
                                    <label>"Message *"</label>
                                    <textarea
                                        rows="5"
                                        placeholder="Tell us more about your inquiry..."
                                        prop:value=move || desk.with(|d| d.form.message.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            desk.update(|d| d.form.message = value);
                                        }
                                    />
                                </div>
                                <button type="submit" class="btn btn-primary btn-block">
                                    "Send Message"
                                </button>
                            </form>
                        }
                    >
                        <div class="confirmation">
                            <h3>"Message Sent Successfully!"</h3>
                            <p class="text-muted">
                                "Thank you for reaching out. We'll respond within 24 hours."
                            </p>
                        </div>
                    </Show>
                </div>

                <div class="card">
                    <h2>"Frequently Asked Questions"</h2>
                    <p class="text-muted">"Quick answers to common questions"</p>
                    {faqs}
                    <p class="text-muted">"Still have questions? We're here to help!"</p>
                    <button class="btn btn-outline btn-block" on:click=move |_| navigate(app, Page::About)>
                        "Learn More About Us"
                    </button>
                </div>
            </div>

            {call_to_action(
                app,
                "Ready to Start Grading?",
                "Experience accurate rubber sheet grading today",
                &[("Upload Your First Sheet", Page::Upload)],
            )}
        </section>
    }
}
