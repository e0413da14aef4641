use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION, SOCIAL_LINKS};
use crate::state::{ContactForm, FormField};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub form: ContactForm,
    pub submitted: bool,
    pub on_edit: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let on_name = props.on_edit.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (FormField::Name, input.value())
    });
    let on_email = props.on_edit.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (FormField::Email, input.value())
    });
    let on_project = props.on_edit.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        (FormField::Project, input.value())
    });
    // The browser has already enforced `required` by the time this fires.
    let on_submit = props.on_submit.reform(|e: SubmitEvent| {
        e.prevent_default();
    });

    html! {
        <section id="contact">
            <div class="section section-pad">
                <div class="contact-grid">
                    <div>
                        <div class="section-label">{"Get In Touch"}</div>
                        <h2>{"Start Your "}<span class="accent">{"Project"}</span>{" Today"}</h2>
                        <div class="divider"></div>
                        <p class="contact-copy">
                            {"Have an idea? A deadline? A half-finished product? Let's talk. I respond within a few hours and can typically start within 24 hours."}
                        </p>
                        <div class="contact-detail">{format!("📧 {}", CONTACT_EMAIL)}</div>
                        <div class="contact-detail">{format!("📍 {}", CONTACT_LOCATION)}</div>
                        <div class="social-row">
                            { for SOCIAL_LINKS.iter().map(|name| html! {
                                <a key={*name} href="#" class="social-btn">{*name}</a>
                            }) }
                        </div>
                    </div>
                    <div>
                        {
                            if props.submitted {
                                html! {
                                    <div class="success-msg">
                                        <div class="success-check">{"✓"}</div>
                                        <div>{"Message received! I'll be in touch within a few hours."}</div>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form class="contact-form" onsubmit={on_submit}>
                                        <input
                                            required=true
                                            placeholder="Your Name"
                                            value={props.form.name.clone()}
                                            oninput={on_name}
                                        />
                                        <input
                                            required=true
                                            type="email"
                                            placeholder="Email Address"
                                            value={props.form.email.clone()}
                                            oninput={on_email}
                                        />
                                        <textarea
                                            required=true
                                            placeholder="Describe your project — what are you building, what's the timeline, budget?"
                                            value={props.form.project.clone()}
                                            oninput={on_project}
                                        />
                                        <button type="submit" class="btn-primary btn-block">
                                            {"Get a Free Quote →"}
                                        </button>
                                    </form>
                                }
                            }
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
