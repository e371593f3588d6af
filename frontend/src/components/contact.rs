use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{self, CONTACT_EMAIL, SUPPORT_EMAIL};
use crate::content::CONTACT_SERVICES;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("could not reach the form service: {0}")]
    Request(String),
    #[error("the form service declined the message: {0}")]
    Rejected(String),
    #[error("unexpected reply from the form service: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ContactError {
    fn from(err: gloo_net::Error) -> Self {
        ContactError::Request(err.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Service,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for (label, value) in [("Name", &self.name), ("Email", &self.email), ("Message", &self.message)] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// JSON body for the intake service. Empty optional fields are sent as "".
    pub fn payload(&self, access_key: &str) -> Value {
        json!({
            "access_key": access_key,
            "name": self.name.trim(),
            "email": self.email.trim(),
            "company": self.company.trim(),
            "service": self.service,
            "message": self.message.trim(),
        })
    }
}

/// `local@domain.tld` with no whitespace and a non-empty label on each side of every dot.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[derive(Deserialize)]
struct IntakeReply {
    success: bool,
    #[serde(default)]
    message: String,
}

pub async fn submit(form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;
    let response = Request::post(config::form_endpoint())
        .header("Accept", "application/json")
        .json(&form.payload(config::form_access_key()))?
        .send()
        .await?;
    let reply: IntakeReply = response
        .json()
        .await
        .map_err(|e| ContactError::Decode(e.to_string()))?;
    if reply.success {
        Ok(())
    } else {
        Err(ContactError::Rejected(reply.message))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Finished(Result<(), ContactError>),
}

pub struct Contact {
    form: ContactForm,
    state: SubmitState,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::default(),
            state: SubmitState::Idle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.form.set(field, value);
                if matches!(self.state, SubmitState::Failed(_) | SubmitState::Sent) {
                    self.state = SubmitState::Idle;
                }
                true
            }
            ContactMsg::Submit => {
                if self.state == SubmitState::Sending {
                    return false;
                }
                if let Err(e) = self.form.validate() {
                    self.state = SubmitState::Failed(e.to_string());
                    return true;
                }
                self.state = SubmitState::Sending;
                let form = self.form.clone();
                ctx.link().send_future(async move { ContactMsg::Finished(submit(&form).await) });
                true
            }
            ContactMsg::Finished(Ok(())) => {
                log::info!("contact: inquiry sent");
                self.form = ContactForm::default();
                self.state = SubmitState::Sent;
                true
            }
            ContactMsg::Finished(Err(e)) => {
                log::warn!("contact: submission failed: {e}");
                self.state = SubmitState::Failed(e.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let edit_input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::Edit(field, input.value())
            })
        };
        let onmessage = link.callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Message, input.value())
        });
        let onservice = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Service, select.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let sending = self.state == SubmitState::Sending;
        let mailto = format!(
            "mailto:{CONTACT_EMAIL}?subject={}",
            urlencoding::encode("Project inquiry from codbyt.com")
        );

        html! {
            <section id="contact" class="contact">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Get In "}<span class="accent">{"Touch"}</span></h2>
                        <p>
                            {"Ready to transform your business? Let's discuss your project and \
                              explore how we can help you achieve your goals."}
                        </p>
                    </div>
                    <div class="contact-grid">
                        <form class="contact-form" {onsubmit}>
                            <h3>{"Send us a message"}</h3>
                            <div class="form-row">
                                <label>
                                    {"Full Name *"}
                                    <input type="text" name="name" placeholder="John Doe"
                                        value={self.form.name.clone()} oninput={edit_input(Field::Name)} />
                                </label>
                                <label>
                                    {"Email Address *"}
                                    <input type="email" name="email" placeholder="john@company.com"
                                        value={self.form.email.clone()} oninput={edit_input(Field::Email)} />
                                </label>
                            </div>
                            <label>
                                {"Company Name"}
                                <input type="text" name="company" placeholder="Your Company"
                                    value={self.form.company.clone()} oninput={edit_input(Field::Company)} />
                            </label>
                            <label>
                                {"Service Interest"}
                                <select name="service" onchange={onservice}>
                                    <option value="" selected={self.form.service.is_empty()}>{"Select a service"}</option>
                                    { for CONTACT_SERVICES.iter().map(|service| html! {
                                        <option value={*service} selected={self.form.service == *service}>{ *service }</option>
                                    }) }
                                </select>
                            </label>
                            <label>
                                {"Project Details *"}
                                <textarea name="message" rows="5"
                                    placeholder="Tell us about your project, goals, and timeline..."
                                    value={self.form.message.clone()} oninput={onmessage} />
                            </label>
                            <button type="submit" class="submit-button" disabled={sending}>
                                { if sending { "Sending..." } else { "Send Message" } }
                            </button>
                            { self.status_line() }
                        </form>
                        <aside class="contact-info">
                            <div class="info-card">
                                <h3>{"Email Us"}</h3>
                                <p>{ CONTACT_EMAIL }</p>
                                <p>{ SUPPORT_EMAIL }</p>
                                <a href={mailto} class="info-action">{"Send Email"}</a>
                            </div>
                            <div class="info-card">
                                <h3>{"Why choose us?"}</h3>
                                <ul>
                                    <li>{"Free consultation and project assessment"}</li>
                                    <li>{"Agile development with regular updates"}</li>
                                    <li>{"Post-launch support and maintenance"}</li>
                                </ul>
                            </div>
                        </aside>
                    </div>
                </div>
                <style>
                    {r#"
                    .contact {
                        padding: 6rem 1.5rem;
                        background: #ffffff;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 3rem;
                    }
                    @media (max-width: 900px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #f9fafb;
                    }
                    .contact-form h3 { font-size: 1.5rem; font-weight: 700; }
                    .form-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                        font: inherit;
                        font-weight: 400;
                    }
                    .submit-button {
                        padding: 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        color: #ffffff;
                        font-weight: 600;
                        cursor: pointer;
                        background: linear-gradient(90deg, #2563eb, #9333ea);
                    }
                    .submit-button:disabled { opacity: 0.6; cursor: default; }
                    .form-status { font-size: 0.95rem; }
                    .form-status.sent { color: #15803d; }
                    .form-status.failed { color: #b91c1c; }
                    .contact-info { display: flex; flex-direction: column; gap: 1.5rem; }
                    .info-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #eff6ff;
                    }
                    .info-card h3 { font-weight: 700; margin-bottom: 0.75rem; }
                    .info-card p, .info-card li { color: #4b5563; margin-bottom: 0.25rem; }
                    .info-card ul { padding-left: 1.25rem; }
                    .info-action { color: #2563eb; font-weight: 600; text-decoration: none; }
                    "#}
                </style>
            </section>
        }
    }
}

impl Contact {
    fn status_line(&self) -> Html {
        match &self.state {
            SubmitState::Idle | SubmitState::Sending => html! {},
            SubmitState::Sent => html! {
                <p class="form-status sent">{"Thank you! Your message has been sent successfully."}</p>
            },
            SubmitState::Failed(reason) => html! {
                <p class="form-status failed">{ format!("Sorry, your message was not sent: {reason}.") }</p>
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            service: "Automation Workflows".into(),
            message: "We need our invoicing automated.".into(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_reported_in_order() {
        let mut form = filled();
        form.message = "   ".into();
        assert_eq!(form.validate(), Err(ContactError::MissingField("Message")));
        form.name.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField("Name")));
        assert_eq!(ContactForm::default().validate(), Err(ContactError::MissingField("Name")));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "ada @example.com", "ada@example."] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        let mut form = filled();
        form.email = "  ada.l@mail.example.co.uk ".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn payload_carries_key_and_empty_optionals() {
        let payload = filled().payload("key-123");
        assert_eq!(payload["access_key"], "key-123");
        assert_eq!(payload["name"], "Ada Lovelace");
        assert_eq!(payload["company"], "");
        assert_eq!(payload["service"], "Automation Workflows");
        assert_eq!(payload.as_object().map(|o| o.len()), Some(6));
    }

    #[test]
    fn set_updates_one_field() {
        let mut form = ContactForm::default();
        form.set(Field::Company, "Initech".into());
        assert_eq!(form.company, "Initech");
        assert!(form.name.is_empty());
    }

    #[test]
    fn errors_read_as_sentences() {
        assert_eq!(ContactError::MissingField("Email").to_string(), "Email is required");
        assert_eq!(
            ContactError::Rejected("invalid access key".into()).to_string(),
            "the form service declined the message: invalid access key"
        );
    }
}
