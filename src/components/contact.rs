use log::info;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const COUNTRY_CODES: [&str; 4] = ["+1", "+880", "+44", "+91"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub phone: String,
    pub job_title: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            country: COUNTRY_CODES[0].to_string(),
            phone: String::new(),
            job_title: String::new(),
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Country,
    Phone,
    JobTitle,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "country" => Some(Self::Country),
            "phone" => Some(Self::Phone),
            "jobTitle" => Some(Self::JobTitle),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

impl ContactForm {
    pub fn with_field(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        let slot = match field {
            ContactField::FirstName => &mut next.first_name,
            ContactField::LastName => &mut next.last_name,
            ContactField::Email => &mut next.email,
            ContactField::Country => &mut next.country,
            ContactField::Phone => &mut next.phone,
            ContactField::JobTitle => &mut next.job_title,
            ContactField::Message => &mut next.message,
        };
        *slot = value;
        next
    }

    pub fn to_log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// `name` and current value of whichever form control fired the event.
fn control_value(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);

    let on_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some((name, value)) = control_value(&e) {
                if let Some(field) = ContactField::from_name(&name) {
                    form.set(form.with_field(field, value));
                }
            }
        })
    };
    let on_input = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| on_change.emit(e.into()))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Nothing leaves the browser; the form is only logged.
            info!("contact form submitted");
            gloo_console::log!("Form submitted:", form.to_log_line());
        })
    };

    let input_class = "w-full border border-gray-200 rounded-lg p-4 focus:outline-none focus:ring-2 focus:ring-teal-400";

    html! {
        <section id="contact" class="min-h-screen py-16 px-4 bg-white">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-10">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6 leading-tight">
                        {"Let's talk about your next project. "}
                        <span class="text-gray-400">{"We're here to help."}</span>
                    </h2>
                    <p class="text-gray-400 text-lg max-w-5xl mx-auto leading-relaxed">
                        {"Deliver personalized experiences to your customers with AI-powered recommendation engines and dynamic content generators."}
                    </p>
                </div>

                <form class="max-w-3xl mx-auto space-y-6" {onsubmit}>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <input type="text" name="firstName" placeholder="First Name" class={input_class}
                            value={form.first_name.clone()} oninput={on_input.clone()} />
                        <input type="text" name="lastName" placeholder="Last Name" class={input_class}
                            value={form.last_name.clone()} oninput={on_input.clone()} />
                    </div>
                    <input type="email" name="email" placeholder="Email" class={input_class}
                        value={form.email.clone()} oninput={on_input.clone()} />
                    <div class="grid grid-cols-3 gap-4">
                        <select name="country" class={input_class} onchange={on_change.clone()}>
                            { for COUNTRY_CODES.iter().map(|code| html! {
                                <option value={*code} selected={form.country == *code}>{*code}</option>
                            })}
                        </select>
                        <input type="tel" name="phone" placeholder="Phone" class={classes!("col-span-2", input_class)}
                            value={form.phone.clone()} oninput={on_input.clone()} />
                    </div>
                    <input type="text" name="jobTitle" placeholder="Job Title" class={input_class}
                        value={form.job_title.clone()} oninput={on_input.clone()} />
                    <textarea name="message" placeholder="Your message" rows="4" class={input_class}
                        value={form.message.clone()} oninput={on_input} />
                    <button type="submit" class="w-full bg-teal-500 hover:bg-teal-600 text-white font-semibold rounded-lg p-4">
                        {"Submit ➤"}
                    </button>
                </form>
            </div>
        </section>
    }
}
