use yew::prelude::*;

pub mod config;
pub mod error;
pub mod hooks;

pub mod animation {
    pub mod counter;
    pub mod frames;
    pub mod visibility;
}

pub mod components {
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod process;
    pub mod reveal;
    pub mod services;
    pub mod stack;
    pub mod stats;
    pub mod testimonial;
    pub mod why_choose;
}

pub mod pages {
    pub mod home;
}

use pages::home::HomePage;

#[function_component]
pub fn App() -> Html {
    html! { <HomePage /> }
}
