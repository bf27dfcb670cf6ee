use yew::prelude::*;

use crate::components::reveal::{reveal, stagger_delay};
use crate::config;
use crate::hooks::use_in_view;

const SERVICES: [(&str, &str, &str); 6] = [
    ("</>", "Web & Mobile App Development", "Custom web and mobile applications built with modern technologies and best practices."),
    ("☁", "Cloud Solutions", "Scalable cloud infrastructure and deployment solutions for your growing business."),
    ("🗄", "Database Design", "Robust database architecture and optimization for optimal performance."),
    ("🛡", "Cybersecurity", "Comprehensive security solutions to protect your digital assets."),
    ("📱", "Mobile Development", "Native and cross-platform mobile applications for iOS and Android."),
    ("👥", "Team Augmentation", "Skilled developers to extend your existing development team."),
];

#[function_component(Services)]
pub fn services() -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;

    html! {
        <section id="services" ref={in_view.node} class="py-20 bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class={classes!("text-center", "mb-16", "transition-all", "duration-450", "ease-out", reveal(visible))}>
                    <h2 class="text-4xl font-bold mb-4">{"Services ✨"}</h2>
                    <p class="text-xl text-gray-400">{"Comprehensive solutions for your digital needs"}</p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for SERVICES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                        <div key={*title}
                            class={classes!(
                                "group", "p-6", "bg-gray-800/50", "border", "border-gray-700", "rounded-2xl",
                                "hover:bg-gray-800/70", "transition-all", "duration-200", reveal(visible)
                            )}
                            style={stagger_delay(index, 100)}>
                            <div class="mb-4 text-3xl text-cyan-400">{*icon}</div>
                            <h3 class="text-xl font-semibold mb-3">{*title}</h3>
                            <p class="text-gray-400 mb-4">{*description}</p>
                            <a href="#contact" class="flex items-center gap-2 text-cyan-400 hover:gap-4 transition-all duration-200">
                                {"Learn more →"}
                            </a>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
