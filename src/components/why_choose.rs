use yew::prelude::*;

use crate::components::reveal::{reveal, stagger_delay};
use crate::config;
use crate::hooks::use_in_view;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Optimized performance with cutting-edge technologies for blazing fast applications.",
    },
    Feature {
        icon: "🔒",
        title: "Secure & Reliable",
        description: "Enterprise-grade security measures to protect your data and ensure system reliability.",
    },
    Feature {
        icon: "🕑",
        title: "24/7 Support",
        description: "Round-the-clock technical support and maintenance to keep your systems running smoothly.",
    },
    Feature {
        icon: "👩‍💻",
        title: "Expert Team",
        description: "Seasoned professionals with years of experience in modern web technologies.",
    },
    Feature {
        icon: "🏆",
        title: "Award Winning",
        description: "Recognized for excellence in software development and innovative solutions.",
    },
    Feature {
        icon: "🤝",
        title: "Client Focused",
        description: "Dedicated to building long-term partnerships and exceeding client expectations.",
    },
];

#[function_component(WhyChoose)]
pub fn why_choose() -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;

    html! {
        <section ref={in_view.node} class="py-20 bg-white text-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class={classes!("text-center", "mb-16", "transition-all", "duration-450", "ease-out", reveal(visible))}>
                    <h2 class="text-4xl font-bold mb-4">
                        {"Why Choose "}<span class="text-gray-400">{"Software Chamber"}</span>
                    </h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div key={feature.title}
                            class={classes!("p-6", "rounded-2xl", "border", "border-gray-200", "transition-all", "duration-450", reveal(visible))}
                            style={stagger_delay(index, 100)}>
                            <div class="text-3xl mb-4">{feature.icon}</div>
                            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
                            <p class="text-gray-600">{feature.description}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
