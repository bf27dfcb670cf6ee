use yew::prelude::*;

use crate::components::reveal::{reveal, stagger_delay};
use crate::config;
use crate::hooks::use_in_view;

struct Tech {
    name: &'static str,
    category: &'static str,
    logo: &'static str,
    color: &'static str,
}

const STACK: [Tech; 12] = [
    Tech { name: "React", category: "Frontend", logo: "⚛️", color: "#61DAFB" },
    Tech { name: "Next.js", category: "Framework", logo: "▲", color: "#000000" },
    Tech { name: "TypeScript", category: "Language", logo: "TS", color: "#3178C6" },
    Tech { name: "Node.js", category: "Backend", logo: "🟢", color: "#339933" },
    Tech { name: "Python", category: "Language", logo: "🐍", color: "#3776AB" },
    Tech { name: "AWS", category: "Cloud", logo: "☁️", color: "#FF9900" },
    Tech { name: "Docker", category: "DevOps", logo: "🐳", color: "#2496ED" },
    Tech { name: "PostgreSQL", category: "Database", logo: "🐘", color: "#336791" },
    Tech { name: "MongoDB", category: "Database", logo: "🍃", color: "#47A248" },
    Tech { name: "GraphQL", category: "API", logo: "◈", color: "#E10098" },
    Tech { name: "Redis", category: "Cache", logo: "🔴", color: "#DC382D" },
    Tech { name: "Kubernetes", category: "DevOps", logo: "☸️", color: "#326CE5" },
];

#[function_component(Stack)]
pub fn stack() -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;

    html! {
        <section ref={in_view.node} class="py-20 bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class={classes!("text-center", "mb-16", "transition-all", "duration-450", "ease-out", reveal(visible))}>
                    <h2 class="text-4xl font-bold mb-4">{"The Stack That Powers Our Work"}</h2>
                    <p class="text-xl text-gray-400">{"Battle-tested tools we reach for on every project"}</p>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-6">
                    { for STACK.iter().enumerate().map(|(index, tech)| html! {
                        <div key={tech.name}
                            class={classes!("p-4", "rounded-xl", "bg-gray-800/50", "border", "border-gray-700", "text-center", "transition-all", "duration-450", reveal(visible))}
                            style={format!("{} border-color: {}40;", stagger_delay(index, 50), tech.color)}>
                            <div class="text-3xl mb-2" style={format!("color: {};", tech.color)}>{tech.logo}</div>
                            <div class="font-semibold">{tech.name}</div>
                            <div class="text-xs text-gray-400">{tech.category}</div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
