use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::{reveal, reveal_with, SCALED_IN};
use crate::config;
use crate::hooks::use_in_view;

struct HeroCard {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    category: &'static str,
    color: &'static str,
}

const CARDS: [HeroCard; 4] = [
    HeroCard {
        title: "Website Development",
        description: "Create stunning, responsive websites with modern technologies. Built for performance, scalability, and user experience.",
        icon: "🌐",
        category: "Website",
        color: "from-blue-600 to-cyan-600",
    },
    HeroCard {
        title: "Mobile App Development",
        description: "Native and cross-platform mobile applications for iOS and Android. Seamless user experiences on every device.",
        icon: "📱",
        category: "Mobile App",
        color: "from-green-600 to-emerald-600",
    },
    HeroCard {
        title: "Software Solutions",
        description: "Custom software development and enterprise solutions. Scalable, secure, and tailored to your business needs.",
        icon: "⚙️",
        category: "Software",
        color: "from-purple-600 to-violet-600",
    },
    HeroCard {
        title: "Web Applications",
        description: "Modern web applications with cutting-edge frameworks. Fast, interactive, and feature-rich experiences.",
        icon: "💻",
        category: "Web App",
        color: "from-orange-600 to-red-600",
    },
];

const TECH_TAGS: [&str; 4] = ["React", "Node.js", "AWS", "TypeScript"];

/// Where a card sits in the rotating stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDepth {
    Front,
    Middle,
    Back,
}

impl CardDepth {
    fn classes(self) -> &'static str {
        match self {
            CardDepth::Front => "z-30 scale-100 opacity-100",
            CardDepth::Middle => "z-20 scale-95 opacity-80 translate-y-4",
            CardDepth::Back => "z-10 scale-90 opacity-60 translate-y-8",
        }
    }
}

pub fn next_card(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn card_depth(index: usize, current: usize, len: usize) -> CardDepth {
    if index == current {
        CardDepth::Front
    } else if index == next_card(current, len) {
        CardDepth::Middle
    } else {
        CardDepth::Back
    }
}

/// Pointer position relative to the centre of a box, as a fraction of its
/// size. Zero-sized boxes yield no offset.
pub fn parallax_offset(client: (f64, f64), origin: (f64, f64), size: (f64, f64)) -> (f64, f64) {
    let axis = |pointer: f64, start: f64, extent: f64| {
        if extent > 0.0 {
            (pointer - start - extent / 2.0) / extent
        } else {
            0.0
        }
    };
    (
        axis(client.0, origin.0, size.0),
        axis(client.1, origin.1, size.1),
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let in_view = use_in_view(config::HERO_THRESHOLD);
    let visible = in_view.visible;
    let active_card = use_state(|| 0_usize);
    let mouse = use_state_eq(|| (0.0_f64, 0.0_f64));
    let stage = use_node_ref();

    {
        let active_card = active_card.clone();
        use_interval(
            move || active_card.set(next_card(*active_card, CARDS.len())),
            config::HERO_ROTATION_MS,
        );
    }

    let onmousemove = {
        let mouse = mouse.clone();
        let stage = stage.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(stage) = stage.cast::<Element>() {
                let rect = stage.get_bounding_client_rect();
                mouse.set(parallax_offset(
                    (f64::from(e.client_x()), f64::from(e.client_y())),
                    (rect.left(), rect.top()),
                    (rect.width(), rect.height()),
                ));
            }
        })
    };

    let (mx, my) = *mouse;
    let stack_style = format!(
        "transform: translateX({}px) translateY({}px); transition: transform 0.1s ease-out;",
        mx * 10.0,
        my * 10.0
    );

    let headline = ["We are your", "Software", "Development Team", "in The Cloud"];

    html! {
        <section id="top" ref={stage} {onmousemove}
            class="relative min-h-screen flex items-center justify-center pt-16 overflow-hidden bg-gray-900 text-white">
            <div ref={in_view.node} class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8">
                    <div class={classes!(
                        "inline-flex", "px-4", "py-2", "rounded-full", "text-cyan-400", "text-sm", "transition-all", "duration-200",
                        reveal_with(visible, SCALED_IN, "opacity-0 scale-90")
                    )}>
                        {"🚀 Building the future of software"}
                    </div>
                    <h1 class="text-5xl lg:text-7xl font-bold leading-tight">
                        { for headline.iter().enumerate().map(|(i, line)| html! {
                            <div class={classes!("transition-all", "duration-450", "ease-out", reveal(visible))}
                                style={format!("transition-delay: {}ms;", i * 120)}>
                                {*line}
                            </div>
                        })}
                    </h1>
                    <div class={classes!("flex", "flex-wrap", "gap-3", "transition-all", "duration-450", reveal(visible))}
                        style="transition-delay: 480ms;">
                        { for TECH_TAGS.iter().map(|tag| html! {
                            <span class="px-4 py-2 bg-gray-800 border border-gray-700 rounded-full text-sm">{*tag}</span>
                        })}
                    </div>
                    <div class={classes!("flex", "gap-4", "transition-all", "duration-450", reveal(visible))}
                        style="transition-delay: 600ms;">
                        <a href="#contact" class="px-8 py-4 bg-cyan-500 hover:bg-cyan-600 rounded-lg font-semibold hover-lift">
                            {"Get Started"}
                        </a>
                        <a href="#process" class="px-8 py-4 border border-gray-700 hover:border-cyan-500 rounded-lg font-semibold">
                            {"See How We Work"}
                        </a>
                    </div>
                </div>

                <div class="relative h-96 perspective-1000">
                    <div class="relative w-full h-full" style={stack_style}>
                        { for CARDS.iter().enumerate().map(|(index, card)| {
                            let depth = card_depth(index, *active_card, CARDS.len());
                            html! {
                                <div key={card.title} class={classes!(
                                    "absolute", "inset-0", "rounded-2xl", "border", "border-gray-700", "p-8",
                                    "bg-gradient-to-br", card.color, "transition-all", "duration-600", "ease-out",
                                    depth.classes()
                                )}>
                                    <div class="text-5xl mb-4">{card.icon}</div>
                                    <span class="text-xs uppercase tracking-wider opacity-80">{card.category}</span>
                                    <h3 class="text-2xl font-bold mt-2">{card.title}</h3>
                                    <p class="mt-4 text-white/80">{card.description}</p>
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps() {
        assert_eq!(next_card(0, 4), 1);
        assert_eq!(next_card(3, 4), 0);
        assert_eq!(next_card(2, 0), 0);
    }

    #[test]
    fn depth_follows_active_card() {
        assert_eq!(card_depth(2, 2, 4), CardDepth::Front);
        assert_eq!(card_depth(3, 2, 4), CardDepth::Middle);
        assert_eq!(card_depth(0, 3, 4), CardDepth::Middle);
        assert_eq!(card_depth(1, 3, 4), CardDepth::Back);
    }

    #[test]
    fn parallax_is_centred() {
        assert_eq!(parallax_offset((150.0, 100.0), (100.0, 50.0), (100.0, 100.0)), (0.0, 0.0));
        assert_eq!(parallax_offset((200.0, 50.0), (100.0, 50.0), (100.0, 100.0)), (0.5, -0.5));
        assert_eq!(parallax_offset((10.0, 10.0), (0.0, 0.0), (0.0, 0.0)), (0.0, 0.0));
    }
}
