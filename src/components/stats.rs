use yew::prelude::*;

use crate::components::reveal::{reveal, reveal_with, SCALED_IN};
use crate::config;
use crate::hooks::{use_counter, use_in_view};

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Your Team in the cloud", "We hire fast and bring bright talent to build your product."),
    ("Grow more with less", "A competitive pricing structure that scales with you."),
    ("Weekly sprint and reviews", "Continuous deployment process designed around feedback."),
    ("Communication First", "We believe in clear work and clear messaging."),
];

/// Renders a counter value for display. With `compact`, values of a
/// thousand or more are shown in thousands ("1K").
pub fn format_stat(value: i64, compact: bool) -> String {
    if compact && value >= 1000 {
        format!("{}K", value / 1000)
    } else {
        value.to_string()
    }
}

#[derive(Properties, PartialEq)]
struct StatProps {
    label: &'static str,
    target: i64,
    start: bool,
    #[prop_or_default]
    compact: bool,
    #[prop_or_default]
    delay_ms: u32,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    let value = use_counter(props.target, config::DEFAULT_COUNTER_DURATION_MS, props.start);

    html! {
        <div class={classes!("transition-all", "duration-450", "ease-out", reveal(props.start))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}>
            <div class="text-4xl lg:text-5xl font-bold text-black mb-2">
                {format!("{}+", format_stat(value, props.compact))}
            </div>
            <div class="text-gray-600 text-lg">{props.label}</div>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let in_view = use_in_view(config::STATS_THRESHOLD);
    let visible = in_view.visible;

    html! {
        <section id="about" ref={in_view.node}
            class="relative min-h-screen flex items-center justify-center py-20 overflow-hidden bg-white text-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class={classes!("text-center", "mb-16", "transition-all", "duration-450", "ease-out", reveal(visible))}>
                    <h2 class="text-3xl lg:text-4xl font-bold mb-4">
                        {"✨ At Software Chamber, "}
                        <span class="text-gray-400">{"we specialize"}</span>
                        {" in turning complex challenges into elegant "}
                        <span class="text-gray-400">{"digital solutions"}</span>
                    </h2>
                </div>

                <div class="grid lg:grid-cols-3 gap-8 items-center">
                    <div class="space-y-8">
                        <Stat label="Tech Partners" target={20} start={visible} />
                        <Stat label="Projects Completed" target={150} start={visible} delay_ms={100} />
                        <Stat label="Satisfied Customers" target={1000} start={visible} compact={true} delay_ms={200} />
                    </div>

                    <div class={classes!("transition-all", "duration-500", "ease-out",
                        reveal_with(visible, SCALED_IN, "opacity-0 scale-95"))}>
                        <div class="relative w-full h-80 lg:h-96 rounded-2xl overflow-hidden shadow-lg bg-gradient-to-br from-cyan-100 to-blue-100 flex items-center justify-center">
                            <span class="text-2xl font-semibold text-gray-500">{"Our Team"}</span>
                        </div>
                    </div>

                    <div class="space-y-4">
                        { for HIGHLIGHTS.iter().enumerate().map(|(i, (title, text))| html! {
                            <div class={classes!("transition-all", "duration-450", "ease-out", reveal(visible))}
                                style={format!("transition-delay: {}ms;", i * 100)}>
                                <div class="flex items-center gap-4 p-4 bg-white border border-gray-200 rounded-lg shadow-sm hover:shadow-md">
                                    <div class="w-12 h-12 bg-cyan-100 rounded-full flex items-center justify-center">
                                        <div class="w-2 h-2 bg-cyan-500 rounded-full"></div>
                                    </div>
                                    <div>
                                        <div class="font-semibold text-gray-800 mb-1">{*title}</div>
                                        <div class="text-sm text-gray-600">{*text}</div>
                                    </div>
                                </div>
                            </div>
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
    fn compact_only_from_a_thousand() {
        assert_eq!(format_stat(999, true), "999");
        assert_eq!(format_stat(1000, true), "1K");
        assert_eq!(format_stat(1000, false), "1000");
        assert_eq!(format_stat(150, false), "150");
    }
}
