use std::f64::consts::PI;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::reveal::{reveal, reveal_with, SCALED_IN};
use crate::config;
use crate::hooks::use_in_view;

const RING_RADIUS: f64 = 200.0;
const RING_CENTER: f64 = 250.0;

struct ProcessStep {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    angle: f64,
}

const STEPS: [ProcessStep; 6] = [
    ProcessStep { title: "Discovery", description: "Understanding your requirements and goals", icon: "💡", angle: 0.0 },
    ProcessStep { title: "Design", description: "Creating user-centered design solutions", icon: "🎨", angle: 60.0 },
    ProcessStep { title: "Development", description: "Building robust and scalable applications", icon: "💻", angle: 120.0 },
    ProcessStep { title: "Testing", description: "Ensuring quality and performance", icon: "✅", angle: 180.0 },
    ProcessStep { title: "Deployment", description: "Launching your solution to production", icon: "🚀", angle: 240.0 },
    ProcessStep { title: "Support", description: "Ongoing maintenance and improvements", icon: "🤝", angle: 300.0 },
];

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Point on a circle for an angle in degrees, measured clockwise from
/// twelve o'clock.
pub fn step_position(angle_deg: f64, radius: f64, center: f64) -> (f64, f64) {
    let radians = (angle_deg - 90.0).to_radians();
    (
        center + radius * radians.cos(),
        center + radius * radians.sin(),
    )
}

#[function_component(Process)]
pub fn process() -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;
    let hovered = use_state_eq(|| None::<usize>);
    let ring_length = circumference(RING_RADIUS);
    let stroke_offset = use_state_eq(move || ring_length);

    {
        let stroke_offset = stroke_offset.clone();
        use_effect_with_deps(
            move |visible| {
                let timeout = visible.then(|| {
                    Timeout::new(config::PROCESS_STROKE_DELAY_MS, move || stroke_offset.set(0.0))
                });
                // Dropping an unfired timeout cancels it.
                move || drop(timeout)
            },
            visible,
        );
    }

    html! {
        <section id="process" ref={in_view.node} class="py-20 bg-gradient-to-b from-gray-900 to-gray-800 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class={classes!("text-center", "mb-16", "transition-all", "duration-600", "ease-out", reveal(visible))}>
                    <h2 class="text-4xl font-bold mb-4 bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                        {"Our Software Development Process"}
                    </h2>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto">
                        {"We follow a proven methodology to deliver exceptional results for every project"}
                    </p>
                </div>

                <div class="relative flex items-center justify-center mb-20">
                    <div class={classes!("transition-all", "duration-600", "ease-out",
                        reveal_with(visible, SCALED_IN, "opacity-0 scale-96"))}>
                        <div class="relative w-[500px] h-[500px]">
                            <svg class="absolute inset-0 w-full h-full" viewBox="0 0 500 500">
                                <circle cx="250" cy="250" r={RING_RADIUS.to_string()} fill="none"
                                    stroke="rgba(75, 85, 99, 0.3)" stroke-width="2" />
                                <circle cx="250" cy="250" r={RING_RADIUS.to_string()} fill="none"
                                    stroke="#22d3ee" stroke-width="3" stroke-linecap="round"
                                    transform="rotate(-90 250 250)"
                                    stroke-dasharray={ring_length.to_string()}
                                    stroke-dashoffset={stroke_offset.to_string()}
                                    style="transition: stroke-dashoffset 1s ease-out;" />
                            </svg>
                            { for STEPS.iter().enumerate().map(|(index, step)| {
                                let (x, y) = step_position(step.angle, RING_RADIUS, RING_CENTER);
                                let onmouseenter = {
                                    let hovered = hovered.clone();
                                    Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                                };
                                let onmouseleave = {
                                    let hovered = hovered.clone();
                                    Callback::from(move |_: MouseEvent| hovered.set(None))
                                };
                                html! {
                                    <div key={step.title}
                                        class="absolute -translate-x-1/2 -translate-y-1/2 flex flex-col items-center cursor-pointer"
                                        style={format!("left: {x:.1}px; top: {y:.1}px; transition-delay: {}ms;", index * 100)}
                                        {onmouseenter} {onmouseleave}>
                                        <div class="w-14 h-14 rounded-full bg-gray-800 border border-cyan-500/40 flex items-center justify-center text-2xl">
                                            {step.icon}
                                        </div>
                                        <span class="mt-2 text-sm font-semibold">{step.title}</span>
                                        if *hovered == Some(index) {
                                            <div class="absolute top-full mt-2 w-48 p-3 rounded-lg bg-gray-900 border border-gray-700 text-xs text-gray-300">
                                                {step.description}
                                            </div>
                                        }
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
