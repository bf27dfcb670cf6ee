use yew::prelude::*;

use crate::components::reveal::reveal;
use crate::config;
use crate::hooks::use_in_view;

#[function_component(Testimonial)]
pub fn testimonial() -> Html {
    let in_view = use_in_view(config::SECTION_THRESHOLD);
    let visible = in_view.visible;

    html! {
        <section ref={in_view.node} class="min-h-screen flex items-center justify-center px-4 py-14 bg-slate-900 text-white">
            <div class={classes!("max-w-5xl", "mx-auto", "text-center", "transition-all", "duration-600", "ease-out", reveal(visible))}>
                <div class="inline-flex items-center px-4 py-2 rounded-full text-sm font-medium mb-8 border border-green-500/30 bg-green-500/10">
                    <span class="w-2 h-2 rounded-full mr-2 bg-green-500"></span>
                    {"Smarter lists. Instant solutions."}
                </div>
                <h2 class="text-3xl md:text-5xl font-bold mb-16 leading-tight">
                    {"Don't just take our word for it. Hear what "}
                    <span class="text-gray-400">{"our clients say"}</span>
                </h2>
                <div class="relative p-8 rounded-2xl bg-slate-800/50 border border-slate-700/30 backdrop-blur">
                    <blockquote class="text-xl md:text-2xl font-light leading-relaxed mb-8">
                        {"\"Software Chamber felt like part of our own team from the first sprint. They shipped on time, kept us in the loop every week and the product has been rock solid since launch.\""}
                    </blockquote>
                    <div class="flex items-center justify-center gap-4">
                        <div class="w-12 h-12 rounded-full bg-gray-600 flex items-center justify-center font-bold">{"AL"}</div>
                        <div class="text-left">
                            <div class="font-semibold">{"Alex Larkins"}</div>
                            <div class="text-sm text-gray-400">{"CTO, mono"}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
