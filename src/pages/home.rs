use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::components::{
    contact::Contact, faq::Faq, footer::Footer, hero::Hero, nav::Nav, process::Process,
    services::Services, stack::Stack, stats::Stats, testimonial::Testimonial,
    why_choose::WhyChoose,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Global css={css!(r#"
                .perspective-1000 {
                    perspective: 1000px;
                }
                .duration-450 {
                    transition-duration: 450ms;
                }
                .duration-600 {
                    transition-duration: 600ms;
                }
                .scale-96 {
                    transform: scale(0.96);
                }
                .hover-lift {
                    transition: transform 180ms ease-out, box-shadow 180ms ease-out;
                }
                .hover-lift:hover {
                    transform: scale(1.03);
                }
                .hover-lift:active {
                    transform: scale(0.98);
                }
                @media (prefers-reduced-motion: reduce) {
                    * {
                        animation-duration: 0.01ms !important;
                        animation-iteration-count: 1 !important;
                        transition-duration: 0.01ms !important;
                    }
                }
            "#)} />
            <Nav />
            <main class="bg-gray-900 text-white overflow-hidden">
                <Hero />
                <Stats />
                <Process />
                <Services />
                <WhyChoose />
                <Stack />
                <Testimonial />
                <Faq />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
