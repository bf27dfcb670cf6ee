use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

const LINKS: [(&str, &str); 4] = [
    ("Services", "#services"),
    ("About", "#about"),
    ("Process", "#process"),
    ("Contact", "#contact"),
];

pub fn is_scrolled(scroll_top: i32) -> bool {
    scroll_top > config::NAV_SCROLL_OFFSET
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        let scroll_top = web_sys::window()
                            .and_then(|w| w.document())
                            .and_then(|d| d.document_element())
                            .map(|e| e.scroll_top())
                            .unwrap_or(0);
                        scrolled.set(is_scrolled(scroll_top));
                    });
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!(
            "fixed", "top-0", "w-full", "z-50", "border-b", "border-gray-800", "transition-colors",
            if *scrolled { "bg-gray-900" } else { "bg-gray-900/80 backdrop-blur-md" }
        )}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="#top" class="text-2xl font-bold text-cyan-400">{"Software Chamber"}</a>
                    <button class="md:hidden burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={classes!("md:flex", "space-x-8", if *menu_open { "flex" } else { "hidden" })}>
                        { for LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} class="hover:text-cyan-400 transition-colors" onclick={close_menu.clone()}>
                                {*label}
                            </a>
                        })}
                    </div>
                </div>
            </div>
        </nav>
    }
}
