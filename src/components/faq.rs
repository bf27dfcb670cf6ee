use web_sys::MouseEvent;
use yew::prelude::*;

const FAQS: [(&str, &str); 4] = [
    (
        "What software development services does your company offer?",
        "We offer a full range of software development services including web development, mobile app development, custom software solutions, API development, database design, cloud solutions, and ongoing maintenance and support.",
    ),
    (
        "What industries do you specialize in?",
        "We have shipped products for fintech, healthcare, logistics, retail and education clients, and we adapt our process to the compliance needs of each industry.",
    ),
    (
        "What sets your company apart from the competition?",
        "Our development process includes requirement analysis, system design, development, testing, deployment, and post-launch support. We follow agile methodologies to ensure transparency, regular communication, and iterative improvements throughout the project lifecycle.",
    ),
    (
        "Is my project idea and information kept confidential?",
        "Absolutely. All client information is protected under strict NDAs, and we implement industry-standard security measures including encryption, secure servers, and limited access protocols to ensure your data remains confidential.",
    ),
];

/// The accordion opens on the second question.
pub const DEFAULT_OPEN: Option<usize> = Some(1);

/// Clicking the open item closes it; clicking any other item opens it and
/// closes the rest.
pub fn toggle_faq(active: Option<usize>, clicked: usize) -> Option<usize> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class="border-b border-gray-200 last:border-b-0">
            <button class="w-full flex justify-between items-center py-6 px-4 text-left" onclick={toggle}>
                <span class="text-gray-900 font-medium text-lg pr-4 leading-relaxed">{props.question}</span>
                <span class={classes!(
                    "w-8", "h-8", "rounded-full", "flex", "items-center", "justify-center", "text-white",
                    "flex-shrink-0", "transition-all", "duration-300",
                    if props.open { "bg-teal-500 rotate-45" } else { "bg-gray-800 hover:bg-teal-500" }
                )}>
                    {"+"}
                </span>
            </button>
            <div class={classes!("overflow-hidden", "transition-all", "duration-300",
                if props.open { "max-h-40 pb-6" } else { "max-h-0" })}>
                <p class="px-4 text-gray-600 leading-relaxed text-base">{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let active = use_state_eq(|| DEFAULT_OPEN);

    html! {
        <section id="faq" class="min-h-screen py-16 px-5 bg-white">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl md:text-5xl text-center font-bold text-gray-900 mb-16 leading-tight">
                    {"Comprehensive Answers to the Most ⭐ Common Questions "}
                    <span class="text-gray-400">{"About Our Services"}</span>
                    {" and How We "}
                    <span class="text-gray-400">{"Work"}</span>
                </h2>
                <div class="flex items-center mb-12">
                    <h3 class="text-6xl font-bold text-gray-900">{"FAQ"}</h3>
                    <div class="ml-8 h-px bg-gray-200 flex-1"></div>
                </div>
                <div class="space-y-1">
                    { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                        let on_toggle = {
                            let active = active.clone();
                            Callback::from(move |_: ()| active.set(toggle_faq(*active, index)))
                        };
                        html! {
                            <FaqItem key={index} question={*question} answer={*answer}
                                open={*active == Some(index)} {on_toggle} />
                        }
                    })}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_item_open_by_default() {
        assert_eq!(DEFAULT_OPEN, Some(1));
    }

    #[test]
    fn at_most_one_open() {
        let mut active = DEFAULT_OPEN;
        active = toggle_faq(active, 3);
        assert_eq!(active, Some(3));
        active = toggle_faq(active, 3);
        assert_eq!(active, None);
        active = toggle_faq(active, 0);
        assert_eq!(active, Some(0));
    }
}
