use chrono::{Datelike, Local};
use yew::prelude::*;

const SOCIAL: [(&str, &str); 6] = [
    ("Instagram", "https://instagram.com"),
    ("Twitter", "https://twitter.com"),
    ("Facebook", "https://facebook.com"),
    ("TikTok", "https://tiktok.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Youtube", "https://youtube.com"),
];

pub fn copyright(year: i32) -> String {
    format!("© {} Software Chamber. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="bg-gray-900 text-gray-400 py-16 px-4">
            <div class="max-w-7xl mx-auto grid md:grid-cols-3 gap-12">
                <div>
                    <div class="text-2xl font-bold text-cyan-400 mb-4">{"Software Chamber"}</div>
                    <p>{"Your software development team in the cloud."}</p>
                </div>
                <div>
                    <h3 class="text-white font-semibold mb-6">{"Social media"}</h3>
                    <ul class="space-y-2">
                        { for SOCIAL.iter().map(|(name, href)| html! {
                            <li key={*name}>
                                <a href={*href} target="_blank" rel="noopener noreferrer" class="hover:text-white">{*name}</a>
                            </li>
                        })}
                    </ul>
                </div>
                <div class="space-y-6">
                    <div>
                        <h4 class="text-white font-semibold mb-3 text-sm tracking-wider">{"ADDRESS"}</h4>
                        <p>{"1901 Thornridge Cir."}<br />{"Shiloh, Hawaii 81063"}</p>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-3 text-sm tracking-wider">{"PHONE"}</h4>
                        <p>{"[+1] 872-298-3989"}</p>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-3 text-sm tracking-wider">{"EMAIL"}</h4>
                        <a href="mailto:hello@framer.com" class="hover:text-white">{"hello@framer.com"}</a>
                    </div>
                </div>
            </div>
            <p class="max-w-7xl mx-auto mt-12 pt-8 border-t border-gray-800 text-sm">{copyright(year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert_eq!(copyright(2026), "© 2026 Software Chamber. All rights reserved.");
    }
}
