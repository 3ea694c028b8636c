use leptos::*;
use studio_state::misc::page_url::PageUrl;

use crate::app::global_state::GlobalState;

#[component]
pub fn Footer() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let (name, info) = global_state
        .content
        .with_value(|content| (content.studio.name.clone(), content.contact.studio.clone()));
    let mailto = format!("mailto:{}", info.email);
    let copyright = format!("\u{a9} {}", name);

    view! {
        <footer class="relative z-10 bg-neutral-900 text-neutral-300 py-12 px-4">
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8 text-sm">
                <div>
                    <p class="font-serif text-xl text-white mb-2">{name}</p>
                    <a href=PageUrl::url_contact() class="underline underline-offset-4">"Book a session"</a>
                </div>
                <div>
                    {info.mailing.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
                <div>
                    <p><a href=mailto>{info.email}</a></p>
                    <p>{info.phone}</p>
                </div>
            </div>
            <p class="text-center text-xs text-neutral-500 mt-10">{copyright}</p>
        </footer>
    }
}
