use leptos::*;
use leptos_router::use_location;
use studio_state::misc::motion::{Motion, RevealTrigger};
use studio_state::misc::page_url::PageUrl;
use tracing::debug;

use crate::app::components::reveal::Reveal;
use crate::app::components::sections::PILL_LINK_CLASS;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    debug!("not found: {}", location.pathname.get_untracked());

    set_not_found_status();

    view! {
        <section data-section="not-found" class="min-h-screen flex items-center justify-center px-4 bg-gradient-to-br from-rose-50 via-amber-50 to-orange-50">
            <Reveal motion=Motion::SlideUp trigger=RevealTrigger::Mount class="text-center">
                <h1 class="text-6xl font-serif text-rose-900 mb-6">"Page not found"</h1>
                <p class="text-rose-800 mb-10">"The page you are looking for does not exist."</p>
                <a href=PageUrl::url_home() class=PILL_LINK_CLASS>"Back to home"</a>
            </Reveal>
        </section>
    }
}

#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
        response.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }
}

#[cfg(not(feature = "ssr"))]
fn set_not_found_status() {}
