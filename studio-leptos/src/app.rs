use global_state::GlobalState;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use studio_state::content::SiteContent;
use tracing::error;

use components::footer::Footer;
use components::navbar::Navbar;
use pages::about::AboutPage;
use pages::contact::ContactPage;
use pages::home::HomePage;
use pages::not_found::NotFound;
use pages::portfolio::PortfolioPage;

pub mod components;
pub mod global_state;
pub mod hooks;
pub mod pages;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            error!("app: site content failed to load: {}", err);
            return view! { <ContentUnavailable/> }.into_view();
        }
    };
    let studio = content.studio.clone();
    let global_state = GlobalState::new(content);
    provide_context(global_state);

    view! {
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <Meta name="description" content=studio.description.clone()/>
        <Meta name="keywords" content=studio.keywords/>
        <Meta name="twitter:title" content=studio.name.clone()/>
        <Meta name="twitter:description" content=studio.description/>

        <Stylesheet id="leptos" href="/pkg/studio.css"/>
        <Title text=studio.name/>
        <Body class=move || format!("bg-neutral-50 text-gray-900 antialiased {}", if global_state.nav_open.get() { "overflow-hidden h-[100dvh]" } else { "" })/>
        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                    <Route path="/about" view=AboutPage/>
                    <Route path="/portfolio" view=PortfolioPage/>
                    <Route path="/contact" view=ContactPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
    .into_view()
}

#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <Title text="Unavailable"/>
        <main class="min-h-screen grid place-items-center text-center px-4">
            <div>
                <h1 class="text-4xl font-serif mb-4">"We'll be right back"</h1>
                <p class="text-gray-600">"The site is temporarily unavailable, please try again shortly."</p>
            </div>
        </main>
    }
}
