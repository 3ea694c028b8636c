use leptos::*;
use studio_state::misc::motion::{stagger_delay_ms, Motion, RevealTrigger, HOME_STAGGER_MS};
use tracing::error;

use crate::app::components::cards::{DestinationCard, FeaturedWorkCard, ServiceCard};
use crate::app::components::carousel::HeroCarousel;
use crate::app::components::reveal::Reveal;
use crate::app::components::sections::CtaSection;
use crate::app::global_state::GlobalState;

#[component]
pub fn HomePage() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let home = global_state.content.with_value(|content| content.home.clone());

    let carousel = match (home.carousel_state(), home.carousel_period()) {
        (Ok(carousel), Ok(period)) => view! { <HeroCarousel carousel=carousel period=period/> }.into_view(),
        (Err(err), _) | (_, Err(err)) => {
            error!("home: carousel disabled: {}", err);
            ().into_view()
        }
    };

    let featured = home
        .featured
        .into_values()
        .enumerate()
        .map(|(i, work)| view! { <FeaturedWorkCard work=work delay_ms=stagger_delay_ms(HOME_STAGGER_MS, i)/> })
        .collect_view();

    let tagline_len = home.tagline.len();
    let tagline = home
        .tagline
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let spacing = if i + 1 < tagline_len { "block mb-4" } else { "block" };
            view! {
                <Reveal motion=Motion::SlideUp delay_ms=stagger_delay_ms(HOME_STAGGER_MS, i)>
                    <span class=format!("{} hover:tracking-wider transition-all duration-500", spacing)>{line}</span>
                </Reveal>
            }
        })
        .collect_view();

    let destinations = home
        .destinations
        .into_values()
        .enumerate()
        .map(|(i, destination)| view! { <DestinationCard destination=destination delay_ms=stagger_delay_ms(HOME_STAGGER_MS, i)/> })
        .collect_view();

    let services = home
        .services
        .into_values()
        .enumerate()
        .map(|(i, service)| view! { <ServiceCard service=service delay_ms=stagger_delay_ms(HOME_STAGGER_MS, i)/> })
        .collect_view();

    view! {
        <div class="relative min-h-[200vh]">
            {carousel}
            <div class="relative z-10 h-screen flex items-center justify-center text-center text-white">
                <div class="max-w-3xl px-4">
                    <Reveal motion=Motion::SlideUp trigger=RevealTrigger::Mount>
                        <h1 class="text-5xl md:text-7xl font-serif mb-6 drop-shadow-lg">{home.hero.title}</h1>
                    </Reveal>
                    {home.hero.subtitle.map(|subtitle| view! {
                        <Reveal motion=Motion::SlideUp trigger=RevealTrigger::Mount delay_ms=HOME_STAGGER_MS>
                            <p class="text-xl md:text-2xl mb-8 drop-shadow">{subtitle}</p>
                        </Reveal>
                    })}
                    <Reveal motion=Motion::ScaleUp trigger=RevealTrigger::Mount delay_ms=stagger_delay_ms(HOME_STAGGER_MS, 2)>
                        <a
                            href=home.hero_link.path
                            class="inline-block bg-white text-gray-900 px-8 py-3 uppercase tracking-widest text-sm hover:bg-gray-100 transition-all duration-300 hover:px-10 hover:shadow-lg"
                        >
                            {home.hero_link.label}
                        </a>
                    </Reveal>
                </div>
            </div>
        </div>

        <section data-section="featured" class="relative z-10 bg-white py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <Reveal motion=Motion::SlideUp>
                    <h2 class="text-4xl font-serif text-center mb-12">{home.featured_title}</h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{featured}</div>
            </div>
        </section>

        <section data-section="tagline" class="relative z-10 bg-transparent text-white py-20 px-4 flex justify-center items-center min-h-[50vh]">
            <div class="text-center max-w-3xl">
                <h2 class="text-4xl md:text-5xl font-serif drop-shadow-lg">{tagline}</h2>
            </div>
        </section>

        <section data-section="destinations" class="relative z-10 bg-gray-100 py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{destinations}</div>
                <Reveal motion=Motion::ScaleUp class="text-center mt-10">
                    <a
                        href=home.destinations_link.path
                        class="inline-block bg-gray-900 text-white px-10 py-4 uppercase tracking-widest text-sm hover:bg-black transition-all duration-300 hover:px-12 rounded hover:shadow-lg"
                    >
                        {home.destinations_link.label}
                    </a>
                </Reveal>
            </div>
        </section>

        <section data-section="services" class="relative z-10 bg-gray-50 py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <Reveal motion=Motion::SlideUp>
                    <h2 class="text-4xl font-serif text-center mb-12">{home.services_title}</h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{services}</div>
            </div>
        </section>

        <CtaSection cta=home.cta dark=true/>
    }
}
