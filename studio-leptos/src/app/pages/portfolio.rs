use leptos::*;
use studio_state::misc::motion::{stagger_delay_ms, Motion, LATEST_WORK_STAGGER_MS};
use studio_state::model::section::Testimonial;

use crate::app::components::cards::GalleryCard;
use crate::app::components::reveal::Reveal;
use crate::app::components::sections::{BackdropHero, PILL_LINK_CLASS};
use crate::app::global_state::GlobalState;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let portfolio = global_state.content.with_value(|content| content.portfolio.clone());
    let contact_link = portfolio.contact_link;

    let featured = portfolio
        .featured
        .into_values()
        .enumerate()
        .map(|(i, item)| view! { <GalleryCard item=item kind="gallery" delay_ms=stagger_delay_ms(LATEST_WORK_STAGGER_MS, i)/> })
        .collect_view();

    let latest = portfolio
        .latest
        .into_values()
        .enumerate()
        .map(|(i, item)| {
            view! { <GalleryCard item=item kind="latest" wide=true delay_ms=stagger_delay_ms(LATEST_WORK_STAGGER_MS, i)/> }
        })
        .collect_view();

    let featured_link = contact_link.clone();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-rose-50 via-amber-50 to-orange-50">
            <BackdropHero hero=portfolio.hero/>

            <section data-section="galleries" class="py-20 px-4">
                <div class="max-w-7xl mx-auto">
                    <Reveal motion=Motion::SlideUp>
                        <h2 class="text-2xl text-center tracking-widest text-rose-900 mb-16">{portfolio.featured_title}</h2>
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{featured}</div>
                    <Reveal motion=Motion::ScaleUp class="text-center mt-16">
                        <a href=featured_link.path class=PILL_LINK_CLASS>{featured_link.label}</a>
                    </Reveal>
                </div>
            </section>

            <section data-section="latest" class="py-20 px-4 bg-white/50 backdrop-blur-sm">
                <div class="max-w-7xl mx-auto">
                    <Reveal motion=Motion::SlideUp>
                        <h2 class="text-2xl text-center tracking-widest text-rose-900 mb-16">{portfolio.latest_title}</h2>
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">{latest}</div>
                    <Reveal motion=Motion::ScaleUp class="text-center mt-16">
                        <a href=contact_link.path class=PILL_LINK_CLASS>{contact_link.label}</a>
                    </Reveal>
                </div>
            </section>

            <QuoteBlock quote=portfolio.quote/>
        </div>
    }
}

#[component]
fn QuoteBlock(quote: Testimonial) -> impl IntoView {
    let lines = quote
        .quote_lines()
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.to_string();
            if i == 0 {
                line.into_view()
            } else {
                view! { <br/>{line} }.into_view()
            }
        })
        .collect_view();
    let author = format!("\u{2014} {}", quote.author);

    view! {
        <section data-section="quote" class="py-32 px-4">
            <Reveal motion=Motion::FadeIn class="max-w-4xl mx-auto text-center">
                <blockquote class="text-3xl md:text-4xl font-serif italic text-rose-900 mb-8">{lines}</blockquote>
                <p class="text-rose-700 tracking-widest">{author}</p>
            </Reveal>
        </section>
    }
}
