use leptos::*;
use studio_state::misc::motion::{Motion, RevealTrigger};
use studio_state::model::section::{CallToAction, Hero, Testimonial};

use crate::app::components::reveal::Reveal;

pub const PILL_LINK_CLASS: &str = "inline-block bg-gradient-to-r from-rose-600 to-orange-600 text-white px-10 py-4 rounded-full uppercase tracking-widest text-sm hover:shadow-xl transition-all duration-300 hover:scale-105";

/// Full screen hero with the image as a dimmed backdrop.
#[component]
pub fn BackdropHero(hero: Hero) -> impl IntoView {
    let Hero { title, subtitle, image } = hero;

    view! {
        <Reveal trigger=RevealTrigger::Mount class="relative h-screen flex items-center justify-center">
            {image.map(|image| view! {
                <div class="absolute inset-0 z-0">
                    <img src=image.url alt=image.alt class="w-full h-full object-cover"/>
                    <div class="absolute inset-0 bg-gradient-to-br from-black/50 via-black/40 to-black/30"></div>
                </div>
            })}
            <div class="relative z-10 text-center text-white max-w-4xl mx-auto px-4">
                <Reveal motion=Motion::SlideUp trigger=RevealTrigger::Mount>
                    <h1 class="text-6xl md:text-7xl font-serif mb-6 drop-shadow-lg">{title}</h1>
                </Reveal>
                {subtitle.map(|subtitle| view! {
                    <Reveal motion=Motion::SlideUp trigger=RevealTrigger::Mount delay_ms=250>
                        <p class="text-lg md:text-xl font-light tracking-wide text-rose-50">{subtitle}</p>
                    </Reveal>
                })}
            </div>
        </Reveal>
    }
}

#[component]
pub fn CtaSection(cta: CallToAction, #[prop(optional)] dark: bool) -> impl IntoView {
    let CallToAction { title, body, label, path } = cta;
    let (section_class, title_class, body_class, link_class) = if dark {
        (
            "relative z-10 bg-gray-900 text-white py-20 px-4",
            "text-4xl md:text-5xl font-serif mb-6",
            "text-xl mb-10 text-gray-300",
            "inline-block bg-white text-gray-900 px-10 py-4 rounded-full uppercase tracking-widest text-sm hover:bg-gray-100 transition-all duration-300 hover:px-12 hover:shadow-lg",
        )
    } else {
        (
            "py-20",
            "text-4xl font-serif text-rose-900 mb-6",
            "text-rose-800 mb-10 leading-relaxed",
            PILL_LINK_CLASS,
        )
    };

    view! {
        <section data-section="cta" class=section_class>
            <div class="max-w-4xl mx-auto px-4 text-center">
                <Reveal motion=Motion::SlideUp>
                    <h2 class=title_class>{title}</h2>
                </Reveal>
                <Reveal motion=Motion::SlideUp delay_ms=250>
                    <p class=body_class>{body}</p>
                </Reveal>
                <Reveal motion=Motion::ScaleUp delay_ms=500>
                    <a href=path class=link_class>{label}</a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialBlock(testimonial: Testimonial) -> impl IntoView {
    let Testimonial { lead, quote, author } = testimonial;

    view! {
        <section data-section="testimonial" class="py-20 px-4 bg-gradient-to-r from-rose-100/80 via-amber-50/90 to-orange-100/80 backdrop-blur-sm">
            <Reveal motion=Motion::SlideUp class="max-w-4xl mx-auto text-center">
                {lead.map(|lead| view! { <p class="text-rose-800 mb-8">{lead}</p> })}
                <blockquote class="text-2xl font-serif italic text-rose-900 mb-6">
                    {format!("\u{201c}{}\u{201d}", quote)}
                </blockquote>
                <p class="text-rose-700 uppercase tracking-widest">{format!("\u{2014} {}", author)}</p>
            </Reveal>
        </section>
    }
}
