use leptos::*;
use studio_state::misc::motion::{stagger_delay_ms, Motion, RevealTrigger, PAGE_STAGGER_MS};
use studio_state::model::section::{Hero, Story};

use crate::app::components::cards::{ApproachCard, TeamCard};
use crate::app::components::reveal::Reveal;
use crate::app::components::sections::{CtaSection, TestimonialBlock};
use crate::app::global_state::GlobalState;

#[component]
pub fn AboutPage() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let about = global_state.content.with_value(|content| content.about.clone());

    let team = about
        .team
        .into_values()
        .enumerate()
        .map(|(i, member)| view! { <TeamCard member=member delay_ms=stagger_delay_ms(PAGE_STAGGER_MS, i)/> })
        .collect_view();

    let approach = about
        .approach
        .into_values()
        .enumerate()
        .map(|(i, item)| view! { <ApproachCard item=item delay_ms=stagger_delay_ms(PAGE_STAGGER_MS, i)/> })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-rose-50 via-amber-50 to-orange-50">
            <AboutHero hero=about.hero/>
            <StorySection story=about.story/>

            <section data-section="team" class="py-20 bg-white/50 backdrop-blur-sm">
                <div class="max-w-7xl mx-auto px-4">
                    <Reveal motion=Motion::SlideUp>
                        <h2 class="text-4xl font-serif text-rose-900 mb-16 text-center">{about.team_title}</h2>
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12">{team}</div>
                </div>
            </section>

            <section data-section="approach" class="py-20">
                <div class="max-w-7xl mx-auto px-4">
                    <Reveal motion=Motion::SlideUp>
                        <h2 class="text-4xl font-serif text-rose-900 mb-16 text-center">{about.approach_title}</h2>
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12">{approach}</div>
                </div>
            </section>

            <TestimonialBlock testimonial=about.testimonial/>
            <CtaSection cta=about.cta/>
        </div>
    }
}

/// Two stacked headings beside the studio image.
#[component]
fn AboutHero(hero: Hero) -> impl IntoView {
    let Hero { title, subtitle, image } = hero;

    view! {
        <section class="pt-32 pb-20">
            <div class="max-w-7xl mx-auto px-4 grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                <div>
                    <Reveal motion=Motion::SlideUp trigger=RevealTrigger::Mount>
                        <h1 class="text-5xl md:text-6xl font-serif text-rose-900">{title}</h1>
                    </Reveal>
                    {subtitle.map(|subtitle| view! {
                        <Reveal motion=Motion::SlideUp trigger=RevealTrigger::Mount delay_ms=PAGE_STAGGER_MS>
                            <h1 class="text-5xl md:text-6xl font-serif text-amber-700">{subtitle}</h1>
                        </Reveal>
                    })}
                </div>
                {image.map(|image| view! {
                    <Reveal motion=Motion::ScaleUp trigger=RevealTrigger::Mount delay_ms=stagger_delay_ms(PAGE_STAGGER_MS, 2)>
                        <img
                            src=image.url
                            alt=image.alt
                            class="w-full h-[500px] object-cover object-center rounded-3xl shadow-2xl"
                        />
                    </Reveal>
                })}
            </div>
        </section>
    }
}

#[component]
fn StorySection(story: Story) -> impl IntoView {
    let Story { title, paragraphs, image } = story;
    let paragraphs = paragraphs
        .into_iter()
        .map(|paragraph| view! { <p class="text-rose-800 mb-6 leading-relaxed">{paragraph}</p> })
        .collect_view();

    view! {
        <section data-section="story" class="py-20">
            <div class="max-w-7xl mx-auto px-4 grid grid-cols-1 md:grid-cols-2 gap-16 items-center">
                <Reveal motion=Motion::SlideUp>
                    <h2 class="text-4xl font-serif text-rose-900 mb-8">{title}</h2>
                    {paragraphs}
                </Reveal>
                <Reveal motion=Motion::FadeIn delay_ms=PAGE_STAGGER_MS>
                    <img
                        src=image.url
                        alt=image.alt
                        class="w-full h-[600px] object-cover object-center rounded-3xl shadow-xl"
                    />
                </Reveal>
            </div>
        </section>
    }
}
