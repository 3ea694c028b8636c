use leptos::*;
use studio_state::misc::motion::{stagger_delay_ms, Motion, PAGE_STAGGER_MS};
use studio_state::model::contact::StudioInfo;

use crate::app::components::contact_form::ContactForm;
use crate::app::components::reveal::Reveal;
use crate::app::components::sections::{BackdropHero, TestimonialBlock};
use crate::app::global_state::GlobalState;

#[component]
pub fn ContactPage() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let contact = global_state.content.with_value(|content| content.contact.clone());
    let info_image = contact.info_image;

    view! {
        <div class="min-h-screen bg-gradient-to-br from-rose-50 via-neutral-50 to-orange-50">
            <BackdropHero hero=contact.hero/>

            <section data-section="info" class="py-20 px-4">
                <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-16 items-center">
                    <Reveal motion=Motion::FadeIn>
                        <img
                            src=info_image.url
                            alt=info_image.alt
                            class="w-full h-[600px] object-cover rounded-3xl shadow-xl"
                        />
                    </Reveal>
                    <div>
                        <Reveal motion=Motion::SlideUp>
                            <h2 class="text-3xl font-serif text-rose-900 mb-10 tracking-widest">{contact.info_title}</h2>
                        </Reveal>
                        <InfoCards info=contact.studio/>
                    </div>
                </div>
            </section>

            <section data-section="form" class="py-20 px-4 bg-white/50 backdrop-blur-sm">
                <Reveal motion=Motion::SlideUp class="max-w-3xl mx-auto">
                    <p class="text-rose-800 mb-10 text-center leading-relaxed">{contact.form_intro}</p>
                    <ContactForm fields=contact.fields submit_label=contact.submit_label/>
                </Reveal>
            </section>

            <TestimonialBlock testimonial=contact.testimonial/>
        </div>
    }
}

#[component]
fn InfoCards(info: StudioInfo) -> impl IntoView {
    let StudioInfo { email, mailing, phone } = info;
    let mailto = format!("mailto:{}", email);
    let tel = format!("tel:{}", phone);
    let mailing = mailing
        .into_iter()
        .map(|line| view! { <p class="text-rose-800">{line}</p> })
        .collect_view();

    view! {
        <div class="space-y-6">
            <Reveal motion=Motion::SlideUp>
                <div data-card="info" class="bg-white/70 rounded-2xl shadow-md p-6">
                    <h3 class="text-sm uppercase tracking-widest text-amber-700 mb-2">"EMAIL"</h3>
                    <a href=mailto class="text-rose-900 hover:text-rose-600 transition-colors">{email}</a>
                </div>
            </Reveal>
            <Reveal motion=Motion::SlideUp delay_ms=stagger_delay_ms(PAGE_STAGGER_MS, 1)>
                <div data-card="info" class="bg-white/70 rounded-2xl shadow-md p-6">
                    <h3 class="text-sm uppercase tracking-widest text-amber-700 mb-2">"MAILING"</h3>
                    {mailing}
                </div>
            </Reveal>
            <Reveal motion=Motion::SlideUp delay_ms=stagger_delay_ms(PAGE_STAGGER_MS, 2)>
                <div data-card="info" class="bg-white/70 rounded-2xl shadow-md p-6">
                    <h3 class="text-sm uppercase tracking-widest text-amber-700 mb-2">"PHONE"</h3>
                    <a href=tel class="text-rose-900 hover:text-rose-600 transition-colors">{phone}</a>
                </div>
            </Reveal>
        </div>
    }
}
