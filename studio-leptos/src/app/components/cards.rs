use leptos::*;
use studio_state::misc::motion::Motion;
use studio_state::model::gallery::{Destination, FeaturedWork, GalleryItem};
use studio_state::model::section::ApproachItem;
use studio_state::model::service::ServiceItem;
use studio_state::model::team::TeamMember;

use crate::app::components::reveal::Reveal;

#[component]
pub fn FeaturedWorkCard(work: FeaturedWork, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let FeaturedWork { title, image_url, image_alt } = work;

    view! {
        <Reveal motion=Motion::SlideUp delay_ms=delay_ms>
            <div
                data-card="featured"
                class="relative aspect-square overflow-hidden group rounded-lg shadow-md hover:shadow-xl hover:-translate-y-2 transition-all duration-500"
            >
                <img
                    src=image_url
                    alt=image_alt
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end">
                    <div class="p-6 text-white">
                        <h3 class="text-xl font-serif">{title}</h3>
                        <p class="opacity-80">"View Gallery"</p>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

/// Cover of one portfolio collection, `kind` ends up in `data-card`.
#[component]
pub fn GalleryCard(
    item: GalleryItem,
    kind: &'static str,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let (aspect, title_size) = if wide {
        ("aspect-[16/9]", "text-2xl")
    } else {
        ("aspect-[3/4]", "text-xl")
    };
    let GalleryItem { title, image_url, link_path } = item;
    let alt = title.clone();

    view! {
        <Reveal motion=Motion::SlideUp delay_ms=delay_ms class="relative group">
            <a data-card=kind href=link_path class="block relative">
                <div class=format!("{} overflow-hidden", aspect)>
                    <img
                        src=image_url
                        alt=alt
                        class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                    />
                </div>
                <div class="absolute inset-0 bg-black/20 group-hover:bg-black/40 transition-colors duration-300 flex items-center justify-center">
                    <h3 class=format!("text-white {} tracking-widest", title_size)>{title}</h3>
                </div>
            </a>
        </Reveal>
    }
}

#[component]
pub fn DestinationCard(destination: Destination, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let Destination { name, location, image_url } = destination;
    let alt = name.clone();

    view! {
        <Reveal motion=Motion::SlideUp delay_ms=delay_ms>
            <div data-card="destination" class="bg-white rounded-lg overflow-hidden shadow-md hover:shadow-xl hover:-translate-y-2 transition-all duration-500">
                <div class="aspect-[3/4] overflow-hidden">
                    <img
                        src=image_url
                        alt=alt
                        class="w-full h-full object-cover transition-transform duration-700 hover:scale-110"
                    />
                </div>
                <div class="text-center py-6">
                    <h3 class="text-xl font-serif uppercase tracking-widest mb-1">{name}</h3>
                    <p class="text-sm text-gray-600 uppercase tracking-widest">{location}</p>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn ServiceCard(service: ServiceItem, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal motion=Motion::SlideUp delay_ms=delay_ms>
            <div data-card="service" class="bg-white p-8 rounded-lg shadow-md hover:shadow-xl hover:-translate-y-2 hover:scale-[1.02] transition-all duration-500 text-center">
                <div class="text-4xl mb-4">{service.icon}</div>
                <h3 class="text-xl font-serif mb-2">{service.title}</h3>
                <p class="text-gray-600">{service.description}</p>
            </div>
        </Reveal>
    }
}

#[component]
pub fn TeamCard(member: TeamMember, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let TeamMember { name, role, bio, image_url } = member;
    let alt = name.clone();

    view! {
        <Reveal motion=Motion::SlideUp delay_ms=delay_ms>
            <div data-card="team" class="flex flex-col md:flex-row gap-8 bg-gradient-to-br from-white/60 to-rose-50/60 backdrop-blur-sm rounded-3xl shadow-lg hover:shadow-2xl transition-all duration-300 p-8 hover:from-white/80 hover:to-rose-50/80 group">
                <img
                    src=image_url
                    alt=alt
                    class="w-full md:w-64 h-80 object-cover object-center rounded-2xl shadow-md group-hover:scale-105 transition-transform duration-300"
                />
                <div>
                    <h3 class="text-2xl font-serif text-rose-900 mb-2">{name}</h3>
                    <p class="text-amber-700 uppercase text-sm font-medium tracking-wider mb-4">{role}</p>
                    <p class="text-rose-800 leading-relaxed">{bio}</p>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn ApproachCard(item: ApproachItem, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal motion=Motion::SlideUp delay_ms=delay_ms>
            <div data-card="approach" class="p-6 rounded-3xl shadow-lg hover:shadow-2xl transition-all duration-300">
                <h3 class="text-2xl font-serif text-rose-900 mb-4">{item.title}</h3>
                <p class="text-rose-800 mb-6 leading-relaxed">{item.description}</p>
                <img
                    src=item.image_url
                    alt=item.image_alt
                    class="w-full h-64 object-cover object-center rounded-2xl shadow-md"
                />
            </div>
        </Reveal>
    }
}
