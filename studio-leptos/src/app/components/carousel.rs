use chrono::TimeDelta;
use leptos::*;
use studio_state::misc::carousel::CarouselState;

use crate::app::hooks::use_carousel::use_carousel;

/// Every image is rendered stacked, only the current one is opaque so the
/// change of index cross-fades instead of swapping.
#[component]
pub fn HeroCarousel(carousel: CarouselState, period: TimeDelta) -> impl IntoView {
    let images: Vec<(usize, String)> = carousel.images().iter().cloned().enumerate().collect();
    let carousel = use_carousel(carousel, period);

    view! {
        <div class="fixed inset-0 z-0">
            {images
                .into_iter()
                .map(|(index, url)| {
                    let layer_class = move || {
                        format!(
                            "absolute inset-0 transition-opacity duration-1000 {}",
                            carousel.with(|carousel| carousel.layer_opacity(index)).class(),
                        )
                    };
                    view! {
                        <div data-carousel-layer=index class=layer_class>
                            <img src=url alt=format!("Hero {}", index + 1) class="w-full h-full object-cover"/>
                            <div class="absolute inset-0 bg-black/40"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
