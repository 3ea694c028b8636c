use leptos::*;
use leptos_router::use_location;
use leptos_use::use_window_scroll;
use studio_state::misc::page_url::PageUrl;
use web_sys::MouseEvent;

use crate::app::global_state::GlobalState;

pub const NAV_COMPACT_AFTER_PX: f64 = 100.0;

pub fn shrink_nav(nav_compact: RwSignal<bool>, y: f64) {
    let compact = y > NAV_COMPACT_AFTER_PX;
    if nav_compact.with_untracked(|&s| s != compact) {
        nav_compact.set(compact);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let nav_open = global_state.nav_open;
    let nav_compact = global_state.nav_compact;
    let studio_name = global_state.content.with_value(|content| content.studio.name.clone());

    let location = use_location();
    let current_page = create_memo(move |_| PageUrl::from_path(&location.pathname.get()));

    let (_, scroll_y) = use_window_scroll();
    create_effect(move |_| shrink_nav(nav_compact, scroll_y.get()));

    let on_nav_click = move |_: MouseEvent| {
        nav_open.update(|open: &mut bool| *open = !*open);
    };

    let links = PageUrl::nav()
        .into_iter()
        .map(|page| {
            let href = page.to_string();
            let label = page.label();
            let link_class = move || {
                format!(
                    "cursor-pointer border-b-2 transition duration-300 uppercase tracking-widest {}",
                    if current_page.with(|current| *current == page) {
                        "border-current"
                    } else {
                        "border-transparent opacity-70 hover:opacity-100"
                    }
                )
            };
            view! {
                <li>
                    <a on:click=move |_| nav_open.set(false) href=href class=link_class>{label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            id="thenav"
            class=move || {
                format!(
                    "fixed w-full top-0 z-[100] px-6 flex transition-all duration-500 {} {}",
                    if nav_compact.get() || nav_open.get() {
                        "py-2 bg-white/90 backdrop-blur text-gray-900 shadow"
                    } else {
                        "py-6 bg-transparent text-white"
                    },
                    if nav_open.get() {
                        "h-[100dvh] flex-col gap-6"
                    } else {
                        "items-center justify-between"
                    },
                )
            }
        >
            <div class="flex justify-between items-center w-full md:w-auto">
                <a href=PageUrl::url_home() class="font-serif text-2xl">{studio_name}</a>
                <button class="md:hidden text-2xl" on:click=on_nav_click>
                    {move || if nav_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <ul class=move || {
                format!(
                    "gap-6 text-center text-sm {}",
                    if nav_open.get() { "flex flex-col text-2xl" } else { "hidden md:flex" },
                )
            }>
                {links}
            </ul>
        </nav>
    }
}
