use leptos::html::Div;
use leptos::*;
use leptos_use::use_element_visibility;
use studio_state::misc::motion::{Motion, RevealTrigger};

/// Keeps its children in the `motion` hidden state until `trigger` fires, then
/// transitions them to the shown state. Once revealed it stays revealed.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(optional)] trigger: RevealTrigger,
    #[prop(optional)] delay_ms: u32,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let el = create_node_ref::<Div>();
    let revealed = create_rw_signal(false);
    let visible: Signal<bool> = if trigger.observes_viewport() {
        use_element_visibility(el)
    } else {
        Signal::derive(|| false)
    };

    create_effect(move |_| {
        let show = trigger.fires(visible.get());
        if show && !revealed.get_untracked() {
            revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || motion.class(revealed.get(), &class)
            style=format!("transition-delay: {}ms", delay_ms)
        >
            {children()}
        </div>
    }
}
