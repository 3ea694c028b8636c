use leptos::{create_rw_signal, RwSignal, StoredValue};
use studio_state::content::SiteContent;

#[derive(Copy, Clone)]
pub struct GlobalState {
    pub nav_open: RwSignal<bool>,
    pub nav_compact: RwSignal<bool>,
    pub content: StoredValue<SiteContent>,
}

impl GlobalState {
    pub fn new(content: SiteContent) -> Self {
        Self {
            nav_open: create_rw_signal(false),
            nav_compact: create_rw_signal(false),
            content: StoredValue::new(content),
        }
    }
}
