use leptos::*;
use studio_state::model::contact::FormField;

const FIELD_CLASS: &str = "w-full px-4 py-3 border-b border-rose-200 bg-transparent focus:outline-none focus:border-rose-500 text-rose-900 placeholder-rose-300";

/// Uncontrolled enquiry form. Nothing is validated or submitted from here,
/// the browser's native form behavior applies.
#[component]
pub fn ContactForm(fields: Vec<FormField>, submit_label: String) -> impl IntoView {
    view! {
        <form class="space-y-6">
            <div class="space-y-4">
                {fields
                    .into_iter()
                    .map(|field| {
                        let placeholder = field.placeholder();
                        let name = field.name;
                        let data_field = name.clone();
                        match field.kind.input_type() {
                            Some(input_type) => view! {
                                <input
                                    data-field=data_field
                                    type=input_type
                                    name=name
                                    placeholder=placeholder
                                    class=FIELD_CLASS
                                />
                            }
                            .into_view(),
                            None => view! {
                                <textarea
                                    data-field=data_field
                                    name=name
                                    placeholder=placeholder
                                    rows="4"
                                    class=FIELD_CLASS
                                ></textarea>
                            }
                            .into_view(),
                        }
                    })
                    .collect_view()}
            </div>
            <button
                type="submit"
                class="bg-gradient-to-r from-rose-600 to-orange-600 text-white px-8 py-3 rounded-full uppercase tracking-widest text-sm hover:shadow-xl hover:scale-105 transition-all duration-300"
            >
                {submit_label}
            </button>
        </form>
    }
}
