use crate::{badge::BadgeIdentity, components::badge::Badge};
use yew::prelude::*;

/// Text input with a live badge preview of whatever is typed.
#[function_component(UsernamePage)]
pub fn username_page() -> Html {
    let text_state = use_state(String::new);
    let identity = use_memo((*text_state).clone(), |text| BadgeIdentity::from_text(text));

    let on_input = {
        let text_state = text_state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                text_state.set(input.value());
            }
        })
    };

    html! {
        <div class="badge-page">
            <Badge gradient={identity.gradient()} glyph={identity.glyph.clone()} />
            <input
                class="badge-input"
                placeholder="Type something..."
                value={(*text_state).clone()}
                oninput={on_input}
            />
        </div>
    }
}
