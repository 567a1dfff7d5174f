use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GroupProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// A titled block of sections, collapsed until its caret is clicked.
#[function_component(Group)]
pub fn group(GroupProps { title, children }: &GroupProps) -> Html {
    let open_state = use_state(|| false);
    let is_open = *open_state;

    let on_toggle = {
        let open_state = open_state.clone();
        Callback::from(move |_| open_state.set(!*open_state))
    };

    html! {
        <div class="group">
            <p>
                <button
                    class={classes!("group-toggle", is_open.then_some("group-toggle-open"))}
                    onclick={on_toggle}
                    aria-expanded={is_open.to_string()}
                >
                    {"▶"}
                </button>
                <strong>{ title }</strong>
            </p>
            if is_open {
                <div class="swatch-row">
                    { children.clone() }
                </div>
            }
        </div>
    }
}
