use crate::util::color::Gradient;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CircleProps {
    pub gradient: Gradient,
}

/// A round swatch filled with `gradient`.
#[function_component(Circle)]
pub fn circle(CircleProps { gradient }: &CircleProps) -> Html {
    html! {
        <div
            class="swatch"
            style={format!("background-image: {gradient};")}
            title={gradient.to_string()}
        />
    }
}
