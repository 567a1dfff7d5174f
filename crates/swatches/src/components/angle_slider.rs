use crate::interactive::{degrees_from_percent, degrees_label, percent_from_degrees};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AngleSliderProps {
    /// Currently selected angle in degrees.
    pub degrees: f64,
    /// Called with the new angle in degrees.
    pub on_change: Callback<f64>,
}

/// A range input over a full turn, labelled with the rounded angle.
#[function_component(AngleSlider)]
pub fn angle_slider(AngleSliderProps { degrees, on_change }: &AngleSliderProps) -> Html {
    let on_input = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Ok(percent) = input.value().parse::<f64>()
            {
                on_change.emit(degrees_from_percent(percent));
            }
        })
    };

    html! {
        <div class="angle-slider">
            <div class="angle-slider-label">{ degrees_label(*degrees) }</div>
            <input
                type="range"
                min="0"
                max="100"
                value={percent_from_degrees(*degrees).to_string()}
                oninput={on_input}
            />
        </div>
    }
}
