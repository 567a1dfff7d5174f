//! Groups whose swatches follow a slider instead of the generator.

use crate::{
    components::{angle_slider::AngleSlider, circle::Circle, group::Group, section::Section},
    interactive::{INITIAL_SPLIT, INITIAL_SPREAD, SwatchRows},
    util::color::Gradient,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InteractiveProps {
    /// Base angles of the color wheel, one swatch each.
    pub wheel: Rc<Vec<u32>>,
}

fn render_row(wheel: &[u32], gradients: &[Gradient]) -> Html {
    wheel
        .iter()
        .zip(gradients)
        .map(|(&angle, gradient)| html! { <Circle key={angle} gradient={gradient.clone()} /> })
        .collect()
}

fn render_rows(wheel: &[u32], rows: &SwatchRows) -> Html {
    html! {
        <>
            <Section title="Linear">{ render_row(wheel, &rows.linear) }</Section>
            <Section title="Radial">{ render_row(wheel, &rows.radial) }</Section>
        </>
    }
}

/// Two hues per swatch, `spread` degrees apart.
#[function_component(InteractiveTwoExamples)]
pub fn interactive_two_examples(InteractiveProps { wheel }: &InteractiveProps) -> Html {
    let spread_state = use_state(|| INITIAL_SPREAD);
    let rows = use_memo((wheel.clone(), *spread_state), |(wheel, spread)| {
        SwatchRows::two_color(wheel, *spread)
    });

    let on_change = {
        let spread_state = spread_state.clone();
        Callback::from(move |degrees: f64| spread_state.set(degrees))
    };

    html! {
        <Group title="Interactive 2 colors">
            <AngleSlider degrees={*spread_state} {on_change} />
            { render_rows(wheel, &rows) }
        </Group>
    }
}

/// Three hues per swatch: the base hue and two flanking its complement.
#[function_component(InteractiveThreeExamples)]
pub fn interactive_three_examples(InteractiveProps { wheel }: &InteractiveProps) -> Html {
    let split_state = use_state(|| INITIAL_SPLIT);
    let rows = use_memo((wheel.clone(), *split_state), |(wheel, split)| {
        SwatchRows::split_complementary(wheel, *split)
    });

    let on_change = {
        let split_state = split_state.clone();
        Callback::from(move |degrees: f64| split_state.set(degrees))
    };

    html! {
        <Group title="Interactive 3 color split complementary">
            <AngleSlider degrees={*split_state} {on_change} />
            { render_rows(wheel, &rows) }
        </Group>
    }
}
