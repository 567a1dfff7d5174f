use crate::{
    app::Route,
    components::{
        circle::Circle,
        group::Group,
        interactive_examples::{InteractiveThreeExamples, InteractiveTwoExamples},
        section::Section,
    },
    config::GalleryConfig,
    gallery::{GalleryPlan, SwatchGroup},
    random::{Randomizer, angles_with_separation, randomizer::MODULUS},
};
use log::{debug, error};
use rand::{Rng as _, SeedableRng as _, rngs::SmallRng};
use yew::prelude::*;
use yew_router::prelude::*;

fn render_group(group: &SwatchGroup) -> Html {
    html! {
        <Group key={group.title.clone()} title={group.title.clone()}>
            { for group.sections.iter().map(|section| html! {
                <Section title={section.title.clone()}>
                    { for section.swatches.iter().map(|gradient| html! {
                        <Circle gradient={gradient.clone()} />
                    })}
                </Section>
            })}
        </Group>
    }
}

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let location = use_location().expect("should be called inside a router");
    let navigator = use_navigator().expect("should be called inside a router");

    // Deserialize config from URL or use default
    let config = location.query::<GalleryConfig>().unwrap_or_default();

    // The generator lives only for one layout, so re-renders never consume draws.
    let plan = use_memo(config.clone(), |config| {
        debug!("Laying out gallery for {config:?}");
        let mut rng = Randomizer::new(config.seed);
        GalleryPlan::generate(&mut rng, config.palette_step)
            .inspect_err(|err| error!("Cannot lay out the gallery: {err}"))
    });
    let wheel = use_memo(config.palette_step, |palette_step| {
        angles_with_separation(*palette_step).unwrap_or_default()
    });

    let on_shuffle = {
        let config = config.clone();
        Callback::from(move |_| {
            let seed = SmallRng::from_entropy().gen_range(0..MODULUS);
            debug!("Shuffling gallery, new seed {seed}");
            if let Err(err) = navigator.push_with_query(&Route::Home, &config.with_seed(seed)) {
                error!("Failed to store seed {seed} in the query: {err:?}");
            }
        })
    };

    let groups = match &*plan {
        Ok(plan) => plan.groups.iter().map(render_group).collect::<Html>(),
        Err(err) => html! {
            <p class="gallery-error">{ format!("Cannot lay out the gallery: {err}") }</p>
        },
    };

    html! {
        <>
            <div class="gallery-controls">
                <span class="gallery-seed">{ format!("Seed {}", config.seed) }</span>
                {" "}
                <button onclick={on_shuffle}>{"Shuffle"}</button>
            </div>
            { groups }
            <InteractiveTwoExamples wheel={wheel.clone()} />
            <InteractiveThreeExamples wheel={wheel.clone()} />
        </>
    }
}
