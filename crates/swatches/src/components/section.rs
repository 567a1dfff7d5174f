use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(SectionProps { title, children }: &SectionProps) -> Html {
    html! {
        <div class="section">
            <p class="section-title"><strong>{ title }</strong></p>
            <div class="swatch-row">
                { children.clone() }
            </div>
        </div>
    }
}
