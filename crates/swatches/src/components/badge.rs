use crate::util::color::Gradient;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub gradient: Gradient,
    /// Letter knocked out of the white disc. May be empty.
    pub glyph: AttrValue,
}

/// An avatar: a gradient circle with a white disc, the glyph cut out of the disc.
#[function_component(Badge)]
pub fn badge(BadgeProps { gradient, glyph }: &BadgeProps) -> Html {
    html! {
        <div class="swatch badge" style={format!("background-image: {gradient};")}>
            <svg width="100%" height="100%">
                <mask id="knockout-text">
                    <rect width="100%" height="100%" fill="#fff" x="0" y="0" />
                    <text
                        x="50%"
                        y="50%"
                        fill="#000"
                        text-anchor="middle"
                        font-size="50"
                        alignment-baseline="central"
                        class="badge-glyph"
                    >
                        { glyph }
                    </text>
                </mask>
                <circle
                    cx="50%"
                    cy="50%"
                    r="45%"
                    fill="#fff"
                    fill-opacity="1"
                    mask="url(#knockout-text)"
                />
            </svg>
        </div>
    }
}
