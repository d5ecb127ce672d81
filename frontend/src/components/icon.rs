use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub path: &'static str,
    #[prop_or_default]
    pub class: Classes,
    /// Filled glyphs (stars, social logos) instead of 2px outlines.
    #[prop_or_default]
    pub filled: bool,
    #[prop_or("0 0 24 24")]
    pub view_box: &'static str,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    if props.filled {
        html! {
            <svg class={props.class.clone()} viewBox={props.view_box} fill="currentColor" aria-hidden="true">
                <path d={props.path} />
            </svg>
        }
    } else {
        html! {
            <svg class={props.class.clone()} viewBox={props.view_box} fill="none" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={props.path} />
            </svg>
        }
    }
}
