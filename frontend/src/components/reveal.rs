use web_sys::Element;
use yew::prelude::*;

use crate::browser::VisibilityObserver;
use crate::config;

/// How a block enters once it scrolls into view. The transitions themselves
/// live in the page stylesheet, keyed by these classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    FadeUp,
    SlideLeft,
    SlideRight,
    Zoom,
}

impl Motion {
    pub fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal-fade-up",
            Motion::SlideLeft => "reveal-slide-left",
            Motion::SlideRight => "reveal-slide-right",
            Motion::Zoom => "reveal-zoom",
        }
    }
}

pub fn reveal_classes(motion: Motion, visible: bool) -> Classes {
    classes!("reveal", motion.class(), visible.then(|| "visible"))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub motion: Motion,
    /// Staggers siblings that enter together.
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let visible = visible.clone();
                    VisibilityObserver::observe_once(&element, config::REVEAL_ROOT_MARGIN, move || {
                        visible.set(true)
                    })
                });
                if observer.is_none() {
                    visible.set(true);
                }
                move || drop(observer)
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={node} class={classes!(reveal_classes(props.motion, *visible), props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1), transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
        will-change: opacity, transform;
    }
    .reveal-fade-up { transform: translateY(50px); }
    .reveal-slide-left { transform: translateX(-50px); }
    .reveal-slide-right { transform: translateX(50px); }
    .reveal-zoom { transform: scale(0.9); }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal {
            transition: none;
            transform: none;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_blocks_carry_their_motion() {
        let classes = reveal_classes(Motion::SlideRight, false);
        assert!(classes.contains("reveal"));
        assert!(classes.contains("reveal-slide-right"));
        assert!(!classes.contains("visible"));
    }

    #[test]
    fn visible_blocks_gain_the_visible_class() {
        let classes = reveal_classes(Motion::default(), true);
        assert!(classes.contains("reveal-fade-up"));
        assert!(classes.contains("visible"));
    }
}
