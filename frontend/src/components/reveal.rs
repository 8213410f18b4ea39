use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

/// True once an element whose top edge sits at `top` has scrolled at least
/// `offset` pixels above the bottom of a viewport `viewport_height` tall.
pub fn is_in_view(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

fn node_in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or_default();
    is_in_view(element.get_bounding_client_rect().top(), viewport_height, config::REVEAL_OFFSET)
}

/// Latches to true the first time the node comes into view.
#[hook]
pub fn use_revealed(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                if !*revealed && node_in_view(&node) {
                    revealed.set(true);
                }
                || ()
            },
            scroll_y,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone());

    html! {
        <div ref={node} class={classes!(props.class.clone(), "scroll-animate", revealed.then(|| "animate"))}>
            { for props.children.iter() }
        </div>
    }
}
