use yew::prelude::*;
use yew::{Children, Properties};

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wraps its children in a block that slides up and fades in the first time
/// it scrolls into view, then stays put.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", state.is_visible().then(|| "revealed"), props.class.clone())}
            style={state.css()}
        >
            { for props.children.iter() }
        </div>
    }
}
