use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::navigation::{is_modified_click, Navigator};

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that routes through the context `Navigator` on a plain click.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let navigator = use_context::<Navigator>();

    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(navigator) = &navigator else {
                return;
            };
            if is_modified_click(e.button(), e.ctrl_key(), e.meta_key(), e.shift_key(), e.alt_key()) {
                return;
            }
            e.prevent_default();
            Logger::debug_with_component("nav-link", &format!("navigating to {}", to));
            navigator.push(&to);
        })
    };

    html! {
        <a class={classes!("nav-link", props.class.clone())} href={props.to.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
