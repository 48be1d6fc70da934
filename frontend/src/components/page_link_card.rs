use shared::{PageIcon, Translator};
use yew::prelude::*;

use super::nav_link::NavLink;
use super::page_icon::PageIconView;
use crate::hooks::use_app_context::use_translator;

#[derive(Properties, PartialEq)]
pub struct PageLinkCardProps {
    /// Destination route; also selects the icon
    pub path: AttrValue,
    /// Translation key of the card title
    pub title: AttrValue,
}

#[function_component(PageLinkCard)]
pub fn page_link_card(props: &PageLinkCardProps) -> Html {
    let catalog = use_translator();
    let icon = PageIcon::for_path(&props.path);
    let title = catalog.translate(&props.title, Some(&*props.title));

    html! {
        <NavLink to={props.path.clone()} class={classes!("page-link-card")}>
            <span class="page-link-icon">
                <PageIconView {icon} />
            </span>
            <span class="page-link-title">{title}</span>
            <span class="page-link-chevron" aria-hidden="true">{"›"}</span>
        </NavLink>
    }
}
