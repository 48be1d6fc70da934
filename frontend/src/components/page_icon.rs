use shared::PageIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageIconViewProps {
    pub icon: PageIcon,
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(PageIconView)]
pub fn page_icon_view(props: &PageIconViewProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={props.icon.css_class()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={props.icon.svg_path()} fill="currentColor"/>
        </svg>
    }
}
