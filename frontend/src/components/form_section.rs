use shared::SectionState;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormSectionProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Whether the header toggles the body
    #[prop_or_default]
    pub collapsible: bool,
    #[prop_or(true)]
    pub default_expanded: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Groups form fields under an optional, optionally collapsible header.
#[function_component(FormSection)]
pub fn form_section(props: &FormSectionProps) -> Html {
    let expanded = use_state(|| props.default_expanded);
    let state = SectionState {
        collapsible: props.collapsible,
        expanded: *expanded,
    };

    if !state.needs_wrapper(props.title.is_some()) {
        return html! { <>{ for props.children.iter() }</> };
    }

    let on_click = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = state;
            state.toggle();
            expanded.set(state.expanded);
        })
    };

    let on_keydown = {
        let expanded = expanded.clone();
        Callback::from(move |e: KeyboardEvent| {
            let mut state = state;
            if state.handle_key(&e.key()) {
                // keep Space from scrolling the page
                e.prevent_default();
                expanded.set(state.expanded);
            }
        })
    };

    let title = props.title.clone().unwrap_or_else(|| AttrValue::from(""));
    let header = if props.collapsible {
        html! {
            <div
                class={classes!("form-section-header", "collapsible")}
                role="button"
                tabindex="0"
                aria-expanded={state.expanded.to_string()}
                onclick={on_click}
                onkeydown={on_keydown}
            >
                <span class="form-section-title">{title}</span>
                <span class={chevron_class(state.expanded)} aria-hidden="true">
                    <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path d="M7.41 8.59 12 13.17l4.59-4.58L18 10l-6 6-6-6 1.41-1.41z" fill="currentColor"/>
                    </svg>
                </span>
            </div>
        }
    } else if props.title.is_some() {
        html! {
            <div class="form-section-header">
                <span class="form-section-title">{title}</span>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <section class={section_class(&state)}>
            {header}
            if state.shows_body() {
                <div class="form-section-body">
                    { for props.children.iter() }
                </div>
            }
        </section>
    }
}

fn section_class(state: &SectionState) -> Classes {
    classes!(
        "form-section",
        state.collapsible.then_some("is-collapsible"),
        (state.collapsible && !state.expanded).then_some("is-collapsed"),
    )
}

fn chevron_class(expanded: bool) -> &'static str {
    if expanded {
        "form-section-chevron open"
    } else {
        "form-section-chevron"
    }
}
