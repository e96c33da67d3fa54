use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

/// White rounded panel used for every feed and sidebar block.
#[component]
pub fn Card(props: CardProps) -> Element {
    let base = "rounded-lg border border-zinc-300 bg-white";
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    };

    rsx! {
        div { class, {props.children} }
    }
}
