use dioxus::prelude::*;

#[component]
pub fn Separator(class: Option<String>) -> Element {
    let class = match class {
        Some(extra) if !extra.is_empty() => format!("h-px w-full shrink-0 {}", extra),
        _ => "h-px w-full shrink-0 bg-zinc-200".to_string(),
    };

    rsx! {
        div { role: "separator", class }
    }
}
