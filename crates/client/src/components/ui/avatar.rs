use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            AvatarSize::Small => "w-8 h-8 text-xs",
            AvatarSize::Medium => "w-12 h-12 text-base",
            AvatarSize::Large => "w-24 h-24 text-3xl border-4 border-white",
        }
    }
}

/// Round profile picture, or the first letter of `name` when there is no image.
#[component]
pub fn UserAvatar(
    name: String,
    image_url: Option<String>,
    size: Option<AvatarSize>,
    class: Option<String>,
) -> Element {
    let size = size.unwrap_or_default().class();
    let extra = class.unwrap_or_default();
    let initial = name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    let image = image_url.filter(|url| !url.is_empty());

    rsx! {
        if let Some(ref url) = image {
            img {
                class: "{size} rounded-full object-cover shrink-0 {extra}",
                src: "{url}",
                alt: "{name}",
            }
        } else {
            div { class: "{size} rounded-full shrink-0 flex items-center justify-center font-semibold text-white bg-gradient-to-br from-sky-500 to-blue-700 {extra}",
                "{initial}"
            }
        }
    }
}
