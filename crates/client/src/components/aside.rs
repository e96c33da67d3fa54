use dioxus::prelude::*;

use crate::components::ui::Card;

/// (headline, "time ago • readers")
const NEWS: [(&str, &str); 5] = [
    ("Local man adds 'visionary' to headline", "2h ago • 14,203 readers"),
    ("Recruiters discover the word 'synergy' again", "5h ago • 9,871 readers"),
    ("Startup pivots to pivoting", "9h ago • 4,420 readers"),
    ("Intern promoted to Chief Vibes Officer", "1d ago • 31,008 readers"),
    ("Study: 98% of posts begin with 'I'm humbled'", "2d ago • 77,777 readers"),
];

/// Right column with a news digest.
#[component]
pub fn Aside() -> Element {
    rsx! {
        div { style: "grid-area: aside", class: "hidden lg:block",
            Card { class: "p-4 sticky top-4",
                h2 { class: "font-semibold mb-2", "Megalite News" }
                ul { class: "space-y-3",
                    for (headline, meta) in NEWS {
                        li { key: "{headline}", class: "cursor-pointer",
                            p { class: "text-sm font-semibold hover:text-blue-600 hover:underline", "• {headline}" }
                            p { class: "pl-3 text-xs text-zinc-500", "{meta}" }
                        }
                    }
                }
            }
        }
    }
}
