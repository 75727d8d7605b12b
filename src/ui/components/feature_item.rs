use dioxus::prelude::*;

use crate::ui::components::icons::{CheckIcon, MinusIcon};
use crate::ui::theme;

#[component]
pub fn FeatureItem(label: &'static str, included: bool) -> Element {
    rsx! {
        li {
            class: "{theme::feature_row(included)}",
            if included {
                CheckIcon { class: theme::feature_icon(true) }
            } else {
                MinusIcon { class: theme::feature_icon(false) }
            }
            span { "{label}" }
        }
    }
}
