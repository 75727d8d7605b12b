use dioxus::prelude::*;

use crate::{ui::pages::PackagesPage, util::assets};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        PackagesPage {}
    }
}
