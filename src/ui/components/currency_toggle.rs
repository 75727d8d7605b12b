use dioxus::prelude::*;

use crate::domain::Currency;
use crate::ui::theme;

/// EUR/USD button group bound to the page's `Signal<Currency>` context.
#[component]
pub fn CurrencyToggle() -> Element {
    let mut selected = use_context::<Signal<Currency>>();
    let active = selected();

    rsx! {
        div {
            class: theme::TOGGLE_WRAPPER,
            div {
                class: theme::TOGGLE_GROUP,
                for currency in Currency::ALL {
                    button {
                        key: "{currency}",
                        class: "{theme::toggle_button(currency == active)}",
                        onclick: move |_| selected.set(currency),
                        "{currency}"
                    }
                }
            }
        }
    }
}
