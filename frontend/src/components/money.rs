use common::product::Money;
use dioxus::prelude::*;

#[component]
pub fn MoneyText(data: ReadSignal<Money>, without_trailing_zeros: bool, class: Option<String>) -> Element {
    let text = data.read().format(without_trailing_zeros);
    rsx! {
        span { class: class.unwrap_or_default(), "{text}" }
    }
}
