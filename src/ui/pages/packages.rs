use dioxus::prelude::*;

use crate::domain::{Currency, ExchangeRate, PACKAGES};
use crate::infra::rates::{load_live_rate, RateClient};
use crate::ui::components::{build_cards, CurrencyToggle, PackageCard};
use crate::ui::theme;

const HEADING: &str = "Packages";
const SUBHEADING: &str = "Clear pricing. No surprises. Built for real businesses.";

/// Pricing section. A `RateClient` in context replaces the default endpoint.
#[component]
pub fn PackagesPage() -> Element {
    let currency = use_signal(Currency::default);
    use_context_provider(|| currency);

    let mut rate = use_signal(ExchangeRate::fallback);
    let client = try_use_context::<RateClient>();

    // Fires once per mount; the task is dropped with the scope.
    let _live_rate = use_future(move || {
        let client = client.clone();
        async move {
            let client = match client.map(Ok).unwrap_or_else(RateClient::new) {
                Ok(client) => client,
                Err(err) => {
                    tracing::debug!(error = %err, "rate client unavailable");
                    return;
                }
            };
            if let Some(live) = load_live_rate(&client).await {
                rate.set(live);
            }
        }
    });

    let cards = build_cards(&PACKAGES, currency(), &rate());

    rsx! {
        section {
            class: theme::SECTION,
            div {
                class: theme::CONTAINER,
                h2 { class: theme::HEADING, "{HEADING}" }
                p { class: theme::SUBHEADING, "{SUBHEADING}" }
                CurrencyToggle {}
                div {
                    class: theme::GRID,
                    for view in cards {
                        PackageCard { key: "{view.id:?}", view }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus::dioxus_core::{Mutation, Mutations, ScopeId, VirtualDom};
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    const PATH: &str = "/v6/latest/EUR";

    fn mount(server: &MockServer) -> VirtualDom {
        let client = RateClient::with_endpoint(&server.url(PATH)).expect("mock url parses");
        VirtualDom::new(PackagesPage).with_root_context(client)
    }

    fn texts(mutations: &Mutations) -> Vec<String> {
        mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::CreateTextNode { value, .. } | Mutation::SetText { value, .. } => {
                    Some(value.clone())
                }
                _ => None,
            })
            .collect()
    }

    fn click_listeners(mutations: &Mutations) -> usize {
        mutations
            .edits
            .iter()
            .filter(|edit| matches!(edit, Mutation::NewEventListener { name, .. } if name == "click"))
            .count()
    }

    fn assert_shows(texts: &[String], expected: &[&str]) {
        for text in expected {
            assert!(texts.iter().any(|t| t == text), "missing {text:?} in {texts:?}");
        }
    }

    fn select(dom: &mut VirtualDom, currency: Currency) -> Vec<String> {
        let mut selected = dom.in_scope(ScopeId::APP, consume_context::<Signal<Currency>>);
        dom.in_runtime(|| selected.set(currency));
        texts(&dom.render_immediate_to_vec())
    }

    /// Drives the dom until `expected` is rendered or the deadline passes.
    async fn render_until(dom: &mut VirtualDom, expected: &str) -> Vec<String> {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        let mut seen = Vec::new();
        while !seen.iter().any(|t| t == expected) {
            if tokio::time::timeout_at(deadline, dom.wait_for_work())
                .await
                .is_err()
            {
                break;
            }
            seen.extend(texts(&dom.render_immediate_to_vec()));
        }
        seen
    }

    /// Lets the fetch task finish when it causes no re-render.
    async fn settle(dom: &mut VirtualDom) {
        let _ = tokio::time::timeout(Duration::from_millis(500), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
    }

    #[tokio::test]
    async fn renders_heading_toggle_and_three_cards() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(503);
            })
            .await;

        let mut dom = mount(&server);
        let edits = dom.rebuild_to_vec();
        let text = texts(&edits);

        assert_shows(
            &text,
            &[
                HEADING,
                SUBHEADING,
                "EUR",
                "USD",
                "Simple Landing",
                "Full-Stack Starter",
                "Custom Application",
                "€500",
                "€1,000",
                "€40",
            ],
        );
        assert_eq!(click_listeners(&edits), 2);
        assert_eq!(text.iter().filter(|t| t.starts_with('€')).count(), 3);
        assert!(!text.iter().any(|t| t.starts_with('$')));
    }

    #[tokio::test]
    async fn toggle_switches_every_price_and_back() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(503);
            })
            .await;

        let mut dom = mount(&server);
        dom.rebuild_to_vec();

        let usd = select(&mut dom, Currency::Usd);
        assert_shows(&usd, &["$550", "$1,100", "$44"]);
        assert!(!usd.iter().any(|t| t.starts_with('€')));

        let eur = select(&mut dom, Currency::Eur);
        assert_shows(&eur, &["€500", "€1,000", "€40"]);

        settle(&mut dom).await;
        let usd_after_failure = select(&mut dom, Currency::Usd);
        assert_shows(&usd_after_failure, &["$550", "$1,100", "$44"]);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn live_rate_reprices_usd_cards_once_per_mount() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(200).json_body(json!({
                    "result": "success",
                    "rates": { "USD": 1.07 }
                }));
            })
            .await;

        let mut dom = mount(&server);
        dom.rebuild_to_vec();
        assert_shows(&select(&mut dom, Currency::Usd), &["$1,100"]);

        let repriced = render_until(&mut dom, "$1,070").await;
        assert_shows(&repriced, &["$535", "$1,070", "$43"]);

        dom.mark_all_dirty();
        dom.render_immediate_to_vec();
        assert_shows(&select(&mut dom, Currency::Eur), &["€500", "€1,000", "€40"]);
        settle(&mut dom).await;

        mock.assert_hits_async(1).await;
    }
}
