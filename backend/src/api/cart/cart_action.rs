//! Handles cart form submissions (add and remove lines).

use anyhow::Context;
use common::{
    analytics::AnalyticsPayload,
    cart::{Cart, CartAction, CartActionResult, CartLineInput, form_field},
    query_params::QueryParams,
    storefront_const::DEFAULT_COUNTRY_CODE,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::api::cart::cart_queries::{
    CART_CREATE_MUTATION, CART_FRAGMENT, CART_LINES_ADD_MUTATION, CART_LINES_REMOVE_MUTATION,
};
use crate::storefront_utils::{fragments::with_fragments, storefront_client::storefront_mutate};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartMutationPayload {
    cart: Option<Cart>,
    #[serde(default)]
    user_errors: Vec<CartUserError>,
}

#[derive(Debug, Deserialize)]
struct CartUserError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum CartMutationResponse {
    CartCreate(CartMutationPayload),
    CartLinesAdd(CartMutationPayload),
    CartLinesRemove(CartMutationPayload),
}

impl CartMutationResponse {
    fn into_payload(self) -> CartMutationPayload {
        match self {
            Self::CartCreate(p) | Self::CartLinesAdd(p) | Self::CartLinesRemove(p) => p,
        }
    }
}

/// Parsed cart form: which mutation to run and with what.
#[derive(Debug, PartialEq)]
enum CartMutation {
    Create { lines: Vec<CartLineInput> },
    AddLines { cart_id: String, lines: Vec<CartLineInput> },
    RemoveLines { cart_id: String, line_ids: Vec<String> },
}

fn parse_cart_form(cart_id: Option<String>, form_data: &QueryParams) -> anyhow::Result<CartMutation> {
    let action = form_data.get(form_field::CART_ACTION).context("Missing cartAction")?;
    let action = CartAction::from_form_value(action)
        .with_context(|| format!("Unsupported cart action: {}", action))?;
    let cart_id = cart_id.filter(|id| !id.is_empty());

    match action {
        CartAction::AddToCart => {
            let lines = form_data.get(form_field::LINES).context("Missing lines")?;
            let lines: Vec<CartLineInput> = serde_json::from_str(lines).context("Invalid lines")?;
            if lines.is_empty() {
                anyhow::bail!("No lines to add");
            }
            Ok(match cart_id {
                Some(cart_id) => CartMutation::AddLines { cart_id, lines },
                None => CartMutation::Create { lines },
            })
        }
        CartAction::RemoveFromCart => {
            let cart_id = cart_id.context("No cart to remove lines from")?;
            let line_ids = form_data.get(form_field::LINE_IDS).context("Missing linesIds")?;
            let line_ids: Vec<String> = serde_json::from_str(line_ids).context("Invalid linesIds")?;
            Ok(CartMutation::RemoveLines { cart_id, line_ids })
        }
    }
}

/// Runs the submitted cart action, creating a cart when there is none yet.
pub async fn perform_cart_action(cart_id: Option<String>, form_data: QueryParams) -> anyhow::Result<CartActionResult> {
    let country = form_data
        .get(form_field::COUNTRY_CODE)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_COUNTRY_CODE)
        .to_string();

    let (mutation, variables) = match parse_cart_form(cart_id, &form_data)? {
        CartMutation::Create { lines } => (
            CART_CREATE_MUTATION,
            json!({ "input": { "lines": lines, "buyerIdentity": { "countryCode": country } }, "country": country }),
        ),
        CartMutation::AddLines { cart_id, lines } => (
            CART_LINES_ADD_MUTATION,
            json!({ "cartId": cart_id, "lines": lines, "country": country }),
        ),
        CartMutation::RemoveLines { cart_id, line_ids } => (
            CART_LINES_REMOVE_MUTATION,
            json!({ "cartId": cart_id, "lineIds": line_ids, "country": country }),
        ),
    };

    let mutation = with_fragments(mutation, &[CART_FRAGMENT]);
    let payload = storefront_mutate::<CartMutationResponse>(&mutation, variables)
        .await?
        .into_payload();
    if !payload.user_errors.is_empty() {
        let messages = payload.user_errors.into_iter().map(|e| e.message).collect::<Vec<_>>();
        anyhow::bail!("Cart update rejected: {}", messages.join("; "));
    }
    let cart = payload.cart.context("Cart mutation returned no cart")?;
    info!("cart {} now has {} items", cart.id, cart.total_quantity);

    let mut analytics = AnalyticsPayload::new();
    analytics.insert("cartId".to_string(), Value::from(cart.id.clone()));
    Ok(CartActionResult { cart, analytics })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    const LINES: &str = r#"[{"merchandiseId":"gid://shopify/ProductVariant/1","quantity":1}]"#;

    #[test]
    fn add_without_cart_creates_one() {
        let mutation = parse_cart_form(None, &form(&[("cartAction", "ADD_TO_CART"), ("lines", LINES)])).unwrap();
        assert_eq!(
            mutation,
            CartMutation::Create {
                lines: vec![CartLineInput {
                    merchandise_id: "gid://shopify/ProductVariant/1".to_string(),
                    quantity: 1,
                }]
            }
        );
    }

    #[test]
    fn add_with_cart_adds_lines() {
        let mutation = parse_cart_form(
            Some("gid://shopify/Cart/c1".to_string()),
            &form(&[("cartAction", "ADD_TO_CART"), ("lines", LINES)]),
        )
        .unwrap();
        assert!(matches!(mutation, CartMutation::AddLines { ref cart_id, .. } if cart_id == "gid://shopify/Cart/c1"));
    }

    #[test]
    fn remove_requires_a_cart() {
        let form_data = form(&[("cartAction", "REMOVE_FROM_CART"), ("linesIds", r#"["l1"]"#)]);
        assert!(parse_cart_form(None, &form_data).is_err());
        assert_eq!(
            parse_cart_form(Some("c1".to_string()), &form_data).unwrap(),
            CartMutation::RemoveLines { cart_id: "c1".to_string(), line_ids: vec!["l1".to_string()] }
        );
    }

    #[test]
    fn bad_forms_are_rejected() {
        assert!(parse_cart_form(None, &form(&[])).is_err());
        assert!(parse_cart_form(None, &form(&[("cartAction", "EMPTY_CART")])).is_err());
        assert!(parse_cart_form(None, &form(&[("cartAction", "ADD_TO_CART"), ("lines", "{bad")])).is_err());
        assert!(parse_cart_form(None, &form(&[("cartAction", "ADD_TO_CART"), ("lines", "[]")])).is_err());
    }

    #[test]
    fn mutation_response_names_the_mutation() {
        let response: CartMutationResponse = serde_json::from_value(json!({
            "cartLinesAdd": {
                "cart": {"id": "gid://shopify/Cart/c1", "totalQuantity": 2, "lines": {"nodes": []}},
                "userErrors": []
            }
        }))
        .unwrap();
        let payload = response.into_payload();
        assert_eq!(payload.cart.map(|c| c.total_quantity), Some(2));
    }
}
