//! Cart models and the cart form contract.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::analytics::AnalyticsPayload;
use crate::product::{Image, Money, SelectedOption};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineMerchandise {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub quantity: u32,
    pub merchandise: CartLineMerchandise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    pub subtotal_amount: Money,
    #[serde(default)]
    pub total_amount: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub checkout_url: Option<String>,
    #[serde(default)]
    pub total_quantity: u32,
    #[serde(default)]
    pub cost: Option<CartCost>,
    #[serde(default)]
    pub lines: crate::product::Nodes<CartLine>,
}

/// Line sent with an `ADD_TO_CART` submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    pub merchandise_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    AddToCart,
    RemoveFromCart,
}

impl CartAction {
    pub fn as_form_value(&self) -> &'static str {
        match self {
            CartAction::AddToCart => "ADD_TO_CART",
            CartAction::RemoveFromCart => "REMOVE_FROM_CART",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "ADD_TO_CART" => Some(CartAction::AddToCart),
            "REMOVE_FROM_CART" => Some(CartAction::RemoveFromCart),
            _ => None,
        }
    }
}

pub mod form_field {
    pub const CART_ACTION: &str = "cartAction";
    pub const COUNTRY_CODE: &str = "countryCode";
    pub const LINES: &str = "lines";
    pub const LINE_IDS: &str = "linesIds";
    pub const ANALYTICS: &str = "analytics";
}

/// Result of a cart form submission. `analytics` carries the cart id so the
/// add-to-cart event can be attributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartActionResult {
    pub cart: Cart,
    pub analytics: AnalyticsPayload,
}

/// Cookie that keeps the visitor's cart between page loads.
pub const CART_ID_COOKIE: &str = "cartId";
const CART_ID_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 14;

/// `Set-Cookie` style assignment for `document.cookie`.
pub fn cart_id_cookie(cart_id: &str) -> String {
    let value: String = form_urlencoded::byte_serialize(cart_id.as_bytes()).collect();
    format!("{CART_ID_COOKIE}={value}; Path=/; Max-Age={CART_ID_MAX_AGE_SECS}; SameSite=Lax")
}

/// Finds the cart id in a `Cookie` header or `document.cookie` string.
pub fn cart_id_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| form_urlencoded::parse(pair.trim().as_bytes()).next())
        .find(|(name, _)| name == CART_ID_COOKIE)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CART_GID: &str = "gid://shopify/Cart/c1?key=abc";

    #[test]
    fn cart_id_survives_the_cookie_round_trip() {
        let cookie = cart_id_cookie(CART_GID);
        let (assignment, attributes) = cookie.split_once(';').unwrap();
        assert_eq!(assignment, "cartId=gid%3A%2F%2Fshopify%2FCart%2Fc1%3Fkey%3Dabc");
        assert_eq!(attributes, " Path=/; Max-Age=1209600; SameSite=Lax");
        assert_eq!(cart_id_from_cookies(assignment), Some(CART_GID.to_string()));
    }

    #[test]
    fn cart_id_is_found_among_other_cookies() {
        let cookies = format!("_shopify_y=abc; {}; theme=dark", cart_id_cookie(CART_GID).split(';').next().unwrap());
        assert_eq!(cart_id_from_cookies(&cookies), Some(CART_GID.to_string()));
    }

    #[test]
    fn missing_or_empty_cart_cookie_is_none() {
        assert_eq!(cart_id_from_cookies(""), None);
        assert_eq!(cart_id_from_cookies("theme=dark; cartIdx=1"), None);
        assert_eq!(cart_id_from_cookies("cartId="), None);
    }
}
