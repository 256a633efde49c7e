//! The visitor's cart, shared by the layout and the product form.

use common::cart::Cart;
use dioxus::prelude::*;

use crate::api::cart_cookie::{read_cart_id, store_cart_id};

#[derive(Clone, Copy)]
pub struct CartState {
    pub cart_id: Signal<Option<String>>,
    pub cart: Signal<Option<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        Self { cart_id: Signal::new(None), cart: Signal::new(None) }
    }

    /// Picks up the cart id a previous visit left in the cookie. Returns
    /// whether the layout has to be reloaded to fetch that cart.
    pub fn restore_cart_id(mut self) -> bool {
        if self.cart_id.peek().is_some() {
            return false;
        }
        match read_cart_id() {
            Some(cart_id) => {
                self.cart_id.set(Some(cart_id));
                true
            }
            None => false,
        }
    }

    pub fn set_cart(mut self, cart: Cart) {
        if self.cart_id.peek().as_deref() != Some(cart.id.as_str()) {
            store_cart_id(&cart.id);
            self.cart_id.set(Some(cart.id.clone()));
        }
        self.cart.set(Some(cart));
    }

    pub fn total_quantity(&self) -> u32 {
        self.cart.read().as_ref().map(|c| c.total_quantity).unwrap_or(0)
    }
}
