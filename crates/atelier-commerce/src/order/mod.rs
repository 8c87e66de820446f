//! Order and contact inquiries sent over the boutique's messaging line.
//!
//! There is no transactional checkout: "ordering" means opening a chat
//! with a pre-filled message. This module only builds the message text
//! and the deep link; actually opening it belongs to the surrounding
//! page.

use crate::catalog::Product;

/// A pre-filled order inquiry for one product.
///
/// Size, color, and quantity are optional refinements picked on the
/// detail page; a bare inquiry from a product card carries none.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInquiry<'a> {
    product: &'a Product,
    size: Option<String>,
    color: Option<String>,
    quantity: u32,
}

impl<'a> OrderInquiry<'a> {
    /// Start an inquiry for `product`, quantity 1.
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            size: None,
            color: None,
            quantity: 1,
        }
    }

    /// Mention a chosen size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Mention a chosen color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the quantity (clamped to at least 1).
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    /// The message a visitor sends to start the order.
    pub fn message(&self) -> String {
        let mut message = format!(
            "Hi! I'm interested in ordering the {} ({})",
            self.product.name,
            self.product.display_price(),
        );
        if let Some(size) = &self.size {
            message.push_str(&format!(" in size {}", size));
        }
        if let Some(color) = &self.color {
            message.push_str(&format!(" in {}", color));
        }
        message.push_str(&format!(
            ", quantity: {}. Please send me more details.",
            self.quantity
        ));
        message
    }

    /// Deep link opening the chat with the message pre-filled.
    pub fn whatsapp_link(&self, phone: &str) -> String {
        whatsapp_link(phone, &self.message())
    }
}

/// The general "hello" message used by the storefront chrome.
pub fn contact_message() -> String {
    "Hello! I'd like to get more information about your services.".to_string()
}

/// Build a `wa.me` deep link with `text` pre-filled.
///
/// `phone` is digits only, country code included, no leading `+`.
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(text))
}
