//! Cart Models

use crate::{
    ids::TypedId,
    money::{CartCost, Money},
};

/// Cart identifier issued by the commerce backend.
///
/// Stable for the lifetime of the cart: every mutation returns a cart with
/// the same identifier.
pub type CartId = TypedId<Cart>;

/// Cart line identifier, distinct from the variant identifier.
pub type LineId = TypedId<CartLine>;

/// Product variant identifier.
pub type VariantId = TypedId<Merchandise>;

/// A shopper's in-progress order, as last reported by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    /// Correlation key for all mutations on this cart.
    pub id: CartId,

    /// Externally hosted checkout page, opaque to this crate.
    pub checkout_url: String,

    /// Lines in backend insertion order.
    pub lines: Vec<CartLine>,

    /// Authoritative monetary summary from the backend.
    pub cost: CartCost,
}

impl Cart {
    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Looks up a line by its identifier.
    #[must_use]
    pub fn line(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }
}

/// One product variant within a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Line identifier, required for update and remove operations.
    pub id: LineId,

    /// Number of units; always at least one.
    pub quantity: u32,

    /// Snapshot of the variant as of the last fetch. Not live-linked: it
    /// goes stale if the catalog changes between fetches.
    pub merchandise: Merchandise,
}

/// Variant snapshot embedded in a cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct Merchandise {
    /// Variant identifier, used when adding lines.
    pub variant_id: VariantId,

    /// Variant title, e.g. the size/colour combination.
    pub title: String,

    /// Unit price.
    pub price: Money,

    /// Image URL; empty string when the backend has none.
    pub image_url: String,

    /// Image alt text; empty string when the backend has none.
    pub image_alt: String,

    /// Title of the parent product.
    pub product_title: String,

    /// URL-friendly slug of the parent product.
    pub handle: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            id: LineId::new(id),
            quantity,
            merchandise: Merchandise {
                variant_id: VariantId::new("gid://shop/Variant/1"),
                title: "Default".into(),
                price: Money::new(Decimal::new(10_00, 2), "USD"),
                image_url: String::new(),
                image_alt: String::new(),
                product_title: "Widget".into(),
                handle: "widget".into(),
            },
        }
    }

    fn cart(lines: Vec<CartLine>) -> Cart {
        let zero = Money::new(Decimal::ZERO, "USD");
        Cart {
            id: CartId::new("gid://shop/Cart/1"),
            checkout_url: "https://shop.example/checkout".into(),
            lines,
            cost: CartCost {
                subtotal: zero.clone(),
                tax: None,
                total: zero,
            },
        }
    }

    #[test]
    fn total_quantity_sums_lines() {
        let cart = cart(vec![line("l1", 2), line("l2", 3)]);

        assert_eq!(cart.total_quantity(), 5);
        assert!(!cart.is_empty());
    }

    #[test]
    fn line_lookup_by_id() {
        let cart = cart(vec![line("l1", 2), line("l2", 3)]);

        let found = cart.line(&LineId::new("l2"));

        assert_eq!(found.map(|l| l.quantity), Some(3));
        assert!(cart.line(&LineId::new("l3")).is_none());
    }
}
