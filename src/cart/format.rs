//! Cart formatter: wire shape to domain model.
//!
//! Pure transformation, no I/O. Totals are copied from the backend's cost
//! object verbatim; a cart with zero lines formats to an empty line list.

use crate::{
    cart::{
        errors::FormatError,
        models::{Cart, CartId, CartLine, LineId, Merchandise, VariantId},
        wire::{WireCart, WireLine, WireMoney},
    },
    money::{CartCost, Money},
};

/// Flattens a raw backend cart into the domain [`Cart`].
///
/// # Errors
///
/// Returns [`FormatError::InvalidAmount`] when a monetary amount does not
/// parse as a decimal string.
pub fn format_cart(wire: &WireCart) -> Result<Cart, FormatError> {
    let lines = wire
        .lines
        .edges
        .iter()
        .map(|edge| format_line(&edge.node))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Cart {
        id: CartId::new(&*wire.id),
        checkout_url: wire.checkout_url.clone(),
        lines,
        cost: CartCost {
            subtotal: parse_money(&wire.cost.subtotal_amount)?,
            tax: wire
                .cost
                .total_tax_amount
                .as_ref()
                .map(parse_money)
                .transpose()?,
            total: parse_money(&wire.cost.total_amount)?,
        },
    })
}

fn format_line(line: &WireLine) -> Result<CartLine, FormatError> {
    let merchandise = &line.merchandise;

    // Fall back to the product-level image so consumers can always render
    // something; an empty string means no image at all.
    let image = merchandise
        .image
        .as_ref()
        .or(merchandise.product.featured_image.as_ref());

    Ok(CartLine {
        id: LineId::new(&*line.id),
        quantity: line.quantity,
        merchandise: Merchandise {
            variant_id: VariantId::new(&*merchandise.id),
            title: merchandise.title.clone(),
            price: parse_money(&merchandise.price_v2)?,
            image_url: image.map(|image| image.url.clone()).unwrap_or_default(),
            image_alt: image
                .and_then(|image| image.alt_text.clone())
                .unwrap_or_default(),
            product_title: merchandise.product.title.clone(),
            handle: merchandise.product.handle.clone(),
        },
    })
}

fn parse_money(money: &WireMoney) -> Result<Money, FormatError> {
    Money::parse(&money.amount, &money.currency_code).map_err(|source| {
        FormatError::InvalidAmount {
            amount: money.amount.clone(),
            source,
        }
    })
}
