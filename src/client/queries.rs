//! GraphQL documents for the cart operations.
//!
//! Every operation selects the full cart through the shared `CartFields`
//! fragment, so each response carries everything needed to rebuild the
//! client-side state in one pass.

/// Shared cart selection appended to every document.
const CART_FIELDS: &str = "\
fragment CartFields on Cart {
  id
  checkoutUrl
  lines(first: 250) {
    edges {
      node {
        id
        quantity
        merchandise {
          ... on ProductVariant {
            id
            title
            priceV2 { amount currencyCode }
            product {
              title
              handle
              featuredImage { url altText }
            }
            image { url altText }
          }
        }
      }
    }
  }
  cost {
    subtotalAmount { amount currencyCode }
    totalTaxAmount { amount currencyCode }
    totalAmount { amount currencyCode }
  }
}";

/// Cart lookup by id.
pub(crate) const CART: &str = "query cart($id: ID!) { cart(id: $id) { ...CartFields } }";

/// Fresh empty cart.
pub(crate) const CART_CREATE: &str =
    "mutation cartCreate { cartCreate { cart { ...CartFields } userErrors { field message } } }";

/// Add lines to a cart.
pub(crate) const CART_LINES_ADD: &str = "mutation cartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!) { cartLinesAdd(cartId: $cartId, lines: $lines) { cart { ...CartFields } userErrors { field message } } }";

/// Update line quantities.
pub(crate) const CART_LINES_UPDATE: &str = "mutation cartLinesUpdate($cartId: ID!, $lines: [CartLineUpdateInput!]!) { cartLinesUpdate(cartId: $cartId, lines: $lines) { cart { ...CartFields } userErrors { field message } } }";

/// Remove lines from a cart.
pub(crate) const CART_LINES_REMOVE: &str = "mutation cartLinesRemove($cartId: ID!, $lineIds: [ID!]!) { cartLinesRemove(cartId: $cartId, lineIds: $lineIds) { cart { ...CartFields } userErrors { field message } } }";

/// Appends the shared cart fragment to an operation document.
pub(crate) fn with_cart_fields(document: &str) -> String {
    format!("{document}\n{CART_FIELDS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_spread_the_shared_fragment() {
        for document in [
            CART,
            CART_CREATE,
            CART_LINES_ADD,
            CART_LINES_UPDATE,
            CART_LINES_REMOVE,
        ] {
            assert!(
                document.contains("...CartFields"),
                "document should spread CartFields: {document}"
            );

            let full = with_cart_fields(document);
            assert!(
                full.contains("fragment CartFields on Cart"),
                "assembled document should define the fragment"
            );
        }
    }

    #[test]
    fn mutations_select_user_errors() {
        for document in [
            CART_CREATE,
            CART_LINES_ADD,
            CART_LINES_UPDATE,
            CART_LINES_REMOVE,
        ] {
            assert!(
                document.contains("userErrors { field message }"),
                "mutation should select userErrors: {document}"
            );
        }
    }
}
