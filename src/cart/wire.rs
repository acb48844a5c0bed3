//! Wire-format payloads for the commerce GraphQL API.
//!
//! These mirror the backend's response shapes exactly: lines arrive wrapped
//! in an edges/node connection envelope and prices as nested money objects.
//! [`crate::cart::format_cart`] flattens them into the domain model.

use serde::Deserialize;

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Operation result, absent when the request failed outright.
    pub data: Option<T>,

    /// Top-level GraphQL errors, empty on success.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A top-level GraphQL error.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Human-readable error message.
    pub message: String,
}

/// A validation error reported inside a 200 mutation response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserError {
    /// Input path the error refers to, when the backend provides one.
    #[serde(default)]
    pub field: Option<Vec<String>>,

    /// Human-readable error message.
    pub message: String,
}

/// `data` shape of the cart query.
#[derive(Debug, Deserialize)]
pub struct CartQueryData {
    /// Null when the backend no longer knows the requested cart id.
    pub cart: Option<WireCart>,
}

/// `data` shape of the `cartCreate` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreateData {
    /// Mutation payload.
    pub cart_create: CartMutationPayload,
}

/// `data` shape of the `cartLinesAdd` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLinesAddData {
    /// Mutation payload.
    pub cart_lines_add: CartMutationPayload,
}

/// `data` shape of the `cartLinesUpdate` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLinesUpdateData {
    /// Mutation payload.
    pub cart_lines_update: CartMutationPayload,
}

/// `data` shape of the `cartLinesRemove` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLinesRemoveData {
    /// Mutation payload.
    pub cart_lines_remove: CartMutationPayload,
}

/// Common shape of all cart mutation payloads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMutationPayload {
    /// The complete updated cart; absent when the mutation was rejected.
    pub cart: Option<WireCart>,

    /// Validation errors; non-empty means the mutation did not apply.
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

/// Raw cart as returned by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCart {
    /// Opaque cart identifier.
    pub id: String,

    /// Hosted checkout URL.
    pub checkout_url: String,

    /// Lines in the edges/node envelope.
    pub lines: Connection<WireLine>,

    /// Backend-computed cost summary.
    pub cost: WireCost,
}

/// GraphQL connection envelope.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    /// Edge wrappers around the nodes.
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

/// GraphQL edge wrapper.
#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    /// The wrapped node.
    pub node: T,
}

/// Raw cart line node.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLine {
    /// Line identifier.
    pub id: String,

    /// Unit count.
    pub quantity: u32,

    /// Variant snapshot.
    pub merchandise: WireMerchandise,
}

/// Raw variant snapshot.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMerchandise {
    /// Variant identifier.
    pub id: String,

    /// Variant title.
    pub title: String,

    /// Unit price.
    pub price_v2: WireMoney,

    /// Parent product fields.
    pub product: WireProduct,

    /// Variant image, when one is set.
    #[serde(default)]
    pub image: Option<WireImage>,
}

/// Raw parent product fields carried on a variant.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProduct {
    /// Product title.
    pub title: String,

    /// URL-friendly slug.
    pub handle: String,

    /// Product-level fallback image.
    #[serde(default)]
    pub featured_image: Option<WireImage>,
}

/// Raw image reference.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireImage {
    /// Image URL.
    pub url: String,

    /// Alt text, often null.
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// Raw money object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCost {
    /// Pre-tax sum of line prices.
    pub subtotal_amount: WireMoney,

    /// Tax, null until the backend has calculated it.
    #[serde(default)]
    pub total_tax_amount: Option<WireMoney>,

    /// Chargeable total.
    pub total_amount: WireMoney,
}

/// Amount/currency pair; the amount stays a decimal string on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMoney {
    /// Decimal string, e.g. `"10.00"`.
    pub amount: String,

    /// ISO currency code, e.g. `"USD"`.
    pub currency_code: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn a_connection_without_edges_decodes_as_empty() -> TestResult {
        let connection: Connection<WireLine> = serde_json::from_value(json!({}))?;

        assert!(connection.edges.is_empty());

        Ok(())
    }

    #[test]
    fn a_cart_payload_decodes_through_the_generic_envelope() -> TestResult {
        let payload = json!({
            "cart": {
                "id": "cart-1",
                "checkoutUrl": "https://shop.example/checkout/cart-1",
                "lines": {
                    "edges": [{
                        "node": {
                            "id": "line-1",
                            "quantity": 2,
                            "merchandise": {
                                "id": "variant-1",
                                "title": "Default",
                                "priceV2": { "amount": "10.00", "currencyCode": "USD" },
                                "product": { "title": "Widget", "handle": "widget" }
                            }
                        }
                    }]
                },
                "cost": {
                    "subtotalAmount": { "amount": "20.00", "currencyCode": "USD" },
                    "totalAmount": { "amount": "20.00", "currencyCode": "USD" }
                }
            }
        });

        let data: CartQueryData = serde_json::from_value(payload)?;
        let cart = data
            .cart
            .ok_or(crate::client::ClientError::MissingData)?;

        assert_eq!(cart.lines.edges.len(), 1);
        assert_eq!(cart.lines.edges[0].node.quantity, 2);

        Ok(())
    }
}
