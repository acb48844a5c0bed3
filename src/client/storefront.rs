//! HTTP client for the storefront GraphQL API.

use std::num::NonZeroU32;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::{
    cart::{
        Cart, CartId, LineId, VariantId, format_cart,
        wire::{
            CartCreateData, CartLinesAddData, CartLinesRemoveData, CartLinesUpdateData,
            CartMutationPayload, CartQueryData, GraphQlResponse,
        },
    },
    config::StorefrontConfig,
};

use super::{backend::CommerceBackend, errors::ClientError, queries};

/// Header carrying the storefront access token.
const ACCESS_TOKEN_HEADER: &str = "X-Storefront-Access-Token";

/// GraphQL client for the commerce backend's cart operations.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    config: StorefrontConfig,
    http: Client,
}

impl StorefrontClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<T, ClientError> {
        let body = json!({
            "query": queries::with_cart_fields(document),
            "variables": variables,
        });

        let response = self
            .http
            .post(self.config.graphql_url())
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ClientError::Status { status, body: text });
        }

        let text = response.text().await?;

        decode(&text)
    }
}

/// Decodes a GraphQL response envelope, surfacing top-level errors.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    let envelope: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(ClientError::Malformed)?;

    if !envelope.errors.is_empty() {
        return Err(ClientError::GraphQl(envelope.errors));
    }

    envelope.data.ok_or(ClientError::MissingData)
}

/// Unwraps a mutation payload into a formatted cart.
///
/// A non-empty `userErrors` array means the mutation did not apply, even
/// though the HTTP status was 200; it must never be mistaken for success.
fn mutation_cart(payload: CartMutationPayload) -> Result<Cart, ClientError> {
    if !payload.user_errors.is_empty() {
        warn!(
            count = payload.user_errors.len(),
            "backend rejected cart mutation"
        );
        return Err(ClientError::UserErrors(payload.user_errors));
    }

    let wire = payload.cart.ok_or(ClientError::MissingData)?;

    Ok(format_cart(&wire)?)
}

#[async_trait]
impl CommerceBackend for StorefrontClient {
    #[tracing::instrument(skip(self), fields(cart_id = %id))]
    async fn cart(&self, id: &CartId) -> Result<Option<Cart>, ClientError> {
        let data: CartQueryData = self
            .execute(queries::CART, json!({ "id": id.as_str() }))
            .await?;

        match data.cart {
            Some(wire) => Ok(Some(format_cart(&wire)?)),
            None => {
                debug!(cart_id = %id, "backend has no cart for id");
                Ok(None)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn cart_create(&self) -> Result<Cart, ClientError> {
        let data: CartCreateData = self.execute(queries::CART_CREATE, json!({})).await?;

        let cart = mutation_cart(data.cart_create)?;
        debug!(cart_id = %cart.id, "created cart");

        Ok(cart)
    }

    #[tracing::instrument(skip(self), fields(cart_id = %id, variant = %variant, quantity = quantity.get()))]
    async fn lines_add(
        &self,
        id: &CartId,
        variant: &VariantId,
        quantity: NonZeroU32,
    ) -> Result<Cart, ClientError> {
        let variables = json!({
            "cartId": id.as_str(),
            "lines": [{ "merchandiseId": variant.as_str(), "quantity": quantity.get() }],
        });

        let data: CartLinesAddData = self.execute(queries::CART_LINES_ADD, variables).await?;

        mutation_cart(data.cart_lines_add)
    }

    #[tracing::instrument(skip(self), fields(cart_id = %id, line = %line, quantity = quantity.get()))]
    async fn lines_update(
        &self,
        id: &CartId,
        line: &LineId,
        quantity: NonZeroU32,
    ) -> Result<Cart, ClientError> {
        let variables = json!({
            "cartId": id.as_str(),
            "lines": [{ "id": line.as_str(), "quantity": quantity.get() }],
        });

        let data: CartLinesUpdateData = self.execute(queries::CART_LINES_UPDATE, variables).await?;

        mutation_cart(data.cart_lines_update)
    }

    #[tracing::instrument(skip(self), fields(cart_id = %id, line = %line))]
    async fn lines_remove(&self, id: &CartId, line: &LineId) -> Result<Cart, ClientError> {
        let variables = json!({
            "cartId": id.as_str(),
            "lineIds": [line.as_str()],
        });

        let data: CartLinesRemoveData = self.execute(queries::CART_LINES_REMOVE, variables).await?;

        mutation_cart(data.cart_lines_remove)
    }
}
