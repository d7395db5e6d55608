//! Order repository - checkout and history
//!
//! Checkout sends the cart lines and voucher code only; the server computes
//! the authoritative totals. The cart's client-side estimate is display
//! state and never part of the request.

use std::sync::Arc;

use shared::models::{CheckoutRequest, Order, OrderDetail};

use crate::error::ClientError;
use crate::flow::{OutcomeStream, server_flow};
use crate::http::{HttpClient, NetworkHttpClient};

/// Order repository
#[derive(Debug)]
pub struct OrderRepository<C = NetworkHttpClient> {
    http: Arc<C>,
}

impl<C> Clone for OrderRepository<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient + 'static> OrderRepository<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    /// Submit the cart for checkout
    pub fn checkout(&self, request: CheckoutRequest) -> OutcomeStream<OrderDetail> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move {
                if request.items.is_empty() {
                    return Err(ClientError::MissingData("cart is empty".into()));
                }
                if request.payment_method.trim().is_empty() {
                    return Err(ClientError::MissingData("payment method is required".into()));
                }
                let detail: OrderDetail =
                    http.post_data("api/orders/checkout", &request).await?;
                tracing::info!(
                    order_number = %detail.order.order_number,
                    total = detail.order.total,
                    "checkout completed"
                );
                Ok(detail)
            },
            |detail| detail,
        )
    }

    /// Order history, newest first
    pub fn history(&self) -> OutcomeStream<Vec<Order>> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move { http.get_data::<Vec<Order>>("api/orders").await },
            |orders| orders,
        )
    }

    /// Full detail of one order
    pub fn detail(&self, order_id: &str) -> OutcomeStream<OrderDetail> {
        let http = Arc::clone(&self.http);
        let path = format!("api/orders/{}", order_id);
        server_flow(
            move || async move { http.get_data::<OrderDetail>(&path).await },
            |detail| detail,
        )
    }
}
