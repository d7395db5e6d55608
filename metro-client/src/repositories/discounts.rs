//! Discount repository - membership discount package

use std::sync::Arc;

use shared::client::ActiveDiscountResponse;
use shared::models::DiscountPackage;

use crate::flow::{OutcomeStream, server_flow};
use crate::http::{HttpClient, NetworkHttpClient};

/// Discount package repository
#[derive(Debug)]
pub struct DiscountRepository<C = NetworkHttpClient> {
    http: Arc<C>,
}

impl<C> Clone for DiscountRepository<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient + 'static> DiscountRepository<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    /// Fetch the account's active discount package
    ///
    /// `None` means the account holds no package; that is a successful
    /// outcome, not a failure.
    pub fn active_package(&self) -> OutcomeStream<Option<DiscountPackage>> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move {
                http.get_data::<ActiveDiscountResponse>("api/discounts/active")
                    .await
            },
            |resp| resp.package,
        )
    }
}
