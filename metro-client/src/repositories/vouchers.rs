//! Voucher repository

use std::sync::Arc;

use shared::client::RedeemVoucherRequest;
use shared::models::Voucher;

use crate::error::ClientError;
use crate::flow::{OutcomeStream, server_flow};
use crate::http::{HttpClient, NetworkHttpClient};

/// Voucher repository
#[derive(Debug)]
pub struct VoucherRepository<C = NetworkHttpClient> {
    http: Arc<C>,
}

impl<C> Clone for VoucherRepository<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient + 'static> VoucherRepository<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    /// List the account's vouchers, all statuses included
    pub fn my_vouchers(&self) -> OutcomeStream<Vec<Voucher>> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move { http.get_data::<Vec<Voucher>>("api/vouchers").await },
            |vouchers| vouchers,
        )
    }

    /// Redeem a voucher code into the account
    pub fn redeem(&self, code: &str) -> OutcomeStream<Voucher> {
        let http = Arc::clone(&self.http);
        let request = RedeemVoucherRequest {
            code: code.trim().to_string(),
        };
        server_flow(
            move || async move {
                if request.code.is_empty() {
                    return Err(ClientError::MissingData("voucher code is required".into()));
                }
                http.post_data::<Voucher, _>("api/vouchers/redeem", &request)
                    .await
            },
            |voucher| voucher,
        )
    }
}
