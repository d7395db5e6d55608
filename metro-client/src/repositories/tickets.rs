//! Ticket repository - journeys, plans, issued tickets and validation

use std::sync::Arc;

use shared::models::{Journey, JourneyQuery, Ticket, TimedPlan, ValidationRecord};

use crate::error::ClientError;
use crate::flow::{OutcomeStream, server_flow};
use crate::http::{HttpClient, NetworkHttpClient};

/// Ticket repository
#[derive(Debug)]
pub struct TicketRepository<C = NetworkHttpClient> {
    http: Arc<C>,
}

impl<C> Clone for TicketRepository<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient + 'static> TicketRepository<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    /// Search point-to-point journeys between two stations
    pub fn search_journeys(&self, query: JourneyQuery) -> OutcomeStream<Vec<Journey>> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move {
                if query.origin_station_id.trim().is_empty()
                    || query.destination_station_id.trim().is_empty()
                {
                    return Err(ClientError::MissingData(
                        "origin and destination stations are required".into(),
                    ));
                }
                http.post_data::<Vec<Journey>, _>("api/journeys/search", &query)
                    .await
            },
            |journeys| journeys,
        )
    }

    /// List available timed pass plans
    pub fn timed_plans(&self) -> OutcomeStream<Vec<TimedPlan>> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move { http.get_data::<Vec<TimedPlan>>("api/plans").await },
            |plans| plans,
        )
    }

    /// List the account's issued tickets (QR payload included)
    pub fn my_tickets(&self) -> OutcomeStream<Vec<Ticket>> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move { http.get_data::<Vec<Ticket>>("api/tickets").await },
            |tickets| tickets,
        )
    }

    /// Staff-side lookup: is the scanned ticket code usable at the gate
    pub fn lookup_validation(&self, ticket_code: &str) -> OutcomeStream<ValidationRecord> {
        let http = Arc::clone(&self.http);
        let code = ticket_code.trim().to_string();
        server_flow(
            move || async move {
                if code.is_empty() {
                    return Err(ClientError::MissingData("ticket code is required".into()));
                }
                http.get_data::<ValidationRecord>(&format!("api/validation/{}", code))
                    .await
            },
            |record| record,
        )
    }
}
