//! Network repository - metro lines and stations

use std::sync::Arc;

use shared::models::{MetroLine, Station};

use crate::flow::{OutcomeStream, server_flow};
use crate::http::{HttpClient, NetworkHttpClient};

/// Metro network repository
#[derive(Debug)]
pub struct NetworkRepository<C = NetworkHttpClient> {
    http: Arc<C>,
}

impl<C> Clone for NetworkRepository<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient + 'static> NetworkRepository<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    /// List all metro lines
    pub fn lines(&self) -> OutcomeStream<Vec<MetroLine>> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move { http.get_data::<Vec<MetroLine>>("api/lines").await },
            |lines| lines,
        )
    }

    /// List the stations of one line, in sequence order
    pub fn stations_of_line(&self, line_id: &str) -> OutcomeStream<Vec<Station>> {
        let http = Arc::clone(&self.http);
        let path = format!("api/lines/{}/stations", line_id);
        server_flow(
            move || async move { http.get_data::<Vec<Station>>(&path).await },
            |stations| stations,
        )
    }

    /// List every station on the network
    pub fn stations(&self) -> OutcomeStream<Vec<Station>> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move { http.get_data::<Vec<Station>>("api/stations").await },
            |stations| stations,
        )
    }
}
