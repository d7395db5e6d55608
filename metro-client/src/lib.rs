//! Metro Client - HTTP client for the metro ticketing API
//!
//! Provides typed repositories over the metro REST API, the outcome-stream
//! adapter every repository method goes through, the cart session with its
//! client-side pricing engine, and local session/cart persistence.

pub mod cart;
pub mod config;
pub mod error;
pub mod flow;
pub mod http;
pub mod repositories;
pub mod storage;

pub use cart::pricing::{CartTotals, compute_totals};
pub use cart::{CartError, CartSession, CartSnapshot};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use flow::{Outcome, OutcomeStream, server_flow};
pub use http::{HttpClient, NetworkHttpClient};
pub use repositories::{
    AccountRepository, DiscountRepository, NetworkRepository, OrderRepository, TicketRepository,
    VoucherRepository,
};
pub use storage::{CartStorage, Session, SessionStorage};

// Re-export shared types for convenience
pub use shared::{ServerError, ServerErrorKind};
