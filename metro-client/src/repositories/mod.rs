//! Typed repositories over the metro API
//!
//! One repository per API area. Every method wraps its remote call in
//! [`crate::flow::server_flow`] and returns an outcome stream; calling code
//! never sees a raw transport error.

pub mod account;
pub mod discounts;
pub mod network;
pub mod orders;
pub mod tickets;
pub mod vouchers;

pub use account::AccountRepository;
pub use discounts::DiscountRepository;
pub use network::NetworkRepository;
pub use orders::OrderRepository;
pub use tickets::TicketRepository;
pub use vouchers::VoucherRepository;
