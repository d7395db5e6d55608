//! Domain models for the metro ticketing system

pub mod account;
pub mod cart_item;
pub mod discount;
pub mod journey;
pub mod line;
pub mod order;
pub mod plan;
pub mod ticket;
pub mod voucher;

pub use account::{Account, AccountUpdate};
pub use cart_item::{CartItem, TicketKind};
pub use discount::DiscountPackage;
pub use journey::{Journey, JourneyQuery};
pub use line::{MetroLine, Station};
pub use order::{
    CheckoutRequest, Order, OrderDetail, OrderItem, OrderStatus, PaymentRecord,
};
pub use plan::TimedPlan;
pub use ticket::{Ticket, TicketStatus, ValidationRecord};
pub use voucher::{Voucher, VoucherStatus};
