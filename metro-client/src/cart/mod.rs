//! Cart session
//!
//! The cart is the only shared mutable state on the client. It has a single
//! writer (the UI-triggered task sequence); observers get immutable
//! [`CartSnapshot`] values through a watch channel, recomputed on every
//! mutation. Contents persist to a local JSON file so an app restart keeps
//! the open cart.

pub mod pricing;

use shared::models::{CartItem, Voucher};
use thiserror::Error;
use tokio::sync::watch;

use crate::storage::CartStorage;
use pricing::{CartTotals, compute_totals, validate_cart_item};

/// Cart mutation error
#[derive(Debug, Error)]
pub enum CartError {
    /// Line fails validation (bad price/quantity/reference)
    #[error("Invalid cart item: {0}")]
    InvalidItem(String),

    /// No line with this instance ID in the session
    #[error("Unknown cart item: {0}")]
    UnknownItem(String),
}

/// Immutable view of the cart published to observers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub membership_percentage: Option<f64>,
    pub voucher: Option<Voucher>,
    pub totals: CartTotals,
}

/// Single-writer cart session
pub struct CartSession {
    items: Vec<CartItem>,
    membership_percentage: Option<f64>,
    voucher: Option<Voucher>,
    storage: Option<CartStorage>,
    tx: watch::Sender<CartSnapshot>,
}

impl CartSession {
    /// Create an empty, non-persisted session
    pub fn new() -> Self {
        let (tx, _) = watch::channel(CartSnapshot::default());
        Self {
            items: Vec::new(),
            membership_percentage: None,
            voucher: None,
            storage: None,
            tx,
        }
    }

    /// Create a session backed by a cart file, restoring persisted lines
    pub fn with_storage(storage: CartStorage) -> Self {
        let items = storage.load().unwrap_or_default();
        let mut session = Self::new();
        session.items = items;
        session.storage = Some(storage);
        session.publish();
        session
    }

    /// Current line items
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Currently selected voucher
    pub fn selected_voucher(&self) -> Option<&Voucher> {
        self.voucher.as_ref()
    }

    /// Current totals, recomputed from the session state
    pub fn totals(&self) -> CartTotals {
        compute_totals(&self.items, self.membership_percentage, self.voucher.as_ref())
    }

    /// Current snapshot (same value observers receive)
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            membership_percentage: self.membership_percentage,
            voucher: self.voucher.clone(),
            totals: self.totals(),
        }
    }

    /// Observe cart snapshots
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.tx.subscribe()
    }

    /// Add a line; merges into an existing line for the same buyable unit
    pub fn add_item(&mut self, item: CartItem) -> Result<(), CartError> {
        validate_cart_item(&item)?;
        if let Some(existing) = self.items.iter_mut().find(|i| i.merges_with(&item)) {
            let mut merged = existing.clone();
            merged.quantity += item.quantity;
            validate_cart_item(&merged)?;
            existing.quantity = merged.quantity;
        } else {
            self.items.push(item);
        }
        self.commit();
        Ok(())
    }

    /// Set the quantity of an existing line
    pub fn update_quantity(&mut self, instance_id: &str, quantity: i32) -> Result<(), CartError> {
        let Some(index) = self.items.iter().position(|i| i.instance_id == instance_id) else {
            return Err(CartError::UnknownItem(instance_id.to_string()));
        };
        let mut changed = self.items[index].clone();
        changed.quantity = quantity;
        validate_cart_item(&changed)?;
        self.items[index] = changed;
        self.commit();
        Ok(())
    }

    /// Remove a line; returns whether it existed
    pub fn remove_item(&mut self, instance_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.instance_id != instance_id);
        let removed = self.items.len() != before;
        if removed {
            self.commit();
        }
        removed
    }

    /// Clear all lines and the voucher selection
    pub fn clear(&mut self) {
        self.items.clear();
        self.voucher = None;
        self.commit();
    }

    /// Set the membership discount fraction (from the active discount package)
    pub fn set_membership_percentage(&mut self, percentage: Option<f64>) {
        self.membership_percentage = percentage;
        self.commit();
    }

    /// Try to select a voucher
    ///
    /// Returns `false` without changing the selection when the voucher is
    /// not Valid or the current subtotal is below its minimum. Selecting an
    /// inapplicable voucher is a no-op, not an error.
    pub fn select_voucher(&mut self, voucher: Voucher) -> bool {
        let subtotal = compute_totals(&self.items, None, None).subtotal;
        if !voucher.applies_to(subtotal) {
            tracing::debug!(code = %voucher.code, "voucher not applicable, selection ignored");
            return false;
        }
        self.voucher = Some(voucher);
        self.commit();
        true
    }

    /// Drop the voucher selection
    pub fn clear_voucher(&mut self) {
        if self.voucher.take().is_some() {
            self.commit();
        }
    }

    fn commit(&mut self) {
        if let Some(storage) = &self.storage
            && let Err(err) = storage.save(&self.items)
        {
            tracing::warn!("failed to persist cart: {}", err);
        }
        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(self.snapshot());
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}
