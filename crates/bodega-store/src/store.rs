//! The observing cart store.
//!
//! `CartStore` owns the in-memory [`Cart`], mirrors every mutation to the
//! durable slot, and notifies subscribers of changes. It is the single
//! process-wide cart instance of a page; opening it hydrates from the slot,
//! and a matching [`StorageEvent`] re-hydrates it when the slot changed
//! underneath us.

use crate::error::StoreError;
use crate::event::{CartEvent, StorageEvent};
use crate::record::StoredLine;
use crate::slot::SlotBackend;
use bodega_cart::{Cart, CartLine, Currency, Money};

/// The fixed slot key the cart lives under.
pub const CART_KEY: &str = "cart";

/// Callback invoked with every [`CartEvent`].
type Subscriber = Box<dyn Fn(&CartEvent)>;

/// A cart mirrored to a durable slot.
pub struct CartStore<B: SlotBackend> {
    backend: B,
    key: String,
    currency: Currency,
    cart: Cart,
    subscribers: Vec<Subscriber>,
}

impl<B: SlotBackend> CartStore<B> {
    /// Open a store over `backend` at the default key and currency,
    /// hydrating from the slot.
    pub fn open(backend: B) -> Self {
        Self::open_at(backend, CART_KEY, Currency::default())
    }

    /// Open a store at a specific key and currency, hydrating from the slot.
    pub fn open_at(backend: B, key: impl Into<String>, currency: Currency) -> Self {
        let key = key.into();
        let cart = hydrate(&backend, &key, currency);
        Self {
            backend,
            key,
            currency,
            cart,
            subscribers: Vec::new(),
        }
    }

    /// Register a change observer. Every successful mutation and every
    /// re-hydration invokes all subscribers.
    pub fn subscribe(&mut self, f: impl Fn(&CartEvent) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Add a product to the cart, persist, and notify.
    ///
    /// Rejected input (see [`Cart::add`]) leaves the cart, the slot, and
    /// the subscribers untouched.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        image: Option<String>,
        quantity: i64,
    ) -> Result<(), StoreError> {
        let name = name.into();
        self.cart.add(name.clone(), unit_price, image, quantity)?;
        self.persist()?;
        self.notify(&CartEvent::Added { name, quantity });
        Ok(())
    }

    /// Remove the line at `index`, persist, and notify.
    ///
    /// Returns `false` (with no write and no notification) when the index
    /// is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Result<bool, StoreError> {
        match self.cart.remove_at(index) {
            Some(line) => {
                self.persist()?;
                self.notify(&CartEvent::Removed {
                    index,
                    name: line.name,
                });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set the quantity of the line at `index`, persist, and notify.
    ///
    /// A non-positive quantity or unknown index is rejected without
    /// mutation or persistence; the caller reverts its display to the
    /// stored value.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<(), StoreError> {
        self.cart.set_quantity(index, quantity)?;
        self.persist()?;
        self.notify(&CartEvent::QuantityChanged { index, quantity });
        Ok(())
    }

    /// Empty the cart, persist the empty sequence, and notify. Used after
    /// checkout completes.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.persist()?;
        self.notify(&CartEvent::Cleared);
        Ok(())
    }

    /// Replace the in-memory cart with the slot contents and notify.
    ///
    /// Fails soft: an absent or unparsable payload hydrates as empty.
    pub fn reload(&mut self) {
        self.cart = hydrate(&self.backend, &self.key, self.currency);
        self.notify(&CartEvent::Reloaded);
    }

    /// Handle an inbound storage-change signal. Re-hydrates when the
    /// event's key matches this store's key; other keys are ignored.
    pub fn on_storage_event(&mut self, event: &StorageEvent) {
        if event.key == self.key {
            self.reload();
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.cart.total_quantity()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// The slot key this store mirrors to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the full line array to the slot (last-writer-wins).
    fn persist(&self) -> Result<(), StoreError> {
        let records: Vec<StoredLine> = self.cart.lines().iter().map(StoredLine::from_line).collect();
        let payload = serde_json::to_string(&records)?;
        self.backend.set(&self.key, &payload)
    }

    fn notify(&self, event: &CartEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

/// Read the slot into a cart. Absent key, backend failure, or unparsable
/// payload all yield an empty cart; individually malformed records in an
/// otherwise valid array are dropped.
fn hydrate<B: SlotBackend>(backend: &B, key: &str, currency: Currency) -> Cart {
    let payload = match backend.get(key) {
        Ok(Some(payload)) => payload,
        _ => return Cart::with_currency(currency),
    };
    let values: Vec<serde_json::Value> = match serde_json::from_str(&payload) {
        Ok(values) => values,
        Err(_) => return Cart::with_currency(currency),
    };
    let lines = values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<StoredLine>(value).ok())
        .filter_map(|record| record.into_line(currency))
        .collect();
    Cart::from_lines(lines, currency).unwrap_or_else(|_| Cart::with_currency(currency))
}
