//! Customer record and its shared handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Name written by [`rename_customer`].
pub const RENAMED_TO: &str = "Diane";

/// A named customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
}

impl Customer {
    /// Create a customer.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Shared, mutable handle to a heap-allocated [`Customer`].
///
/// `Clone` copies the pointer, never the record. Single-threaded only.
#[derive(Clone)]
pub struct CustomerHandle {
    inner: Rc<RefCell<Customer>>,
}

impl CustomerHandle {
    /// Move a customer onto the heap.
    pub fn new(customer: Customer) -> Self {
        Self {
            inner: Rc::new(RefCell::new(customer)),
        }
    }

    /// Snapshot of the current name.
    pub fn name(&self) -> String {
        self.inner.borrow().name().to_string()
    }

    /// Rename the shared record.
    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.borrow_mut().set_name(name);
    }

    /// Whether both handles point at the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this record.
    pub fn share_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl fmt::Debug for CustomerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerHandle")
            .field("name", &self.inner.borrow().name())
            .field("shares", &self.share_count())
            .finish()
    }
}

/// Rename the customer behind `customer` to [`RENAMED_TO`].
///
/// Borrows the handle for the call only; the caller keeps ownership.
pub fn rename_customer(customer: &CustomerHandle) {
    let previous = customer.name();
    customer.set_name(RENAMED_TO);
    debug!(from = %previous, to = RENAMED_TO, "Renamed customer");
}
