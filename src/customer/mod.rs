//! # Shared Customer Records
//!
//! A [`Customer`] lives on the heap behind a [`CustomerHandle`]. Handles are
//! cheap to clone and every clone aliases the same record, so a rename done
//! through one handle is seen through all of them, including handles stored
//! in a [`CustomerRegistry`].
//!
//! ```rust
//! use perf_primer::customer::{rename_customer, Customer, CustomerHandle};
//!
//! let customer = CustomerHandle::new(Customer::new("Sally"));
//! rename_customer(&customer);
//! assert_eq!(customer.name(), "Diane");
//! ```

pub mod demo;
pub mod record;
pub mod registry;

pub use demo::{run_rename_demo, RenameDemoOutcome};
pub use record::{rename_customer, Customer, CustomerHandle, RENAMED_TO};
pub use registry::CustomerRegistry;
