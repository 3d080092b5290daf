//! Rename walkthrough printed by the `rename-customer` binary.

use super::record::{rename_customer, Customer, CustomerHandle};
use super::registry::CustomerRegistry;
use std::io::{self, Write};

/// Name the demo customer starts with.
pub const INITIAL_NAME: &str = "Sally";

/// Registry key the demo stores the handle under.
pub const REGISTRY_KEY: &str = "aa";

/// State left behind by [`run_rename_demo`].
#[derive(Debug)]
pub struct RenameDemoOutcome {
    /// The caller's handle.
    pub customer: CustomerHandle,
    /// Registry holding a second handle under [`REGISTRY_KEY`].
    pub registry: CustomerRegistry,
}

/// Rename a customer through a borrowed handle and print the result.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_rename_demo<W: Write>(out: &mut W) -> io::Result<RenameDemoOutcome> {
    let customer = CustomerHandle::new(Customer::new(INITIAL_NAME));

    writeln!(out, "--- Chamando renameCustomer ---")?;
    rename_customer(&customer);
    writeln!(out, "--- Fim da chamada ---")?;

    write!(out, "Nome final impresso no main: ")?;
    writeln!(out, "{}", customer.name())?;
    out.flush()?;

    let mut registry = CustomerRegistry::new();
    registry.insert(REGISTRY_KEY, customer.clone());

    Ok(RenameDemoOutcome { customer, registry })
}
