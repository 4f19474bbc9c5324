//! Driven port for client invoices.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::billing::{Invoice, InvoiceDraft};

/// Store of client invoices.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// All invoices, in insertion order.
    async fn list(&self) -> Result<Vec<Invoice>, Error>;

    /// Create an invoice from a draft.
    async fn create(&self, draft: InvoiceDraft) -> Result<Invoice, Error>;
}
