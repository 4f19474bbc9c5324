//! In-memory invoice and product stores.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::billing::{
    Invoice, InvoiceDraft, InvoiceItem, InvoiceStatus, Product, ProductDraft,
};
use crate::domain::ports::{InvoiceRepository, ProductRepository};

use super::{StoreLatency, seed_date, seed_timestamp};

/// In-memory billing store backing both invoices and products.
pub struct InMemoryBillingStore {
    latency: StoreLatency,
    invoices: RwLock<Vec<Invoice>>,
    products: RwLock<Vec<Product>>,
}

impl InMemoryBillingStore {
    /// Store seeded with the demo client's books.
    #[must_use]
    pub fn seeded(latency: StoreLatency) -> Self {
        Self {
            latency,
            invoices: RwLock::new(seed_invoices()),
            products: RwLock::new(seed_products()),
        }
    }

    /// Store with empty books.
    #[must_use]
    pub fn empty(latency: StoreLatency) -> Self {
        Self {
            latency,
            invoices: RwLock::new(Vec::new()),
            products: RwLock::new(Vec::new()),
        }
    }
}

fn seed_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: Uuid::new_v4(),
            invoice_number: "INV-001".into(),
            client_name: "ABC Enterprises".into(),
            client_email: "abc@example.com".into(),
            amount: 5000,
            tax: 900,
            total: 5900,
            status: InvoiceStatus::Paid,
            due_date: seed_date(2024, 2, 15),
            created_at: seed_timestamp(2024, 1, 15),
            items: vec![InvoiceItem {
                id: Uuid::new_v4(),
                name: "Product A".into(),
                description: None,
                quantity: 10,
                rate: 500,
                amount: 5000,
            }],
        },
        Invoice {
            id: Uuid::new_v4(),
            invoice_number: "INV-002".into(),
            client_name: "XYZ Traders".into(),
            client_email: "xyz@example.com".into(),
            amount: 8000,
            tax: 1440,
            total: 9440,
            status: InvoiceStatus::Pending,
            due_date: seed_date(2024, 2, 28),
            created_at: seed_timestamp(2024, 1, 20),
            items: vec![InvoiceItem {
                id: Uuid::new_v4(),
                name: "Product B".into(),
                description: None,
                quantity: 20,
                rate: 400,
                amount: 8000,
            }],
        },
    ]
}

fn seed_products() -> Vec<Product> {
    let created_at = seed_timestamp(2024, 1, 1);
    vec![
        Product {
            id: Uuid::new_v4(),
            name: "Product A".into(),
            sku: "SKU-001".into(),
            description: None,
            category: "Electronics".into(),
            price: 500,
            cost: 350,
            stock: 100,
            low_stock_alert: 20,
            unit: "pcs".into(),
            gst_rate: 18,
            created_at,
            updated_at: created_at,
        },
        Product {
            id: Uuid::new_v4(),
            name: "Product B".into(),
            sku: "SKU-002".into(),
            description: None,
            category: "Accessories".into(),
            price: 400,
            cost: 280,
            stock: 50,
            low_stock_alert: 10,
            unit: "pcs".into(),
            gst_rate: 18,
            created_at,
            updated_at: created_at,
        },
    ]
}

#[async_trait]
impl InvoiceRepository for InMemoryBillingStore {
    async fn list(&self) -> Result<Vec<Invoice>, Error> {
        self.latency.pause().await;
        Ok(self.invoices.read().await.clone())
    }

    async fn create(&self, draft: InvoiceDraft) -> Result<Invoice, Error> {
        self.latency.pause().await;
        let invoice = Invoice::from_draft(draft, Utc::now());
        self.invoices.write().await.push(invoice.clone());
        Ok(invoice)
    }
}

#[async_trait]
impl ProductRepository for InMemoryBillingStore {
    async fn list(&self) -> Result<Vec<Product>, Error> {
        self.latency.pause().await;
        Ok(self.products.read().await.clone())
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, Error> {
        self.latency.pause().await;
        let product = Product::from_draft(draft, Utc::now());
        self.products.write().await.push(product.clone());
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_books_contain_the_demo_records() {
        let store = InMemoryBillingStore::seeded(StoreLatency::NONE);
        let invoices = InvoiceRepository::list(&store).await.expect("invoices");
        let products = ProductRepository::list(&store).await.expect("products");
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].invoice_number, "INV-001");
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].sku, "SKU-002");
    }

    #[tokio::test]
    async fn created_invoices_are_appended() {
        let store = InMemoryBillingStore::empty(StoreLatency::NONE);
        let invoice = InvoiceRepository::create(
            &store,
            InvoiceDraft {
                invoice_number: "INV-100".into(),
                client_name: "New Client".into(),
                client_email: "new@example.com".into(),
                amount: 1000,
                tax: 180,
                total: 1180,
                status: InvoiceStatus::Draft,
                due_date: seed_date(2024, 6, 1),
                items: Vec::new(),
            },
        )
        .await
        .expect("create invoice");
        let invoices = InvoiceRepository::list(&store).await.expect("invoices");
        assert_eq!(invoices.last().map(|entry| entry.id), Some(invoice.id));
    }

    #[tokio::test]
    async fn created_products_get_matching_timestamps() {
        let store = InMemoryBillingStore::empty(StoreLatency::NONE);
        let product = ProductRepository::create(
            &store,
            ProductDraft {
                name: "Product C".into(),
                sku: "SKU-003".into(),
                description: Some("New line".into()),
                category: "Electronics".into(),
                price: 700,
                cost: 420,
                stock: 30,
                low_stock_alert: 5,
                unit: "pcs".into(),
                gst_rate: 18,
            },
        )
        .await
        .expect("create product");
        assert_eq!(product.created_at, product.updated_at);
    }
}
