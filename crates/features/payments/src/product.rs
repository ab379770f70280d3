use crate::error::{PaymentError, PaymentErrorExt};
use gymhub_domain::{CatalogStatus, Product};
use gymhub_http::{ApiClient, Collection};
use gymhub_kernel::validation::Validate;
use tracing::{debug, info};

/// Product inventory (`productos`).
#[derive(Debug, Clone)]
pub struct ProductService {
    records: Collection<Product>,
}

impl ProductService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { records: Collection::new(api) }
    }

    pub async fn list(&self) -> Result<Vec<Product>, PaymentError> {
        self.records.list().await.context("Failed to list products")
    }

    pub async fn active(&self) -> Result<Vec<Product>, PaymentError> {
        let mut products = self.list().await?;
        products.retain(|p| p.estatus == CatalogStatus::Active);
        Ok(products)
    }

    pub async fn get(&self, id: &str) -> Result<Product, PaymentError> {
        self.records.get(id).await.context(format!("Failed to load product {id}"))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Product>, PaymentError> {
        debug!(term, "Searching products");
        self.records.search(term).await.context("Failed to search products")
    }

    pub async fn create(&self, product: &Product) -> Result<Product, PaymentError> {
        product.validate()?;
        self.records.create(product).await.context("Failed to create product")
    }

    pub async fn update(&self, id: &str, product: &Product) -> Result<Product, PaymentError> {
        product.validate()?;
        self.records.update(id, product).await.context(format!("Failed to update product {id}"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), PaymentError> {
        self.records.delete(id).await.context(format!("Failed to delete product {id}"))
    }

    /// Adds `delta` units (negative for sales) and stores the new stock level.
    ///
    /// Stock never goes below zero; such an adjustment is rejected without a request.
    pub async fn adjust_stock(&self, id: &str, delta: i32) -> Result<Product, PaymentError> {
        let mut product = self.get(id).await?;
        let new_stock = adjusted_stock(&product, delta)?;
        if new_stock == product.stock {
            return Ok(product);
        }

        let previous = product.stock;
        product.stock = new_stock;
        let updated = self
            .records
            .update(id, &product)
            .await
            .context(format!("Failed to adjust stock of product {id}"))?;
        info!(product = %updated.nombre, from = previous, to = updated.stock, "Stock adjusted");
        Ok(updated)
    }
}

fn adjusted_stock(product: &Product, delta: i32) -> Result<i32, PaymentError> {
    match product.stock.checked_add(delta) {
        Some(stock) if stock >= 0 => Ok(stock),
        _ => Err(PaymentError::InsufficientStock {
            product: product.nombre.clone(),
            available: product.stock,
            requested: delta.saturating_neg(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i32) -> Product {
        Product {
            id: Some(3_u64.into()),
            nombre: "Agua 1L".to_owned(),
            descripcion: None,
            categoria: None,
            precio: 15.0,
            stock,
            stock_minimo: None,
            estatus: CatalogStatus::Active,
        }
    }

    #[test]
    fn stock_adjustments() {
        assert_eq!(adjusted_stock(&product(10), 5).unwrap(), 15);
        assert_eq!(adjusted_stock(&product(10), -10).unwrap(), 0);

        let err = adjusted_stock(&product(2), -3).unwrap_err();
        assert_eq!(err.to_string(), "Insufficient stock for 'Agua 1L': 2 available, 3 requested");
        assert!(adjusted_stock(&product(i32::MAX), 1).is_err());
    }
}
