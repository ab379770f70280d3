use gymhub_domain::Product;

/// Alert threshold for products without an explicit `stockMinimo`.
pub const DEFAULT_MIN_STOCK: i32 = 5;

/// At or below the product's minimum stock.
#[must_use]
pub fn is_low_stock(product: &Product) -> bool {
    product.stock <= product.stock_minimo.unwrap_or(DEFAULT_MIN_STOCK)
}

/// Products that need restocking, emptiest first.
#[must_use]
pub fn low_stock(products: &[Product]) -> Vec<Product> {
    let mut low: Vec<Product> = products.iter().filter(|p| is_low_stock(p)).cloned().collect();
    low.sort_by_key(|p| p.stock);
    low
}
