//! Synthetic catalog generation
//!
//! Produces a self-consistent set of products, suppliers and orders from a
//! seed and an anchor instant. The same seed and anchor always yield the
//! same catalog.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Order, OrderLineItem, OrderStatus, Product, Supplier};

/// Restocking threshold applied to every generated product
pub const MIN_STOCK_LEVEL: u32 = 10;

/// Upper bound for `created_at` back-dating (~115 days)
const CREATED_WINDOW_MS: i64 = 10_000_000_000;
/// Upper bound for `updated_at` back-dating (~11.5 days)
const UPDATED_WINDOW_MS: i64 = 1_000_000_000;

/// Probability that an order already carries a tracking number
const TRACKING_PROBABILITY: f64 = 0.7;

/// The three base collections, immutable once generated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
    pub orders: Vec<Order>,
}

impl Catalog {
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }
}

/// Collection sizes for the generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub product_count: usize,
    /// At least one supplier is always generated
    pub supplier_count: usize,
    pub order_count: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            product_count: 20,
            supplier_count: 5,
            order_count: 50,
        }
    }
}

/// Anything able to hand out the base collections
pub trait CatalogSource {
    fn load_catalog(&self) -> Catalog;
}

/// Catalog source backed by the random generator
#[derive(Debug, Clone, Default)]
pub struct MockCatalogSource {
    /// Drawn from entropy when absent
    pub seed: Option<u64>,
    /// Defaults to the current time
    pub anchor: Option<DateTime<Utc>>,
    pub options: GeneratorOptions,
}

impl MockCatalogSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl CatalogSource for MockCatalogSource {
    fn load_catalog(&self) -> Catalog {
        let seed = self.seed.unwrap_or_else(rand::random);
        let anchor = self.anchor.unwrap_or_else(Utc::now);
        generate_catalog(seed, anchor, &self.options)
    }
}

/// Generate products, then suppliers joined on them, then orders sampling them
pub fn generate_catalog(seed: u64, anchor: DateTime<Utc>, options: &GeneratorOptions) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let supplier_count = options.supplier_count.max(1);

    let products = generate_products(&mut rng, anchor, options.product_count, supplier_count);
    let suppliers = generate_suppliers(&mut rng, anchor, supplier_count, &products);
    let orders = generate_orders(&mut rng, anchor, options.order_count, &products);

    Catalog {
        seed,
        generated_at: anchor,
        products,
        suppliers,
        orders,
    }
}

fn back_dated(rng: &mut StdRng, anchor: DateTime<Utc>, window_ms: i64) -> DateTime<Utc> {
    anchor - Duration::milliseconds(rng.gen_range(0..window_ms))
}

fn supplier_id(n: usize) -> String {
    format!("SUP{}", n)
}

fn generate_products(
    rng: &mut StdRng,
    anchor: DateTime<Utc>,
    count: usize,
    supplier_count: usize,
) -> Vec<Product> {
    (1..=count)
        .map(|n| Product {
            id: format!("PRD{:03}", n),
            name: format!("Product {}", n),
            description: format!("Description for Product {}", n),
            sku: format!("SKU-{:04}", n),
            category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
            price: Decimal::from(rng.gen_range(10..110_i64)),
            cost: Decimal::from(rng.gen_range(5..55_i64)),
            stock_quantity: rng.gen_range(0..100),
            min_stock_level: MIN_STOCK_LEVEL,
            supplier_id: supplier_id(rng.gen_range(1..=supplier_count)),
            created_at: back_dated(rng, anchor, CREATED_WINDOW_MS),
            updated_at: back_dated(rng, anchor, UPDATED_WINDOW_MS),
        })
        .collect()
}

fn generate_suppliers(
    rng: &mut StdRng,
    anchor: DateTime<Utc>,
    count: usize,
    products: &[Product],
) -> Vec<Supplier> {
    (1..=count)
        .map(|n| {
            let id = supplier_id(n);
            let owned = products
                .iter()
                .filter(|p| p.supplier_id == id)
                .map(|p| p.id.clone())
                .collect();

            Supplier {
                name: format!("Supplier {}", n),
                email: format!("supplier{}@example.com", n),
                phone: format!(
                    "+1-555-{}-{}",
                    rng.gen_range(100..1000),
                    rng.gen_range(1000..10000)
                ),
                address: format!("{} Main St, City, State, 12345", rng.gen_range(1..1000)),
                performance_score: rng.gen_range(50..100),
                products: owned,
                created_at: back_dated(rng, anchor, CREATED_WINDOW_MS),
                id,
            }
        })
        .collect()
}

fn generate_orders(
    rng: &mut StdRng,
    anchor: DateTime<Utc>,
    count: usize,
    products: &[Product],
) -> Vec<Order> {
    (1..=count)
        .map(|n| {
            let line_count = rng.gen_range(1..=4);
            let line_items: Vec<OrderLineItem> = if products.is_empty() {
                Vec::new()
            } else {
                (0..line_count)
                    .map(|_| {
                        let product = &products[rng.gen_range(0..products.len())];
                        OrderLineItem {
                            product_id: product.id.clone(),
                            quantity: rng.gen_range(1..=5),
                            price: product.price,
                        }
                    })
                    .collect()
            };

            let total_amount = line_items.iter().map(OrderLineItem::line_total).sum();

            Order {
                id: format!("ORD{:03}", n),
                customer_id: format!("CUST{}", rng.gen_range(1..=100)),
                line_items,
                status: OrderStatus::ALL[rng.gen_range(0..OrderStatus::ALL.len())],
                total_amount,
                shipping_address: format!(
                    "{} Customer St, City, State, 12345",
                    rng.gen_range(1..1000)
                ),
                tracking_number: rng
                    .gen_bool(TRACKING_PROBABILITY)
                    .then(|| format!("TRK{}", rng.gen_range(0..1_000_000))),
                created_at: back_dated(rng, anchor, CREATED_WINDOW_MS),
                updated_at: back_dated(rng, anchor, UPDATED_WINDOW_MS),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_default_shape() {
        let catalog = generate_catalog(7, anchor(), &GeneratorOptions::default());
        assert_eq!(catalog.products.len(), 20);
        assert_eq!(catalog.suppliers.len(), 5);
        assert_eq!(catalog.orders.len(), 50);
        assert_eq!(catalog.products[0].id, "PRD001");
        assert_eq!(catalog.products[0].sku, "SKU-0001");
        assert_eq!(catalog.orders[49].id, "ORD050");
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = generate_catalog(42, anchor(), &GeneratorOptions::default());
        let b = generate_catalog(42, anchor(), &GeneratorOptions::default());
        assert_eq!(a, b);

        let c = generate_catalog(43, anchor(), &GeneratorOptions::default());
        assert_ne!(a.orders, c.orders);
    }

    #[test]
    fn test_value_ranges() {
        let catalog = generate_catalog(99, anchor(), &GeneratorOptions::default());
        for p in &catalog.products {
            assert!(p.price >= Decimal::from(10) && p.price < Decimal::from(110));
            assert!(p.cost >= Decimal::from(5) && p.cost < Decimal::from(55));
            assert!(p.stock_quantity < 100);
            assert_eq!(p.min_stock_level, MIN_STOCK_LEVEL);
            assert!(p.created_at <= anchor());
            assert!(p.updated_at > anchor() - Duration::milliseconds(UPDATED_WINDOW_MS));
        }
        for o in &catalog.orders {
            assert!((1..=4).contains(&o.line_items.len()));
            assert!(o.line_items.iter().all(|li| (1..=5).contains(&li.quantity)));
        }
        for s in &catalog.suppliers {
            assert!((50..100).contains(&s.performance_score));
        }
    }

    #[test]
    fn test_zero_suppliers_still_generates_one() {
        let options = GeneratorOptions {
            product_count: 3,
            supplier_count: 0,
            order_count: 2,
        };
        let catalog = generate_catalog(1, anchor(), &options);
        assert_eq!(catalog.suppliers.len(), 1);
        assert_eq!(catalog.suppliers[0].products.len(), 3);
    }

    #[test]
    fn test_no_products_yields_empty_orders() {
        let options = GeneratorOptions {
            product_count: 0,
            supplier_count: 2,
            order_count: 3,
        };
        let catalog = generate_catalog(5, anchor(), &options);
        assert!(catalog.orders.iter().all(|o| o.line_items.is_empty()));
        assert!(catalog.orders.iter().all(|o| o.total_amount.is_zero()));
    }

    #[test]
    fn test_mock_source_uses_seed_and_anchor() {
        let source = MockCatalogSource {
            seed: Some(11),
            anchor: Some(anchor()),
            options: GeneratorOptions::default(),
        };
        let catalog = source.load_catalog();
        assert_eq!(catalog.seed, 11);
        assert_eq!(catalog, source.load_catalog());
    }
}
