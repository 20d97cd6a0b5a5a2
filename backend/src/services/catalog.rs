//! Catalog service exposing the generated collections and their derived views

use std::sync::Arc;

use shared::stats::{dashboard_stats, inventory_breakdown};
use shared::views::{formatted_orders, FormattedOrder};
use shared::{
    validate_catalog, Catalog, CatalogSource, DashboardStats, InventoryBreakdown, Locale,
    MockCatalogSource, Order, Product, Role, Supplier,
};

use crate::config::CatalogConfig;
use crate::error::{AppError, AppResult};

/// Read-only access to one immutable catalog snapshot
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    locale: Locale,
}

impl CatalogService {
    /// Load a catalog from any source, rejecting one with broken references
    pub fn load(source: &dyn CatalogSource, locale: Locale) -> AppResult<Self> {
        let catalog = source.load_catalog();
        validate_catalog(&catalog).map_err(|msg| AppError::Validation {
            field: "catalog".to_string(),
            message: msg.to_string(),
        })?;

        tracing::info!(
            seed = catalog.seed,
            products = catalog.products.len(),
            suppliers = catalog.suppliers.len(),
            orders = catalog.orders.len(),
            "Catalog loaded"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            locale,
        })
    }

    /// Load the mock catalog described by configuration
    pub fn from_config(config: &CatalogConfig, locale: Locale) -> AppResult<Self> {
        let source = MockCatalogSource {
            seed: config.seed,
            anchor: config.anchor,
            options: config.generator_options(),
        };
        Self::load(&source, locale)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn products(&self) -> &[Product] {
        &self.catalog.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.catalog.suppliers
    }

    pub fn supplier(&self, id: &str) -> AppResult<&Supplier> {
        self.catalog
            .supplier(id)
            .ok_or_else(|| AppError::NotFound(format!("Supplier {}", id)))
    }

    pub fn orders(&self) -> &[Order] {
        &self.catalog.orders
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn dashboard_stats(&self, role: Role) -> DashboardStats {
        tracing::debug!(%role, "Computing dashboard stats");
        dashboard_stats(&self.catalog, role)
    }

    pub fn formatted_orders(&self) -> Vec<FormattedOrder> {
        formatted_orders(&self.catalog.orders, self.locale)
    }

    pub fn inventory_breakdown(&self) -> InventoryBreakdown {
        inventory_breakdown(&self.catalog.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct BrokenSource;

    impl CatalogSource for BrokenSource {
        fn load_catalog(&self) -> Catalog {
            let mut catalog = MockCatalogSource::seeded(3).load_catalog();
            catalog.suppliers[0].products.push("PRD404".to_string());
            catalog
        }
    }

    #[test]
    fn test_from_config_with_seed_and_anchor_is_stable() {
        let anchor = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let config = CatalogConfig {
            seed: Some(17),
            anchor: Some(anchor),
            ..CatalogConfig::default()
        };
        let a = CatalogService::from_config(&config, Locale::EnUs).unwrap();
        let b = CatalogService::from_config(&config, Locale::EnUs).unwrap();
        assert_eq!(a.catalog(), b.catalog());
        assert_eq!(a.catalog().generated_at, anchor);
        assert_eq!(a.suppliers().len(), 5);
        assert_eq!(a.catalog().seed, 17);
    }

    #[test]
    fn test_supplier_lookup() {
        let service = CatalogService::load(&MockCatalogSource::seeded(3), Locale::EnUs).unwrap();
        let first = &service.suppliers()[0];
        assert_eq!(service.supplier(&first.id).unwrap().name, first.name);

        let missing = service.supplier("SUP404").unwrap_err();
        assert!(matches!(missing, AppError::NotFound(_)));
        assert_eq!(missing.detail().message, "Supplier SUP404 not found");
    }

    #[test]
    fn test_broken_source_rejected() {
        let result = CatalogService::load(&BrokenSource, Locale::EnUs);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
