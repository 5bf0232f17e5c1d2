//! # API Facade
//!
//! [`StockApi`] is the single entry point for front ends. It owns the
//! [`Inventory`] and the [`StorageBackend`] it was loaded from, dispatches to
//! the command layer, and writes the inventory back on [`StockApi::save`].
//!
//! Opening the API loads the backend through [`Inventory::add_all`], so a file
//! that repeats an id keeps the first record and reports the others instead of
//! breaking the one-product-per-id rule.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `StockApi<FsBackend>`
//! - Testing: `StockApi<MemBackend>`

use crate::codec::MalformedRecord;
use crate::commands;
use crate::error::Result;
use crate::model::{Product, ProductId, ProductUpdate};
use crate::store::{self, Inventory, StorageBackend};
use tracing::info;

/// What happened while opening the inventory.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: Vec<MalformedRecord>,
    pub duplicates: Vec<Product>,
}

impl LoadSummary {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.duplicates.is_empty()
    }

    /// Warnings for the front end, headed by a count line. Empty when clean.
    pub fn messages(&self) -> Vec<CmdMessage> {
        if self.is_clean() {
            return Vec::new();
        }
        let heading = CmdMessage::warning(format!(
            "Loaded {} products, ignored {} records",
            self.loaded,
            self.skipped.len() + self.duplicates.len()
        ));
        let skipped = self
            .skipped
            .iter()
            .map(|record| CmdMessage::warning(format!("Skipped {}", record)));
        let duplicates = self.duplicates.iter().map(|product| {
            CmdMessage::warning(format!(
                "Skipped duplicate id {}: {}",
                product.id, product.name
            ))
        });
        std::iter::once(heading)
            .chain(skipped)
            .chain(duplicates)
            .collect()
    }
}

pub struct StockApi<B: StorageBackend> {
    inventory: Inventory,
    backend: B,
    summary: LoadSummary,
}

impl<B: StorageBackend> StockApi<B> {
    /// Load the backend's contents into a fresh inventory.
    pub fn open(backend: B) -> Result<Self> {
        let report = store::load(&backend)?;
        let mut inventory = Inventory::new();
        let bulk = inventory.add_all(report.products);

        info!(
            location = %backend.location(),
            loaded = bulk.added,
            skipped = report.skipped.len(),
            duplicates = bulk.rejected.len(),
            "Opened inventory"
        );

        Ok(Self {
            inventory,
            backend,
            summary: LoadSummary {
                loaded: bulk.added,
                skipped: report.skipped,
                duplicates: bulk.rejected,
            },
        })
    }

    pub fn load_summary(&self) -> &LoadSummary {
        &self.summary
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn add_product(&mut self, product: Product) -> Result<CmdResult> {
        commands::add::run(&mut self.inventory, product)
    }

    pub fn list_products(&self) -> Result<CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn search_products(&self, query: &SearchQuery) -> Result<CmdResult> {
        commands::search::run(&self.inventory, query)
    }

    pub fn update_product(&mut self, id: ProductId, update: &ProductUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.inventory, id, update)
    }

    pub fn remove_product(&mut self, id: ProductId) -> Result<CmdResult> {
        commands::remove::run(&mut self.inventory, id)
    }

    /// Write the whole inventory back to the backend.
    pub fn save(&self) -> Result<()> {
        store::save(&self.backend, self.inventory.list_all())
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::SearchQuery;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
