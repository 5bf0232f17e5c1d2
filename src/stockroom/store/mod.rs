//! # Store Layer
//!
//! Two halves live here:
//!
//! - [`Inventory`]: the in-memory, insertion-ordered product collection. It is
//!   the only owner of product records and the only place the one-product-per-id
//!   rule is enforced.
//! - [`StorageBackend`]: raw text I/O for the persisted inventory, with
//!   [`fs_backend::FsBackend`] for real files and [`mem_backend::MemBackend`]
//!   for tests.
//!
//! [`load`] and [`save`] glue a backend to the [`codec`](crate::codec). Loading a
//! missing file is not an error: it yields an empty report, which is what a first
//! run looks like.
//!
//! ## Storage Format
//!
//! ```text
//! inventory.csv
//! ├── id,name,quantity,price     # header, skipped on read
//! ├── 1,Pen,10,100
//! └── 2,"Note, Big",5,250
//! ```
//!
//! Saves rewrite the whole file through a temp file and a rename. There is no
//! locking; a second process writing the same file concurrently is not
//! supported.

use crate::codec::{self, LoadReport};
use crate::error::Result;
use crate::model::Product;
use std::path::Path;
use tracing::{debug, info};

pub mod backend;
pub mod fs_backend;
pub mod inventory;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use inventory::{BulkLoad, Inventory};

pub fn load<B: StorageBackend>(backend: &B) -> Result<LoadReport> {
    let Some(text) = backend.read()? else {
        info!(location = %backend.location(), "No inventory file yet, starting empty");
        return Ok(LoadReport::default());
    };

    let report = codec::decode(&text);
    debug!(
        location = %backend.location(),
        loaded = report.products.len(),
        skipped = report.skipped.len(),
        "Decoded inventory"
    );
    Ok(report)
}

pub fn save<B: StorageBackend>(backend: &B, products: &[Product]) -> Result<()> {
    backend.write(&codec::encode(products))?;
    debug!(location = %backend.location(), count = products.len(), "Saved inventory");
    Ok(())
}

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    load(&fs_backend::FsBackend::new(path.as_ref()))
}

pub fn save_file<P: AsRef<Path>>(path: P, products: &[Product]) -> Result<()> {
    save(&fs_backend::FsBackend::new(path.as_ref()), products)
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use crate::codec;
    use crate::model::Product;

    pub fn sample_products() -> Vec<Product> {
        vec![
            Product::new(1, "Blue Widget", 10, 100),
            Product::new(2, "Glue Stick", 5, 250),
            Product::new(3, "Note, Big", 12, 300),
        ]
    }

    pub fn sample_backend() -> MemBackend {
        MemBackend::with_text(codec::encode(&sample_products()))
    }
}
