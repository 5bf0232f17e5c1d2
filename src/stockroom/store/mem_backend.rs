use super::backend::StorageBackend;
use crate::error::{Result, StockError, StorageAction};
use std::cell::{Cell, RefCell};
use std::io;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since stockroom is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    text: RefCell<Option<String>>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `text`, as if a file existed.
    pub fn with_text(text: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.text.borrow_mut() = Some(text.into());
        backend
    }

    /// The raw text last written, if any.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(StockError::storage(
                StorageAction::Read,
                self.location(),
                io::Error::new(io::ErrorKind::PermissionDenied, "Simulated read error"),
            ));
        }
        Ok(self.text.borrow().clone())
    }

    fn write(&self, text: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StockError::storage(
                StorageAction::Write,
                self.location(),
                io::Error::other("Simulated write error"),
            ));
        }
        *self.text.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
