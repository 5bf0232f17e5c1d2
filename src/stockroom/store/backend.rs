use crate::error::Result;

/// Raw text I/O for the inventory file.
///
/// This trait handles the "where" of storage (filesystem vs memory); the
/// codec handles the "what". Backends never interpret the text.
pub trait StorageBackend {
    /// Read the whole serialized inventory.
    /// Returns Ok(None) if nothing has been stored yet (first run).
    /// Returns Err only when stored data exists but cannot be read.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored inventory with `text`.
    fn write(&self, text: &str) -> Result<()>;

    /// Human readable location, used in messages and errors.
    fn location(&self) -> String;
}
