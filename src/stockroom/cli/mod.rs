//! Terminal output for the binary. Not part of the library API.

pub(crate) mod print;
