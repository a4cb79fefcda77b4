// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

#[cfg(test)]
pub mod memory_store;
pub mod store;

#[cfg(test)]
pub use memory_store::MemoryStore;
pub use store::*;
