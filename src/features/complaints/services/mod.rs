mod database_storage;
#[cfg(test)]
mod memory_storage;
mod storage;
#[cfg(test)]
pub(crate) mod storage_contract;

pub use database_storage::DatabaseStorage;
#[cfg(test)]
pub use memory_storage::MemoryStorage;
pub use storage::ComplaintStorage;
