//! 持久化实现

mod memory;
mod postgres;
mod rows;

pub use memory::{
    InMemoryCatalogStore, InMemoryProductVideoMappingRepository, InMemoryVideoRepository,
};
pub use postgres::{PostgresProductVideoMappingRepository, PostgresVideoRepository, migrations};
