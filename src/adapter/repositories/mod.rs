//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod in_memory_motorcycle_repository;
