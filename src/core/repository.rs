use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // loads all entities, an absent backing store yields no entities
    async fn load(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the backing store with the given entities
    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;

    // human readable location of the backing store
    fn location(&self) -> String;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    CsvFile,
    Memory,
}
