use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::BookId;
use crate::utils::date::serializer;

// DomainEventType defines type of change applied to the catalog
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent records a single catalog mutation
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub book_id: BookId,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, book_id: BookId, data: &T) -> serde_json::Result<Self> {
        Self::build(name, book_id, DomainEventType::Added, data)
    }

    pub fn updated<T: Serialize>(name: &str, book_id: BookId, data: &T) -> serde_json::Result<Self> {
        Self::build(name, book_id, DomainEventType::Updated, data)
    }

    pub fn deleted<T: Serialize>(name: &str, book_id: BookId, data: &T) -> serde_json::Result<Self> {
        Self::build(name, book_id, DomainEventType::Deleted, data)
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    fn build<T: Serialize>(name: &str, book_id: BookId, kind: DomainEventType, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            book_id,
            kind,
            metadata: HashMap::new(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}
