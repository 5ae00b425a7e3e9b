use std::sync::Mutex;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the saved catalog in process memory
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.lock()
            .map_err(|err| LibraryError::runtime(err.to_string().as_str(), None))?;
        Ok(books.clone())
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let mut books = self.books.lock()
            .map_err(|err| LibraryError::runtime(err.to_string().as_str(), None))?;
        *books = entities.to_vec();
        Ok(books.len())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
