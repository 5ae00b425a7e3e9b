pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::domain::BookId;
use crate::core::library::LibraryResult;

// CatalogService owns the in-memory catalog for the lifetime of the process and
// persists it through a book repository only when asked to.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // replaces the catalog with the persisted books, leaving it empty on failure
    async fn load(&mut self) -> LibraryResult<usize>;
    async fn save(&self) -> LibraryResult<usize>;
    fn location(&self) -> String;

    async fn add_book(&mut self, title: &str, author: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto>;
    // None when the catalog holds no books at all
    async fn list_books(&self) -> Option<Vec<BookDto>>;
    async fn search_books(&self, query: &str) -> Vec<BookDto>;
    async fn issue_book(&mut self, id: BookId) -> LibraryResult<BookDto>;
    async fn return_book(&mut self, id: BookId) -> LibraryResult<BookDto>;
    async fn remove_book(&mut self, id: BookId) -> LibraryResult<BookDto>;
}
