use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Catalog;
use crate::core::domain::{BookId, Configuration};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    catalog: Catalog,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            catalog: Catalog::new(),
            book_repository,
            events_publisher,
        }
    }

    // a failed publish never undoes a catalog change that already happened
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        match event {
            Ok(event) => {
                if let Err(err) = self.events_publisher.publish(&event).await {
                    warn!("failed to publish {} for book {}: {}", event.name, event.book_id, err);
                }
            }
            Err(err) => {
                warn!("failed to build domain event: {}", err);
            }
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn load(&mut self) -> LibraryResult<usize> {
        match self.book_repository.load().await {
            Ok(books) => {
                self.catalog = Catalog::from_books(books);
                info!("loaded {} book(s) from {}", self.catalog.len(), self.book_repository.location());
                Ok(self.catalog.len())
            }
            Err(err) => {
                warn!("failed to load {}, starting with an empty catalog: {}", self.book_repository.location(), err);
                self.catalog = Catalog::new();
                Err(err)
            }
        }
    }

    async fn save(&self) -> LibraryResult<usize> {
        let saved = self.book_repository.save(self.catalog.books()).await?;
        info!("saved {} book(s) to {}", saved, self.book_repository.location());
        Ok(saved)
    }

    fn location(&self) -> String {
        self.book_repository.location()
    }

    async fn add_book(&mut self, title: &str, author: &str) -> LibraryResult<BookDto> {
        let book_id = self.catalog.add(title, author);
        let book = BookDto::from(self.catalog.find(book_id)?);
        self.publish(DomainEvent::added("book_added", book_id, &book)).await;
        Ok(book)
    }

    async fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto> {
        self.catalog.find(id).map(BookDto::from)
    }

    async fn list_books(&self) -> Option<Vec<BookDto>> {
        self.catalog.list().map(|books| books.iter().map(BookDto::from).collect())
    }

    async fn search_books(&self, query: &str) -> Vec<BookDto> {
        self.catalog.search(query).into_iter().map(BookDto::from).collect()
    }

    async fn issue_book(&mut self, id: BookId) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.catalog.issue(id)?);
        self.publish(DomainEvent::updated("book_issued", id, &book)
            .map(|event| event.with_metadata("book_status", book.book_status.to_string().as_str()))).await;
        Ok(book)
    }

    async fn return_book(&mut self, id: BookId) -> LibraryResult<BookDto> {
        let book = BookDto::from(self.catalog.return_book(id)?);
        self.publish(DomainEvent::updated("book_returned", id, &book)
            .map(|event| event.with_metadata("book_status", book.book_status.to_string().as_str()))).await;
        Ok(book)
    }

    async fn remove_book(&mut self, id: BookId) -> LibraryResult<BookDto> {
        let book = BookDto::from(&self.catalog.remove(id)?);
        self.publish(DomainEvent::deleted("book_removed", id, &book)).await;
        Ok(book)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        BookDto::new(other.book_id, other.title.as_str(), other.author.as_str(), other.book_status)
    }
}
