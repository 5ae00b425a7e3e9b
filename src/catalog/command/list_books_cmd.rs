use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


// books is None when the catalog is empty
#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Option<Vec<BookDto>>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Option<Vec<BookDto>>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    async fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse::new(self.catalog_service.list_books().await))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let mut svc = factory::create_catalog_service(&Configuration::new(Path::new("books.csv")), RepositoryStore::Memory);

        let res = ListBooksCommand::new(svc.as_ref())
            .execute(ListBooksCommandRequest::new()).await.expect("should list books");
        assert!(res.books.is_none());

        let _ = svc.add_book("Dune", "Herbert").await.expect("should add book");
        let res = ListBooksCommand::new(svc.as_ref())
            .execute(ListBooksCommandRequest::new()).await.expect("should list books");
        assert_eq!(1, res.books.expect("should have books").len());
    }
}
