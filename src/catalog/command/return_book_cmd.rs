use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::BookId;

pub(crate) struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    book_id: BookId,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    async fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.book_id)
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new(Path::new("books.csv")), RepositoryStore::Memory);
        let book = svc.add_book("Dune", "Herbert").await.expect("should add book");

        let res = ReturnBookCommand::new(svc.as_mut())
            .execute(ReturnBookCommandRequest::new(book.book_id)).await;
        assert!(matches!(res, Err(CommandError::NotIssued { .. })));

        let _ = svc.issue_book(book.book_id).await.expect("should issue book");
        let res = ReturnBookCommand::new(svc.as_mut())
            .execute(ReturnBookCommandRequest::new(book.book_id)).await.expect("should return book");
        assert_eq!("Dune", res.book.title.as_str());
        assert!(res.book.available);
    }
}
