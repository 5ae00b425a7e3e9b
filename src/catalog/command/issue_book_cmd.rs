use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::BookId;

pub(crate) struct IssueBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> IssueBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueBookCommandRequest {
    pub(crate) book_id: BookId,
}

impl IssueBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct IssueBookCommandResponse {
    pub book: BookDto,
}

impl IssueBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'a> Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand<'a> {
    async fn execute(&mut self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.catalog_service.issue_book(req.book_id)
            .await.map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}
