use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation("title must not be empty", Some("title".to_string())));
        }
        if self.author.trim().is_empty() {
            return Err(LibraryError::validation("author must not be empty", Some("author".to_string())));
        }
        Ok(())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    async fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate()?;
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str())
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
