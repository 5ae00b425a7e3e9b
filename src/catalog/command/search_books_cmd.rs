use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    async fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        Ok(SearchBooksCommandResponse::new(self.catalog_service.search_books(req.query.as_str()).await))
    }
}
