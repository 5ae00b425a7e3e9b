use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SaveCatalogCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SaveCatalogCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SaveCatalogCommandRequest {}

impl SaveCatalogCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct SaveCatalogCommandResponse {
    pub saved: usize,
    pub location: String,
}

impl SaveCatalogCommandResponse {
    pub fn new(saved: usize, location: String) -> Self {
        Self {
            saved,
            location,
        }
    }
}

#[async_trait]
impl<'a> Command<SaveCatalogCommandRequest, SaveCatalogCommandResponse> for SaveCatalogCommand<'a> {
    async fn execute(&mut self, _req: SaveCatalogCommandRequest) -> Result<SaveCatalogCommandResponse, CommandError> {
        let saved = self.catalog_service.save().await.map_err(CommandError::from)?;
        Ok(SaveCatalogCommandResponse::new(saved, self.catalog_service.location()))
    }
}
