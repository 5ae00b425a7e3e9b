use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

// Book ids are positive integers assigned by the catalog
pub type BookId = u32;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> BookId;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub library_name: String,
    pub data_file: PathBuf,
    pub log_level: String,
}

impl Configuration {
    pub fn new(data_file: &Path) -> Self {
        Configuration {
            library_name: "Library Management System".to_string(),
            data_file: data_file.to_path_buf(),
            log_level: "warn".to_string(),
        }
    }
}
