use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::BookStatus;

// BookEntity is a single catalog record as held in memory and written to the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
}

impl BookEntity {
    pub fn new(book_id: BookId, title: &str, author: &str, status: BookStatus) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            book_status: status,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> BookId {
        self.book_id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}
