use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::BookStatus;

// BookDto is a data transfer object handed out by the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    pub available: bool,
}

impl BookDto {
    pub fn new(book_id: BookId, title: &str, author: &str, status: BookStatus) -> BookDto {
        BookDto {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            book_status: status,
            available: status.is_available(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> BookId {
        self.book_id
    }
}

impl Book for BookDto {
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

// renders one row of the catalog listing
impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:<4} | {:<30} | {:<20} | {}", self.book_id, self.title, self.author, self.book_status)
    }
}
