use tracing::warn;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::{BookId, Identifiable};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

/// In-memory catalog of books kept in insertion order.
///
/// Ids are unique among the live records. A new book gets the current maximum id
/// plus one, so removing the highest numbered book frees its id for the next add.
/// All lookups are linear scans.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Catalog {
    books: Vec<BookEntity>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from persisted records, dropping any record whose id is
    /// already taken by an earlier one.
    pub fn from_books(books: Vec<BookEntity>) -> Self {
        let mut catalog = Self::new();
        for book in books {
            if catalog.books.iter().any(|existing| existing.id() == book.id()) {
                warn!("skipping duplicate book id {}", book.id());
                continue;
            }
            catalog.books.push(book);
        }
        catalog
    }

    pub fn next_id(&self) -> BookId {
        self.books.iter().map(|b| b.id()).max().map_or(1, |max| max + 1)
    }

    pub fn add(&mut self, title: &str, author: &str) -> BookId {
        let book_id = self.next_id();
        self.books.push(BookEntity::new(book_id, title, author, BookStatus::Available));
        book_id
    }

    pub fn find(&self, id: BookId) -> LibraryResult<&BookEntity> {
        self.books.iter().find(|b| b.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))
    }

    fn find_mut(&mut self, id: BookId) -> LibraryResult<&mut BookEntity> {
        self.books.iter_mut().find(|b| b.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))
    }

    pub fn list(&self) -> Option<&[BookEntity]> {
        if self.books.is_empty() {
            None
        } else {
            Some(self.books.as_slice())
        }
    }

    pub fn search(&self, query: &str) -> Vec<&BookEntity> {
        self.books.iter().filter(|b| b.matches(query)).collect()
    }

    pub fn issue(&mut self, id: BookId) -> LibraryResult<&BookEntity> {
        let book = self.find_mut(id)?;
        if !book.is_available() {
            return Err(LibraryError::already_issued(
                format!("book {} is already issued", id).as_str()));
        }
        book.book_status = BookStatus::Issued;
        Ok(&*book)
    }

    pub fn return_book(&mut self, id: BookId) -> LibraryResult<&BookEntity> {
        let book = self.find_mut(id)?;
        if book.is_available() {
            return Err(LibraryError::not_issued(
                format!("book {} was not issued", id).as_str()));
        }
        book.book_status = BookStatus::Available;
        Ok(&*book)
    }

    pub fn remove(&mut self, id: BookId) -> LibraryResult<BookEntity> {
        let ndx = self.books.iter().position(|b| b.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))?;
        Ok(self.books.remove(ndx))
    }

    pub fn books(&self) -> &[BookEntity] {
        self.books.as_slice()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::model::Catalog;
    use crate::core::library::{BookStatus, LibraryError};

    #[tokio::test]
    async fn test_should_assign_max_plus_one_ids() {
        let mut catalog = Catalog::new();
        assert_eq!(1, catalog.add("Dune", "Herbert"));
        assert_eq!(2, catalog.add("Foundation", "Asimov"));
        let _ = catalog.remove(1).expect("should remove");
        assert_eq!(3, catalog.add("Hyperion", "Simmons"));
        // removing the highest id frees it for the next add
        let _ = catalog.remove(3).expect("should remove");
        assert_eq!(3, catalog.add("Ubik", "Dick"));
    }

    #[tokio::test]
    async fn test_should_restart_ids_when_emptied() {
        let mut catalog = Catalog::new();
        let dune = catalog.add("Dune", "Herbert");
        assert_eq!(1, dune);
        assert!(catalog.find(dune).expect("should find").book_status.is_available());
        assert_eq!(2, catalog.add("Foundation", "Asimov"));
        let _ = catalog.remove(1).expect("should remove");
        let _ = catalog.remove(2).expect("should remove");
        assert_eq!(1, catalog.add("Hyperion", "Simmons"));
    }

    #[tokio::test]
    async fn test_should_start_after_highest_loaded_id() {
        let catalog = Catalog::from_books(vec![
            BookEntity::new(9, "Dune", "Herbert", BookStatus::Available),
            BookEntity::new(4, "Emma", "Austen", BookStatus::Issued),
        ]);
        assert_eq!(10, catalog.next_id());
    }

    #[tokio::test]
    async fn test_should_drop_duplicate_loaded_ids() {
        let catalog = Catalog::from_books(vec![
            BookEntity::new(1, "Dune", "Herbert", BookStatus::Available),
            BookEntity::new(1, "Emma", "Austen", BookStatus::Issued),
        ]);
        assert_eq!(1, catalog.len());
        assert_eq!("Dune", catalog.books()[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_issue_and_return() {
        let mut catalog = Catalog::new();
        let id = catalog.add("Dune", "Herbert");

        let issued = catalog.issue(id).expect("should issue");
        assert_eq!("Dune", issued.title.as_str());
        assert_eq!(BookStatus::Issued, catalog.find(id).expect("should find").book_status);
        assert!(matches!(catalog.issue(id), Err(LibraryError::AlreadyIssued { .. })));
        assert_eq!(BookStatus::Issued, catalog.find(id).expect("should find").book_status);

        let returned = catalog.return_book(id).expect("should return");
        assert_eq!("Dune", returned.title.as_str());
        assert_eq!(BookStatus::Available, catalog.find(id).expect("should find").book_status);
        assert!(matches!(catalog.return_book(id), Err(LibraryError::NotIssued { .. })));
        assert_eq!(BookStatus::Available, catalog.find(id).expect("should find").book_status);
    }

    #[tokio::test]
    async fn test_should_report_missing_books() {
        let mut catalog = Catalog::new();
        assert!(matches!(catalog.find(1), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.issue(1), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.return_book(1), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.remove(1), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let mut catalog = Catalog::new();
        let dune = catalog.add("Dune", "Herbert");
        let emma = catalog.add("Emma", "Austen");

        let removed = catalog.remove(dune).expect("should remove");
        assert_eq!("Dune", removed.title.as_str());
        assert!(matches!(catalog.find(dune), Err(LibraryError::NotFound { .. })));
        let listed = catalog.list().expect("should list");
        assert_eq!(1, listed.len());
        assert_eq!(emma, listed[0].book_id);
    }

    #[tokio::test]
    async fn test_should_list_in_insertion_order() {
        let mut catalog = Catalog::new();
        assert!(catalog.list().is_none());
        assert!(catalog.is_empty());

        let _ = catalog.add("Foundation", "Asimov");
        let _ = catalog.add("Dune", "Herbert");
        let titles: Vec<&str> = catalog.list().expect("should list").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Foundation", "Dune"], titles);
    }

    #[tokio::test]
    async fn test_should_search_title_or_author() {
        let mut catalog = Catalog::new();
        let _ = catalog.add("Dune", "Frank Herbert");
        let _ = catalog.add("Foundation", "Isaac Asimov");
        let _ = catalog.add("The Dune Encyclopedia", "Willis McNelly");

        let res = catalog.search("dUNe");
        assert_eq!(2, res.len());
        assert_eq!("Dune", res[0].title.as_str());
        assert_eq!("The Dune Encyclopedia", res[1].title.as_str());
        assert_eq!(1, catalog.search("asimov").len());
        assert_eq!(3, catalog.search("").len());
        assert!(catalog.search("tolkien").is_empty());
    }
}
