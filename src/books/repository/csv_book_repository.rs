use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::books::domain::model::BookEntity;
use crate::core::domain::BookId;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;

pub(crate) const DELIMITER: char = ',';
pub(crate) const HEADER: &str = "id,title,author,available";
const FIELD_COUNT: usize = 4;

// CsvBookRepository keeps the catalog in a comma delimited text file: a header line
// followed by one `id,title,author,available` line per book. Every save rewrites
// the whole file.
#[derive(Debug)]
pub struct CsvBookRepository {
    path: PathBuf,
}

impl CsvBookRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for CsvBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no data file at {}, starting with an empty catalog", self.path.display());
                return Ok(vec![]);
            }
            Err(err) => return Err(LibraryError::from(err)),
        };
        parse_books(text.as_str())
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(&self.path, format_books(entities)).await?;
        Ok(entities.len())
    }

    fn location(&self) -> String {
        if self.path.is_absolute() {
            return self.path.display().to_string();
        }
        env::current_dir()
            .map(|dir| dir.join(&self.path))
            .unwrap_or_else(|_| self.path.clone())
            .display().to_string()
    }
}

// Parses the file contents. The header line is discarded without validation and
// lines without exactly four fields are skipped, but a bad id fails the whole load.
pub(crate) fn parse_books(text: &str) -> LibraryResult<Vec<BookEntity>> {
    let mut books = vec![];
    for (ndx, line) in text.lines().enumerate().skip(1) {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            warn!("skipping line {} with {} fields", ndx + 1, fields.len());
            continue;
        }
        let book_id = parse_book_id(fields[0], ndx + 1)?;
        let available = fields[3].trim().eq_ignore_ascii_case("true");
        books.push(BookEntity::new(book_id, fields[1].trim(), fields[2].trim(), BookStatus::from(available)));
    }
    Ok(books)
}

fn parse_book_id(field: &str, line_no: usize) -> LibraryResult<BookId> {
    let book_id = field.trim().parse::<BookId>().map_err(|err| LibraryError::persistence(
        format!("invalid book id {:?} on line {}: {}", field.trim(), line_no, err).as_str(),
        Some("parse".to_string())))?;
    if book_id == 0 {
        return Err(LibraryError::persistence(
            format!("book id must be positive on line {}", line_no).as_str(), Some("parse".to_string())));
    }
    Ok(book_id)
}

pub(crate) fn format_books(books: &[BookEntity]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + books.len() * 48);
    out.push_str(HEADER);
    out.push('\n');
    for book in books {
        out.push_str(format!("{}{}{}{}{}{}{}\n",
                             book.book_id, DELIMITER,
                             sanitize(book.title.as_str()), DELIMITER,
                             sanitize(book.author.as_str()), DELIMITER,
                             book.book_status.is_available()).as_str());
    }
    out
}

// Delimiters and line breaks inside a field would change the field count on
// reload, so they are replaced with spaces. This is lossy.
pub(crate) fn sanitize(field: &str) -> String {
    field.replace(&[DELIMITER, '\n', '\r'][..], " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::csv_book_repository::{CsvBookRepository, format_books, parse_books, sanitize};
    use crate::core::library::{BookStatus, LibraryError};
    use crate::core::repository::Repository;

    fn sample_books() -> Vec<BookEntity> {
        vec![
            BookEntity::new(1, "Dune", "Frank Herbert", BookStatus::Available),
            BookEntity::new(4, "Foundation", "Isaac Asimov", BookStatus::Issued),
        ]
    }

    #[tokio::test]
    async fn test_should_load_empty_when_file_missing() {
        let dir = TempDir::new().expect("should create temp dir");
        let repo = CsvBookRepository::new(dir.path().join("missing.csv").as_path());
        let books = repo.load().await.expect("should load");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_save_and_load_books() {
        let dir = TempDir::new().expect("should create temp dir");
        let repo = CsvBookRepository::new(dir.path().join("books.csv").as_path());
        let saved = repo.save(&sample_books()).await.expect("should save");
        assert_eq!(2, saved);

        let loaded = repo.load().await.expect("should load");
        assert_eq!(sample_books(), loaded);
    }

    #[tokio::test]
    async fn test_should_create_missing_parent_directories() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("data").join("library").join("books.csv");
        let repo = CsvBookRepository::new(path.as_path());
        let _ = repo.save(&sample_books()).await.expect("should save");

        let text = std::fs::read_to_string(path).expect("should read file");
        assert_eq!("id,title,author,available\n1,Dune,Frank Herbert,true\n4,Foundation,Isaac Asimov,false\n", text);
    }

    #[tokio::test]
    async fn test_should_replace_delimiters_on_save() {
        let dir = TempDir::new().expect("should create temp dir");
        let repo = CsvBookRepository::new(dir.path().join("books.csv").as_path());
        let books = vec![BookEntity::new(1, " Dune, Messiah ", "Herbert,Frank", BookStatus::Available)];
        let _ = repo.save(&books).await.expect("should save");

        let loaded = repo.load().await.expect("should load");
        assert_eq!(1, loaded.len());
        assert_eq!("Dune  Messiah", loaded[0].title.as_str());
        assert_eq!("Herbert Frank", loaded[0].author.as_str());
    }

    #[tokio::test]
    async fn test_should_report_write_failure() {
        let dir = TempDir::new().expect("should create temp dir");
        // the data file path is an existing directory
        let repo = CsvBookRepository::new(dir.path());
        let res = repo.save(&sample_books()).await;
        assert!(matches!(res, Err(LibraryError::Persistence { .. })));
    }

    #[tokio::test]
    async fn test_should_skip_lines_with_wrong_field_count() {
        let text = "id,title,author,available\n1,Dune,Herbert,true\n2,Too,Many,Fields,true\n\n3,Hyperion,Simmons,FALSE\n4,Short\n";
        let books = parse_books(text).expect("should parse");
        assert_eq!(2, books.len());
        assert_eq!(1, books[0].book_id);
        assert_eq!(3, books[1].book_id);
        assert_eq!(BookStatus::Issued, books[1].book_status);
    }

    #[tokio::test]
    async fn test_should_fail_whole_load_on_bad_id() {
        let text = "id,title,author,available\n1,Dune,Herbert,true\nabc,Foundation,Asimov,true\n";
        let res = parse_books(text);
        assert!(matches!(res, Err(LibraryError::Persistence { .. })));

        let res = parse_books("id,title,author,available\n0,Dune,Herbert,true\n");
        assert!(matches!(res, Err(LibraryError::Persistence { .. })));
    }

    #[tokio::test]
    async fn test_should_parse_availability_tokens() {
        let text = "header is not validated\n 1 , Dune , Herbert , TRUE \n2,Emma,Austen,yes\n3,Ubik,Dick,True\r\n";
        let books = parse_books(text).expect("should parse");
        assert_eq!(3, books.len());
        assert_eq!("Dune", books[0].title.as_str());
        assert_eq!(BookStatus::Available, books[0].book_status);
        assert_eq!(BookStatus::Issued, books[1].book_status);
        assert_eq!(BookStatus::Available, books[2].book_status);
    }

    #[tokio::test]
    async fn test_should_load_empty_file() {
        assert!(parse_books("").expect("should parse").is_empty());
        assert!(parse_books("id,title,author,available\n").expect("should parse").is_empty());
    }

    #[tokio::test]
    async fn test_should_sanitize_fields() {
        assert_eq!("a b", sanitize("a,b"));
        assert_eq!("line one  two", sanitize(" line one\r\ntwo,"));
        assert_eq!("id,title,author,available\n", format_books(&[]));
    }

    #[tokio::test]
    async fn test_should_report_absolute_location() {
        let repo = CsvBookRepository::new(Path::new("books.csv"));
        assert!(Path::new(repo.location().as_str()).is_absolute());
        assert!(repo.location().ends_with("books.csv"));
    }
}
