use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ShellMessage};
use crate::core::domain::BookId;
use crate::core::library::{LibraryError, LibraryResult};

const TABLE_HEADER: &str = "ID   | Title                          | Author               | Status";
const TABLE_RULE: &str = "-----+--------------------------------+----------------------+--------";
const INVALID_BOOK_ID: &str = "Invalid Book ID.";

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum MenuChoice {
    AddBook,
    ListBooks,
    SearchBooks,
    IssueBook,
    ReturnBook,
    RemoveBook,
    SaveAndExit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(MenuChoice::AddBook),
            2 => Ok(MenuChoice::ListBooks),
            3 => Ok(MenuChoice::SearchBooks),
            4 => Ok(MenuChoice::IssueBook),
            5 => Ok(MenuChoice::ReturnBook),
            6 => Ok(MenuChoice::RemoveBook),
            7 => Ok(MenuChoice::SaveAndExit),
            other => Err(other),
        }
    }
}

/// Interactive menu around the catalog. The shell owns the input and output
/// handles; the catalog service never touches the terminal.
///
/// Reaching the end of input ends the session without saving.
pub(crate) struct CatalogShell<R, W> {
    library_name: String,
    catalog_service: Box<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R, W> CatalogShell<R, W>
    where R: AsyncBufRead + Unpin + Send, W: AsyncWrite + Unpin + Send {
    pub(crate) fn new(state: &AppState, input: R, output: W) -> Self {
        Self::with_service(state, factory::create_catalog_service(&state.config, state.store), input, output)
    }

    pub(crate) fn with_service(state: &AppState, catalog_service: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            library_name: state.config.library_name.to_string(),
            catalog_service,
            input,
            output,
        }
    }

    pub(crate) fn into_output(self) -> W {
        self.output
    }

    // loads the persisted catalog, a failure is reported and the session starts empty
    pub(crate) async fn start(&mut self) -> LibraryResult<()> {
        match self.catalog_service.load().await {
            Ok(0) => Ok(()),
            Ok(loaded) => self.println(format!("Loaded {} book(s) from file.", loaded).as_str()).await,
            Err(err) => self.println(
                format!("Error loading data. Starting fresh. Details: {}", err.message()).as_str()).await,
        }
    }

    pub(crate) async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.print_menu().await?;
            let Some(raw) = self.read_line().await? else {
                return Ok(());
            };
            let choice = match raw.parse::<i64>() {
                Ok(choice) => choice,
                Err(_) => {
                    self.println("Please enter a valid number (1-7).").await?;
                    continue;
                }
            };
            let keep_running = match MenuChoice::try_from(choice) {
                Ok(MenuChoice::AddBook) => self.add_book().await?,
                Ok(MenuChoice::ListBooks) => self.list_books().await?,
                Ok(MenuChoice::SearchBooks) => self.search_books().await?,
                Ok(MenuChoice::IssueBook) => self.issue_book().await?,
                Ok(MenuChoice::ReturnBook) => self.return_book().await?,
                Ok(MenuChoice::RemoveBook) => self.remove_book().await?,
                Ok(MenuChoice::SaveAndExit) => {
                    // a failed save keeps the session alive so the user can retry
                    if self.save().await? {
                        self.println("Exiting... Thank you for using the Library Management System!").await?;
                        false
                    } else {
                        true
                    }
                }
                Err(_) => {
                    self.println("Please choose a valid option between 1 and 7.").await?;
                    true
                }
            };
            if !keep_running {
                return Ok(());
            }
        }
    }

    async fn print_menu(&mut self) -> LibraryResult<()> {
        let menu = format!("\n=====================================\n   {}\n=====================================\n\
            1. Add Book\n2. View All Books\n3. Search Book (title/author)\n4. Issue Book\n\
            5. Return Book\n6. Remove Book\n7. Save & Exit\n", self.library_name);
        self.print(menu.as_str()).await?;
        self.print("\nEnter your choice (1-7): ").await
    }

    async fn add_book(&mut self) -> LibraryResult<bool> {
        self.println("\nAdd a New Book").await?;
        self.print("   Title: ").await?;
        let Some(title) = self.read_non_empty().await? else {
            return Ok(false);
        };
        self.print("   Author: ").await?;
        let Some(author) = self.read_non_empty().await? else {
            return Ok(false);
        };
        let res = AddBookCommand::new(self.catalog_service.as_mut())
            .execute(AddBookCommandRequest::new(title.as_str(), author.as_str())).await;
        let message = match res {
            Ok(res) => format!("Book added with ID: {}", res.book.book_id),
            Err(err) => ShellMessage::from(err),
        };
        self.println(message.as_str()).await?;
        Ok(true)
    }

    async fn list_books(&mut self) -> LibraryResult<bool> {
        self.println("\nAll Books in Library:").await?;
        let res = ListBooksCommand::new(self.catalog_service.as_ref())
            .execute(ListBooksCommandRequest::new()).await;
        match res {
            Ok(res) => match res.books {
                Some(books) => self.print_table(&books).await?,
                None => self.println("No books in library yet.").await?,
            },
            Err(err) => self.println(ShellMessage::from(err).as_str()).await?,
        }
        Ok(true)
    }

    async fn search_books(&mut self) -> LibraryResult<bool> {
        self.print("\nEnter search text: ").await?;
        let Some(query) = self.read_line().await? else {
            return Ok(false);
        };
        let res = SearchBooksCommand::new(self.catalog_service.as_ref())
            .execute(SearchBooksCommandRequest::new(query.as_str())).await;
        match res {
            Ok(res) if res.books.is_empty() => self.println("No matching books found.").await?,
            Ok(res) => {
                self.println("\nSearch results:").await?;
                self.print_table(&res.books).await?;
            }
            Err(err) => self.println(ShellMessage::from(err).as_str()).await?,
        }
        Ok(true)
    }

    async fn issue_book(&mut self) -> LibraryResult<bool> {
        let Some(book_id) = self.read_id("\nEnter Book ID to issue: ").await? else {
            return Ok(false);
        };
        let res = IssueBookCommand::new(self.catalog_service.as_mut())
            .execute(IssueBookCommandRequest::new(book_id)).await;
        let message = match res {
            Ok(res) => format!("Issued: {}", res.book.title),
            Err(CommandError::NotFound { .. }) => INVALID_BOOK_ID.to_string(),
            Err(err) => ShellMessage::from(err),
        };
        self.println(message.as_str()).await?;
        Ok(true)
    }

    async fn return_book(&mut self) -> LibraryResult<bool> {
        let Some(book_id) = self.read_id("\nEnter Book ID to return: ").await? else {
            return Ok(false);
        };
        let res = ReturnBookCommand::new(self.catalog_service.as_mut())
            .execute(ReturnBookCommandRequest::new(book_id)).await;
        let message = match res {
            Ok(res) => format!("Returned: {}", res.book.title),
            Err(CommandError::NotFound { .. }) => INVALID_BOOK_ID.to_string(),
            Err(err) => ShellMessage::from(err),
        };
        self.println(message.as_str()).await?;
        Ok(true)
    }

    async fn remove_book(&mut self) -> LibraryResult<bool> {
        let Some(book_id) = self.read_id("\nEnter Book ID to remove: ").await? else {
            return Ok(false);
        };
        let res = RemoveBookCommand::new(self.catalog_service.as_mut())
            .execute(RemoveBookCommandRequest::new(book_id)).await;
        let message = match res {
            Ok(res) => format!("Removed: {}", res.book.title),
            Err(err) => ShellMessage::from(err),
        };
        self.println(message.as_str()).await?;
        Ok(true)
    }

    // true once the catalog is on disk
    async fn save(&mut self) -> LibraryResult<bool> {
        let res = SaveCatalogCommand::new(self.catalog_service.as_ref())
            .execute(SaveCatalogCommandRequest::new()).await;
        let (message, saved) = match res {
            Ok(res) => (format!("Saved to {}", res.location), true),
            Err(err) => (ShellMessage::from(err), false),
        };
        self.println(message.as_str()).await?;
        Ok(saved)
    }

    async fn print_table(&mut self, books: &[BookDto]) -> LibraryResult<()> {
        let mut table = format!("{}\n{}\n", TABLE_HEADER, TABLE_RULE);
        for book in books {
            table.push_str(format!("{}\n", book).as_str());
        }
        self.print(table.as_str()).await
    }

    async fn read_non_empty(&mut self) -> LibraryResult<Option<String>> {
        loop {
            match self.read_line().await? {
                Some(line) if line.is_empty() => self.print("Input cannot be empty. Try again: ").await?,
                other => return Ok(other),
            }
        }
    }

    async fn read_id(&mut self, prompt: &str) -> LibraryResult<Option<BookId>> {
        loop {
            self.print(prompt).await?;
            let Some(raw) = self.read_line().await? else {
                return Ok(None);
            };
            // 0 is never assigned, so negative or oversized ids fail the lookup
            match raw.parse::<i64>() {
                Ok(book_id) => return Ok(Some(BookId::try_from(book_id).unwrap_or(0))),
                Err(_) => self.println("Not a number. Try again.").await?,
            }
        }
    }

    // next trimmed input line, None once the input is exhausted
    async fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).await.map_err(terminal_error)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn print(&mut self, text: &str) -> LibraryResult<()> {
        self.output.write_all(text.as_bytes()).await.map_err(terminal_error)?;
        self.output.flush().await.map_err(terminal_error)
    }

    async fn println(&mut self, text: &str) -> LibraryResult<()> {
        self.print(format!("{}\n", text).as_str()).await
    }
}

fn terminal_error(err: std::io::Error) -> LibraryError {
    LibraryError::runtime(format!("terminal i/o failed: {}", err).as_str(), Some(format!("{:?}", err.kind())))
}
