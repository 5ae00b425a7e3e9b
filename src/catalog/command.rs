pub mod add_book_cmd;
pub mod issue_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod return_book_cmd;
pub mod save_catalog_cmd;
pub mod search_books_cmd;
