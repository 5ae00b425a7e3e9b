use crate::books::repository::BookRepository;
use crate::books::repository::csv_book_repository::CsvBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::CsvFile => {
            Box::new(CsvBookRepository::new(config.data_file.as_path()))
        }
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}
