use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn status(&self) -> BookStatus;

    fn is_available(&self) -> bool {
        self.status().is_available()
    }

    // case-insensitive substring match against title or author
    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title().to_lowercase().contains(query.as_str())
            || self.author().to_lowercase().contains(query.as_str())
    }
}
