//! Books service

use crate::{
    error::AppResult,
    models::book::{Book, BookId, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.repository.books.create(data).await;
        tracing::info!(id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.repository.books.find_all().await;
        tracing::debug!("Listing {} books", books.len());
        Ok(books)
    }

    pub async fn get_by_id(&self, id: BookId) -> AppResult<Book> {
        tracing::debug!("Fetching book {}", id);
        self.repository
            .books
            .find_one(id)
            .await
            .inspect_err(|e| tracing::warn!("Get failed: {}", e))
    }

    pub async fn update(&self, id: BookId, data: UpdateBook) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .update(id, data)
            .await
            .inspect_err(|e| tracing::warn!("Update failed: {}", e))?;
        tracing::info!(id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: BookId) -> AppResult<()> {
        self.repository
            .books
            .remove(id)
            .await
            .inspect_err(|e| tracing::warn!("Delete failed: {}", e))?;
        tracing::info!(id, "Book deleted");
        Ok(())
    }
}
