//! In-memory book storage

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, CreateBook, UpdateBook},
};

/// Collection and id counter, always locked together
#[derive(Debug)]
struct BookStore {
    books: Vec<Book>,
    next_id: BookId,
}

impl Default for BookStore {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }
}

impl BookStore {
    fn position(&self, id: BookId) -> AppResult<usize> {
        self.books
            .iter()
            .position(|book| book.id == id)
            .ok_or(AppError::NotFound(id))
    }
}

/// Books repository. Clones share the same underlying store.
#[derive(Clone, Default)]
pub struct BooksRepository {
    store: Arc<RwLock<BookStore>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new book, assigning its id and creation date
    pub async fn create(&self, data: CreateBook) -> Book {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let book = Book::new(id, data, Utc::now());
        store.books.push(book.clone());
        book
    }

    /// List all books in insertion order
    pub async fn find_all(&self) -> Vec<Book> {
        self.store.read().await.books.clone()
    }

    /// Get book by ID
    pub async fn find_one(&self, id: BookId) -> AppResult<Book> {
        let store = self.store.read().await;
        let idx = store.position(id)?;
        Ok(store.books[idx].clone())
    }

    /// Apply a partial update to an existing book
    pub async fn update(&self, id: BookId, patch: UpdateBook) -> AppResult<Book> {
        let mut store = self.store.write().await;
        let idx = store.position(id)?;

        let merged = store.books[idx].merged(patch);
        store.books[idx] = merged.clone();
        Ok(merged)
    }

    /// Delete book permanently
    pub async fn remove(&self, id: BookId) -> AppResult<()> {
        let mut store = self.store.write().await;
        let idx = store.position(id)?;
        store.books.remove(idx);
        Ok(())
    }
}
