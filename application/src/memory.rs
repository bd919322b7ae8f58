use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::update::{
    AuthorModifier, BookModifier, DependOnAuthorModifier, DependOnBookModifier,
};
use kernel::prelude::entity::{Author, AuthorId, AuthorName, Book, BookDraft, BookId};
use kernel::KernelError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub authors: BTreeMap<i64, Author>,
    pub books: BTreeMap<i64, Book>,
    last_author_id: i64,
    last_book_id: i64,
}

#[derive(Clone, Default)]
pub struct MemoryDatabase {
    committed: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
    pub fn snapshot(&self) -> Tables {
        self.committed.lock().unwrap().clone()
    }
}

pub struct MemoryTransaction {
    staged: Tables,
    committed: Arc<Mutex<Tables>>,
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *self.committed.lock().unwrap() = self.staged;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(MemoryTransaction {
            staged: self.snapshot(),
            committed: Arc::clone(&self.committed),
        })
    }
}

pub struct MemoryAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for MemoryAuthorRepository {
    type Transaction = MemoryTransaction;

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        Ok(con.staged.authors.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        Ok(con.staged.authors.get(id.as_ref()).cloned())
    }
}

#[async_trait::async_trait]
impl AuthorModifier for MemoryAuthorRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        name: &AuthorName,
    ) -> error_stack::Result<Author, KernelError> {
        con.staged.last_author_id += 1;
        let id = con.staged.last_author_id;
        let author = Author::new(AuthorId::new(id), name.clone());
        con.staged.authors.insert(id, author.clone());
        Ok(author)
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        con.staged
            .authors
            .insert(*author.id().as_ref(), author.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        if con
            .staged
            .books
            .values()
            .any(|book| book.author_id() == author_id)
        {
            return Err(KernelError::Conflict.with_detail("books still reference this author"));
        }
        con.staged.authors.remove(author_id.as_ref());
        Ok(())
    }
}

pub struct MemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for MemoryBookRepository {
    type Transaction = MemoryTransaction;

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.staged.books.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.staged.books.get(id.as_ref()).cloned())
    }

    async fn count_by_author_id(
        &self,
        con: &mut MemoryTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<i64, KernelError> {
        let count = con
            .staged
            .books
            .values()
            .filter(|book| book.author_id() == author_id)
            .count();
        Ok(count as i64)
    }
}

#[async_trait::async_trait]
impl BookModifier for MemoryBookRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        draft: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        con.staged.last_book_id += 1;
        let id = con.staged.last_book_id;
        let book = Book::from_draft(BookId::new(id), draft.clone());
        con.staged.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.staged.books.insert(*book.id().as_ref(), book.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        con.staged.books.remove(book_id.as_ref());
        Ok(())
    }
}

impl DependOnAuthorQuery for MemoryDatabase {
    type AuthorQuery = MemoryAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &MemoryAuthorRepository
    }
}

impl DependOnAuthorModifier for MemoryDatabase {
    type AuthorModifier = MemoryAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &MemoryAuthorRepository
    }
}

impl DependOnBookQuery for MemoryDatabase {
    type BookQuery = MemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MemoryBookRepository
    }
}

impl DependOnBookModifier for MemoryDatabase {
    type BookModifier = MemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MemoryBookRepository
    }
}
