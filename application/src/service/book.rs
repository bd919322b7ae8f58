use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{AuthorId, Book, BookId, PublishedYear};
use kernel::KernelError;

use crate::transfer::{BookDto, BookFieldsDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use crate::validation;

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self.book_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;
        connection.commit().await?;

        book.map(BookDto::from).ok_or_else(|| book_not_found(&id))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait HandleBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier + DependOnAuthorQuery
{
    async fn create_book(&self, dto: BookFieldsDto) -> error_stack::Result<BookDto, KernelError> {
        let draft = validation::book_draft(dto, &PublishedYear::current())?;

        let mut connection = self.database_connection().transact().await?;
        if !author_exists(self.author_query(), &mut connection, draft.author_id()).await? {
            connection.roll_back().await?;
            return Err(unknown_author(draft.author_id()));
        }
        let book = self.book_modifier().create(&mut connection, &draft).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }

    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let draft = validation::book_draft(dto.fields, &PublishedYear::current())?;
        let id = BookId::new(dto.id);

        let mut connection = self.database_connection().transact().await?;
        if self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            connection.roll_back().await?;
            return Err(book_not_found(&id));
        }
        if !author_exists(self.author_query(), &mut connection, draft.author_id()).await? {
            connection.roll_back().await?;
            return Err(unknown_author(draft.author_id()));
        }

        let book = Book::from_draft(id, draft);
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }

    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<BookDto, KernelError> {
        let id = BookId::new(dto.id);

        let mut connection = self.database_connection().transact().await?;
        let Some(book) = self.book_query().find_by_id(&mut connection, &id).await? else {
            connection.roll_back().await?;
            return Err(book_not_found(&id));
        };
        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<T> HandleBookService for T where
    T: DependOnBookQuery + DependOnBookModifier + DependOnAuthorQuery
{
}

async fn author_exists<Q: AuthorQuery>(
    query: &Q,
    connection: &mut Q::Transaction,
    id: &AuthorId,
) -> error_stack::Result<bool, KernelError> {
    Ok(query.find_by_id(connection, id).await?.is_some())
}

fn book_not_found(id: &BookId) -> error_stack::Report<KernelError> {
    KernelError::NotFound.with_detail(format!("Book {} not found.", id.as_ref()))
}

fn unknown_author(id: &AuthorId) -> error_stack::Report<KernelError> {
    KernelError::Validation.with_detail(format!("Author {} does not exist.", id.as_ref()))
}
