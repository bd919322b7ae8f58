use error_stack::Report;
use sqlx::PgConnection;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    AuthorId, AverageRating, Book, BookDraft, BookGenres, BookId, BookLink, BookTitle, GenreId,
    PublishedYear,
};
use kernel::{ErrorDetailAttachment, KernelError};

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn count_by_author_id(
        &self,
        con: &mut PostgresConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<i64, KernelError> {
        PgBookInternal::count_by_author_id(con, author_id).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        draft: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::create(con, draft).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author_id: i64,
    book_link: Option<String>,
    genres: Vec<i32>,
    average_rating: f64,
    published_year: i32,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            AuthorId::new(value.author_id),
            value.book_link.map(BookLink::new),
            BookGenres::new(value.genres.into_iter().map(GenreId::new)),
            AverageRating::new(value.average_rating),
            PublishedYear::new(value.published_year),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author_id, book_link, genres, average_rating, published_year
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author_id, book_link, genres, average_rating, published_year
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn count_by_author_id(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<i64, KernelError> {
        let (count,) = sqlx::query_as::<_, (i64,)>(
            // language=postgresql
            r#"
            SELECT COUNT(*)
            FROM books
            WHERE author_id = $1
            "#,
        )
        .bind(author_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(count)
    }

    async fn create(
        con: &mut PgConnection,
        draft: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            INSERT INTO books (title, author_id, book_link, genres, average_rating, published_year)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, author_id, book_link, genres, average_rating, published_year
            "#,
        )
        .bind(draft.title().as_ref())
        .bind(draft.author_id().as_ref())
        .bind(draft.book_link().as_ref().map(AsRef::<String>::as_ref))
        .bind(draft.genres().to_raw())
        .bind(draft.average_rating().as_ref())
        .bind(draft.published_year().as_ref())
        .fetch_one(con)
        .await
        .convert_error()
        .map_err(|report| missing_author(report, draft.author_id()))?;
        Ok(Book::from(row))
    }

    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author_id = $3, book_link = $4, genres = $5,
                average_rating = $6, published_year = $7
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.author_id().as_ref())
        .bind(book.book_link().as_ref().map(AsRef::<String>::as_ref))
        .bind(book.genres().to_raw())
        .bind(book.average_rating().as_ref())
        .bind(book.published_year().as_ref())
        .execute(con)
        .await
        .convert_error()
        .map_err(|report| missing_author(report, book.author_id()))?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

// The only foreign key on `books` is its author.
fn missing_author(report: Report<KernelError>, author_id: &AuthorId) -> Report<KernelError> {
    match *report.current_context() {
        KernelError::Conflict => report
            .change_context(KernelError::Validation)
            .attach_detail(format!("Author {} does not exist.", author_id.as_ref())),
        _ => report,
    }
}
