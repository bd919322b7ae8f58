use sqlx::{Pool, Postgres};

use kernel::KernelError;

use crate::error::ConvertError;

pub(in crate::database) async fn create_tables(
    pool: &Pool<Postgres>,
) -> error_stack::Result<(), KernelError> {
    // language=postgresql
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id   BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .convert_error()?;

    // language=postgresql
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id             BIGSERIAL PRIMARY KEY,
            title          TEXT NOT NULL,
            author_id      BIGINT NOT NULL REFERENCES authors (id) ON DELETE RESTRICT,
            book_link      TEXT,
            genres         INTEGER[] NOT NULL,
            average_rating DOUBLE PRECISION NOT NULL,
            published_year INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .convert_error()?;

    tracing::info!("catalog tables are ready");
    Ok(())
}
