use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{Author, AuthorId};
use kernel::KernelError;

use crate::transfer::{AuthorDto, CreateAuthorDto, DeleteAuthorDto, GetAuthorDto, UpdateAuthorDto};
use crate::validation;

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    async fn get_all_authors(&self) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let authors = self.author_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }

    async fn get_author(&self, dto: GetAuthorDto) -> error_stack::Result<AuthorDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = AuthorId::new(dto.id);
        let author = self.author_query().find_by_id(&mut connection, &id).await?;
        connection.commit().await?;

        author
            .map(AuthorDto::from)
            .ok_or_else(|| author_not_found(&id))
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait HandleAuthorService:
    'static + Sync + Send + DependOnAuthorQuery + DependOnAuthorModifier + DependOnBookQuery
{
    async fn create_author(
        &self,
        dto: CreateAuthorDto,
    ) -> error_stack::Result<AuthorDto, KernelError> {
        let name = validation::author_name(&dto.name)?;

        let mut connection = self.database_connection().transact().await?;
        let author = self.author_modifier().create(&mut connection, &name).await?;
        connection.commit().await?;

        Ok(AuthorDto::from(author))
    }

    async fn update_author(
        &self,
        dto: UpdateAuthorDto,
    ) -> error_stack::Result<AuthorDto, KernelError> {
        let name = validation::author_name(&dto.name)?;
        let id = AuthorId::new(dto.id);

        let mut connection = self.database_connection().transact().await?;
        if self
            .author_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            connection.roll_back().await?;
            return Err(author_not_found(&id));
        }

        let author = Author::new(id, name);
        self.author_modifier()
            .update(&mut connection, &author)
            .await?;
        connection.commit().await?;

        Ok(AuthorDto::from(author))
    }

    async fn delete_author(
        &self,
        dto: DeleteAuthorDto,
    ) -> error_stack::Result<AuthorDto, KernelError> {
        let id = AuthorId::new(dto.id);

        let mut connection = self.database_connection().transact().await?;
        let Some(author) = self.author_query().find_by_id(&mut connection, &id).await? else {
            connection.roll_back().await?;
            return Err(author_not_found(&id));
        };

        let referencing = self
            .book_query()
            .count_by_author_id(&mut connection, &id)
            .await?;
        if referencing > 0 {
            connection.roll_back().await?;
            return Err(KernelError::Conflict.with_detail(format!(
                "Author {} is referenced by {} book(s); delete or reassign them first.",
                id.as_ref(),
                referencing
            )));
        }

        self.author_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(AuthorDto::from(author))
    }
}

impl<T> HandleAuthorService for T where
    T: DependOnAuthorQuery + DependOnAuthorModifier + DependOnBookQuery
{
}

fn author_not_found(id: &AuthorId) -> error_stack::Report<KernelError> {
    KernelError::NotFound.with_detail(format!("Author {} not found.", id.as_ref()))
}
