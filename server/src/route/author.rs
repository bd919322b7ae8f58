use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    AuthorTransformer, CreateAuthorRequest, DeleteAuthorRequest, GetAuthorRequest, IdPath,
    JsonBody, UpdateAuthorRequest,
};
use crate::response::AuthorPresenter;
use application::service::{GetAuthorService, HandleAuthorService};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/authors/",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), AuthorPresenter)
                    .bypass(|| async move { module.pgpool().get_all_authors().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): JsonBody<CreateAuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.pgpool().create_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/authors/:id",
            get(
                |State(module): State<AppModule>, WithRejection(Path(id), _): IdPath| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(GetAuthorRequest::new(id))
                        .handle(|dto| async move { module.pgpool().get_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): IdPath,
                 WithRejection(Json(req), _): JsonBody<UpdateAuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.pgpool().update_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, WithRejection(Path(id), _): IdPath| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(DeleteAuthorRequest::new(id))
                        .handle(|dto| async move { module.pgpool().delete_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
