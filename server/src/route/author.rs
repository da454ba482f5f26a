use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    AuthorTransformer, CreateAuthorRequest, DeleteAuthorRequest, GetAllAuthorRequest,
    GetAuthorBooksRequest, GetAuthorRequest, UpdateAuthorRequest,
};
use crate::response::{AuthorPresenter, AuthorResponse, BookPresenter};
use application::service::{
    CreateAuthorService, DeleteAuthorService, GetAuthorService, GetBookService,
    UpdateAuthorService,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/authors",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetAllAuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.get_all_authors(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateAuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/authors/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(GetAuthorRequest::new(id))
                        .handle(|dto| async move { module.get_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(AuthorResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateAuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.update_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(|_| StatusCode::OK.into_response())
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(DeleteAuthorRequest::new(id))
                        .handle(|dto| async move { module.delete_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/authors/:id/books",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, BookPresenter)
                        .intake(GetAuthorBooksRequest::new(id))
                        .handle(|dto| async move { module.get_all_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
