use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookDetailsTransformer, CreateBookDetailsRequest, DeleteBookDetailsRequest,
    GetAllBookDetailsRequest, GetBookDetailsRequest, UpdateBookDetailsRequest,
};
use crate::response::{BookDetailsPresenter, BookDetailsResponse};
use application::service::{
    CreateBookDetailsService, DeleteBookDetailsService, GetBookDetailsService,
    UpdateBookDetailsService,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait BookDetailsRouter {
    fn route_book_details(self) -> Self;
}

impl BookDetailsRouter for Router<AppModule> {
    fn route_book_details(self) -> Self {
        self.route(
            "/book-details",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetAllBookDetailsRequest>| async move {
                    Controller::new(BookDetailsTransformer, BookDetailsPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.get_all_book_details(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreateBookDetailsRequest>| async move {
                    Controller::new(BookDetailsTransformer, BookDetailsPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_book_details(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/book-details/:book_id",
            get(
                |State(module): State<AppModule>, Path(book_id): Path<Uuid>| async move {
                    Controller::new(BookDetailsTransformer, BookDetailsPresenter)
                        .intake(GetBookDetailsRequest::new(book_id))
                        .handle(|dto| async move { module.get_book_details(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(BookDetailsResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(book_id): Path<Uuid>,
                 Json(req): Json<UpdateBookDetailsRequest>| async move {
                    Controller::new(BookDetailsTransformer, BookDetailsPresenter)
                        .intake((book_id, req))
                        .handle(|dto| async move { module.update_book_details(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(|_| StatusCode::OK.into_response())
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(book_id): Path<Uuid>| async move {
                    Controller::new(BookDetailsTransformer, BookDetailsPresenter)
                        .intake(DeleteBookDetailsRequest::new(book_id))
                        .handle(|dto| async move { module.delete_book_details(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
