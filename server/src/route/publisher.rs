use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreatePublisherRequest, DeletePublisherRequest, GetAllPublisherRequest,
    GetPublisherBooksRequest, GetPublisherRequest, PublisherTransformer, UpdatePublisherRequest,
};
use crate::response::{BookPresenter, PublisherPresenter, PublisherResponse};
use application::service::{
    CreatePublisherService, DeletePublisherService, GetBookService, GetPublisherService,
    UpdatePublisherService,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait PublisherRouter {
    fn route_publisher(self) -> Self;
}

impl PublisherRouter for Router<AppModule> {
    fn route_publisher(self) -> Self {
        self.route(
            "/publishers",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetAllPublisherRequest>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.get_all_publishers(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreatePublisherRequest>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_publisher(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/publishers/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .intake(GetPublisherRequest::new(id))
                        .handle(|dto| async move { module.get_publisher(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(PublisherResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdatePublisherRequest>| async move {
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.update_publisher(dto).await })
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
                    Controller::new(PublisherTransformer, PublisherPresenter)
                        .intake(DeletePublisherRequest::new(id))
                        .handle(|dto| async move { module.delete_publisher(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/publishers/:id/books",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(PublisherTransformer, BookPresenter)
                        .intake(GetPublisherBooksRequest::new(id))
                        .handle(|dto| async move { module.get_all_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
