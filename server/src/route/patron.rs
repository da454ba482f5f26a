use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreatePatronRequest, DeletePatronRequest, GetAllPatronRequest, GetPatronRequest,
    PatronBorrowsQuery, PatronTransformer, UpdatePatronRequest,
};
use crate::response::{BorrowPresenter, PatronPresenter, PatronResponse};
use application::service::{
    CreatePatronService, DeletePatronService, GetPatronBorrowsService, GetPatronService,
    UpdatePatronService,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait PatronRouter {
    fn route_patron(self) -> Self;
}

impl PatronRouter for Router<AppModule> {
    fn route_patron(self) -> Self {
        self.route(
            "/patrons",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetAllPatronRequest>| async move {
                    Controller::new(PatronTransformer, PatronPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.get_all_patrons(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreatePatronRequest>| async move {
                    Controller::new(PatronTransformer, PatronPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_patron(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/patrons/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(PatronTransformer, PatronPresenter)
                        .intake(GetPatronRequest::new(id))
                        .handle(|dto| async move { module.get_patron(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(PatronResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdatePatronRequest>| async move {
                    Controller::new(PatronTransformer, PatronPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.update_patron(dto).await })
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
                    Controller::new(PatronTransformer, PatronPresenter)
                        .intake(DeletePatronRequest::new(id))
                        .handle(|dto| async move { module.delete_patron(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/patrons/:id/borrows",
            get(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Query(query): Query<PatronBorrowsQuery>| async move {
                    Controller::new(PatronTransformer, BorrowPresenter)
                        .intake((id, query))
                        .handle(|dto| async move { module.get_patron_borrows(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
    }
}
