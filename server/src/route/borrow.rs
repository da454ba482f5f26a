use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BorrowTransformer, CreateBorrowRequest, DeleteBorrowRequest, ExtendDueDateRequest,
    GetAllBorrowRequest, GetBorrowRequest, ReturnBookRequest, UpdateBorrowRequest,
};
use crate::response::{BorrowPresenter, BorrowResponse};
use application::service::{
    BorrowStatsService, CreateBorrowService, DeleteBorrowService, ExtendDueDateService,
    GetBorrowService, ReturnBookService, UpdateBorrowService,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

pub trait BorrowRouter {
    fn route_borrow(self) -> Self;
}

impl BorrowRouter for Router<AppModule> {
    fn route_borrow(self) -> Self {
        self.route(
            "/borrows",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetAllBorrowRequest>| async move {
                    Controller::new(BorrowTransformer, BorrowPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.get_borrows(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateBorrowRequest>| async move {
                    Controller::new(BorrowTransformer, BorrowPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_borrow(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/borrows/stats/status",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BorrowPresenter)
                    .bypass(|| async move { module.get_status_stats().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/borrows/stats/patrons",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BorrowPresenter)
                    .bypass(|| async move { module.get_patron_stats().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/borrows/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(BorrowTransformer, BorrowPresenter)
                        .intake(GetBorrowRequest::new(id))
                        .handle(|dto| async move { module.get_borrow(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(BorrowResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateBorrowRequest>| async move {
                    Controller::new(BorrowTransformer, BorrowPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.update_borrow(dto).await })
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
                    Controller::new(BorrowTransformer, BorrowPresenter)
                        .intake(DeleteBorrowRequest::new(id))
                        .handle(|dto| async move { module.delete_borrow(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/borrows/:id/return",
            post(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(BorrowTransformer, BorrowPresenter)
                        .intake(ReturnBookRequest::new(id))
                        .handle(|dto| async move { module.return_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(BorrowResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
        .route(
            "/borrows/:id/extend",
            post(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 req: Option<Json<ExtendDueDateRequest>>| async move {
                    Controller::new(BorrowTransformer, BorrowPresenter)
                        .intake((id, req.map(|Json(req)| req)))
                        .handle(|dto| async move { module.extend_due_date(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(BorrowResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
    }
}
