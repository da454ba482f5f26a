use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CategoryTransformer, CreateCategoryRequest, DeleteCategoryRequest, GetAllCategoryRequest,
    GetCategoryRequest, UpdateCategoryRequest,
};
use crate::response::{CategoryPresenter, CategoryResponse};
use application::service::{
    CreateCategoryService, DeleteCategoryService, GetCategoryService, UpdateCategoryService,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait CategoryRouter {
    fn route_category(self) -> Self;
}

impl CategoryRouter for Router<AppModule> {
    fn route_category(self) -> Self {
        self.route(
            "/categories",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<GetAllCategoryRequest>| async move {
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.get_all_categories(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreateCategoryRequest>| async move {
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_category(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/categories/stats",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), CategoryPresenter)
                    .bypass(|| async move { module.get_category_stats().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/categories/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .intake(GetCategoryRequest::new(id))
                        .handle(|dto| async move { module.get_category(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(CategoryResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateCategoryRequest>| async move {
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.update_category(dto).await })
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
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .intake(DeleteCategoryRequest::new(id))
                        .handle(|dto| async move { module.delete_category(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
