use kernel::interface::query::CategoryBookCount;
use kernel::prelude::entity::{Category, DestructCategory, SelectLimit, SelectOffset};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        let DestructCategory { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryBookCountDto {
    pub id: Uuid,
    pub name: String,
    pub book_count: i64,
}

impl From<CategoryBookCount> for CategoryBookCountDto {
    fn from(value: CategoryBookCount) -> Self {
        Self {
            id: value.category_id().as_ref().to_owned(),
            name: value.name().as_ref().to_owned(),
            book_count: *value.book_count(),
        }
    }
}

pub struct GetCategoryDto {
    pub id: Uuid,
}

pub struct GetAllCategoryDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateCategoryDto {
    pub name: String,
}

pub struct UpdateCategoryDto {
    pub id: Uuid,
    pub name: Option<String>,
}

pub struct DeleteCategoryDto {
    pub id: Uuid,
}
