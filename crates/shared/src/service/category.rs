use crate::{
    abstract_trait::DynCategoryRepository,
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        response::CategoryResponse,
    },
    errors::{RepositoryError, ServiceError},
};

pub struct CategoryService {
    categories: DynCategoryRepository,
}

impl CategoryService {
    pub fn new(categories: DynCategoryRepository) -> Self {
        Self { categories }
    }

    pub async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<Vec<CategoryResponse>, ServiceError> {
        let categories = self.categories.find_all(req).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<CategoryResponse, ServiceError> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category '{id}' not found")))?;

        Ok(CategoryResponse::from(category))
    }

    pub async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        let category = self.categories.create(req).await.map_err(|err| {
            if matches!(err, RepositoryError::AlreadyExists(_)) {
                ServiceError::Conflict(format!("Category '{}' already exists", req.id))
            } else {
                ServiceError::from(err)
            }
        })?;

        Ok(CategoryResponse::from(category))
    }

    pub async fn update(
        &self,
        id: &str,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        let category = self.categories.update(id, req).await.map_err(|err| {
            if matches!(err, RepositoryError::NotFound) {
                ServiceError::NotFound(format!("Category '{id}' not found"))
            } else {
                ServiceError::from(err)
            }
        })?;

        Ok(CategoryResponse::from(category))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.categories.delete(id).await.map_err(|err| {
            if matches!(err, RepositoryError::NotFound) {
                ServiceError::NotFound(format!("Category '{id}' not found"))
            } else {
                ServiceError::from(err)
            }
        })
    }
}
