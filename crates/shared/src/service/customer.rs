use crate::{
    abstract_trait::DynCustomerRepository,
    domain::{
        requests::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest},
        response::CustomerResponse,
    },
    errors::{RepositoryError, ServiceError},
};

pub struct CustomerService {
    customers: DynCustomerRepository,
}

impl CustomerService {
    pub fn new(customers: DynCustomerRepository) -> Self {
        Self { customers }
    }

    pub async fn find_all(
        &self,
        req: &FindAllCustomers,
    ) -> Result<Vec<CustomerResponse>, ServiceError> {
        let customers = self.customers.find_all(req).await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<CustomerResponse, ServiceError> {
        let customer = self
            .customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Customer '{id}' not found")))?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn create(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerResponse, ServiceError> {
        let customer = self.customers.create(req).await.map_err(|err| {
            if matches!(err, RepositoryError::AlreadyExists(_)) {
                ServiceError::Conflict(format!("Customer '{}' already exists", req.id))
            } else {
                ServiceError::from(err)
            }
        })?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn update(
        &self,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<CustomerResponse, ServiceError> {
        let customer = self.customers.update(id, req).await.map_err(|err| {
            if matches!(err, RepositoryError::NotFound) {
                ServiceError::NotFound(format!("Customer '{id}' not found"))
            } else {
                ServiceError::from(err)
            }
        })?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.customers.delete(id).await.map_err(|err| {
            if matches!(err, RepositoryError::NotFound) {
                ServiceError::NotFound(format!("Customer '{id}' not found"))
            } else {
                ServiceError::from(err)
            }
        })
    }
}
