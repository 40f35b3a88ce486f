use crate::{
    abstract_trait::DynCashierRepository,
    domain::{requests::FindAllCashiers, response::CashierResponse},
    errors::ServiceError,
};

/// Read-only cashier surface. Creation goes through the register flow in
/// the auth service.
pub struct CashierService {
    cashiers: DynCashierRepository,
}

impl CashierService {
    pub fn new(cashiers: DynCashierRepository) -> Self {
        Self { cashiers }
    }

    pub async fn find_all(
        &self,
        req: &FindAllCashiers,
    ) -> Result<Vec<CashierResponse>, ServiceError> {
        let cashiers = self.cashiers.find_all(req).await?;
        Ok(cashiers.into_iter().map(CashierResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<CashierResponse, ServiceError> {
        let cashier = self
            .cashiers
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Cashier '{id}' not found")))?;

        Ok(CashierResponse::from(cashier))
    }
}
