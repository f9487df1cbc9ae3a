use super::ResourceService;
use crate::clients::CustomerClient;
use crate::error::StoreError;
use crate::model::{Customer, CustomerId};
use async_trait::async_trait;

#[derive(Clone)]
pub struct CustomerService {
    customers: CustomerClient,
}

impl CustomerService {
    pub fn new(customers: CustomerClient) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl ResourceService for CustomerService {
    type Entity = Customer;
    type Client = CustomerClient;
    type View = Customer;

    const COLLECTION: &'static str = "customers";
    const ENTITY: &'static str = "Customer";

    fn client(&self) -> &CustomerClient {
        &self.customers
    }

    fn view_id(view: &Customer) -> CustomerId {
        view.id
    }

    async fn expand(&self, rows: Vec<Customer>) -> Result<Vec<Customer>, StoreError> {
        Ok(rows)
    }
}
