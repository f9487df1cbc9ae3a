use super::ResourceService;
use crate::clients::ProductClient;
use crate::error::StoreError;
use crate::model::{Product, ProductId};
use async_trait::async_trait;

#[derive(Clone)]
pub struct ProductService {
    products: ProductClient,
}

impl ProductService {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ResourceService for ProductService {
    type Entity = Product;
    type Client = ProductClient;
    type View = Product;

    const COLLECTION: &'static str = "products";
    const ENTITY: &'static str = "Product";

    fn client(&self) -> &ProductClient {
        &self.products
    }

    fn view_id(view: &Product) -> ProductId {
        view.id
    }

    async fn expand(&self, rows: Vec<Product>) -> Result<Vec<Product>, StoreError> {
        Ok(rows)
    }
}
