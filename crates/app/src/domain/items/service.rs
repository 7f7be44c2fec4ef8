//! Items service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::items::{
        data::{ItemUpdate, NewItem},
        errors::ItemsServiceError,
        records::{ItemId, ItemRecord},
        repository::PgItemsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgItemsService {
    db: Db,
    repository: PgItemsRepository,
}

impl PgItemsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgItemsRepository::new(),
        }
    }
}

#[async_trait]
impl ItemsService for PgItemsService {
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_item(&self, item: ItemId) -> Result<ItemRecord, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self.repository.get_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_item(&mut tx, &item.name, item.price, item.amount, &item.image)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_item(
        &self,
        item: ItemId,
        update: ItemUpdate,
    ) -> Result<ItemRecord, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_item(&mut tx, item, update.amount, update.price)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn decrement_stock(
        &self,
        item: ItemId,
        quantity: u32,
    ) -> Result<ItemRecord, ItemsServiceError> {
        if quantity == 0 {
            return Err(ItemsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .decrement_item(&mut tx, item, quantity)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn increment_stock(&self, item: ItemId) -> Result<ItemRecord, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.increment_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_item(&self, item: ItemId) -> Result<(), ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_item(&mut tx, item).await?;

        if rows_affected == 0 {
            return Err(ItemsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Retrieves all items in catalog order.
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError>;

    /// Retrieve a single item.
    async fn get_item(&self, item: ItemId) -> Result<ItemRecord, ItemsServiceError>;

    /// Creates a new item.
    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError>;

    /// Replaces an item's stock count and price.
    async fn update_item(
        &self,
        item: ItemId,
        update: ItemUpdate,
    ) -> Result<ItemRecord, ItemsServiceError>;

    /// Removes `quantity` units from stock, flooring the stored amount at zero.
    async fn decrement_stock(
        &self,
        item: ItemId,
        quantity: u32,
    ) -> Result<ItemRecord, ItemsServiceError>;

    /// Adds a single unit to stock.
    async fn increment_stock(&self, item: ItemId) -> Result<ItemRecord, ItemsServiceError>;

    /// Deletes an item.
    async fn delete_item(&self, item: ItemId) -> Result<(), ItemsServiceError>;
}
