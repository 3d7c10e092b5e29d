use std::time::Duration;

use log::{debug, error, info, trace};

use crate::{
    Config, InventoryError, Item, ItemFields, KeyValueStore, Result, DEFAULT_LATENCY_MS,
    DEFAULT_STORAGE_KEY,
};

/// Options controlling how an `ItemStore` persists and behaves.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOptions {
    /// Key the whole collection is stored under
    pub storage_key: String,

    /// Delay applied before every operation
    pub latency: Duration,

    /// Whether to write the demo items into an empty storage area
    pub seed_demo_data: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            seed_demo_data: true,
        }
    }
}

impl StoreOptions {
    /// Defaults with no artificial latency
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl From<&Config> for StoreOptions {
    fn from(config: &Config) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            latency: config.latency(),
            seed_demo_data: config.seed_demo_data,
        }
    }
}

/// Owns the persisted item collection and exposes CRUD over it.
///
/// Every operation reads the whole collection from the backend, computes the
/// next state and writes the whole collection back. There is no locking
/// between the read and the write, so two operations issued concurrently
/// against the same storage area are last-write-wins at snapshot level.
pub struct ItemStore<S> {
    /// Storage area holding the snapshot
    backend: S,

    /// Key the snapshot is stored under
    storage_key: String,

    /// Delay applied before every operation
    latency: Duration,

    /// Whether `reset` re-seeds the demo items
    seed_demo_data: bool,
}

impl<S: KeyValueStore> ItemStore<S> {
    /// Creates a store over `backend`.
    ///
    /// If nothing is stored under the configured key yet, the demo items are
    /// written immediately (unless seeding is disabled). An existing
    /// collection, even an empty one, is left untouched.
    pub fn new(backend: S, options: StoreOptions) -> Result<Self> {
        let store = Self {
            backend,
            storage_key: options.storage_key,
            latency: options.latency,
            seed_demo_data: options.seed_demo_data,
        };

        store.initialize_items()?;
        Ok(store)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn initialize_items(&self) -> Result<()> {
        if self.backend.get_item(&self.storage_key)?.is_some() {
            debug!("Found existing collection under '{}'", self.storage_key);
            return Ok(());
        }

        if !self.seed_demo_data {
            debug!("Storage empty and seeding disabled");
            return Ok(());
        }

        let items = demo_items();
        info!("Seeding {} demo items under '{}'", items.len(), self.storage_key);
        self.save_items(&items)
    }

    /// Returns every item in stored order.
    pub async fn list_all(&self) -> Result<Vec<Item>> {
        self.simulate_latency().await;

        let items = self.load_items()?;
        debug!("Listed {} items", items.len());
        Ok(items)
    }

    /// Returns the item with `id`.
    pub async fn get_by_id(&self, id: &str) -> Result<Item> {
        self.simulate_latency().await;
        debug!("Retrieving item by ID: {}", id);

        self.load_items()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| {
                debug!("Item not found: {}", id);
                InventoryError::ItemNotFound { id: id.to_string() }
            })
    }

    /// Builds a new item from `fields` and appends it to the collection.
    pub async fn create(&self, fields: ItemFields) -> Result<Item> {
        self.simulate_latency().await;

        let new_item = Item::new(fields);
        let mut items = self.load_items()?;

        if items.iter().any(|item| item.id == new_item.id) {
            error!("Cannot create item {}: ID already in use", new_item.id);
            return Err(InventoryError::ItemAlreadyExists { id: new_item.id });
        }

        items.push(new_item.clone());
        self.save_items(&items)?;

        info!("Created item {} ({})", new_item.id, new_item.name);
        Ok(new_item)
    }

    /// Replaces the item at `id` with one built from `fields`.
    ///
    /// The stored id and creation time always win over anything in `fields`.
    pub async fn update(&self, id: &str, fields: ItemFields) -> Result<Item> {
        self.simulate_latency().await;

        let mut items = self.load_items()?;
        let Some(index) = items.iter().position(|item| item.id == id) else {
            error!("Cannot update item {}: Item not found", id);
            return Err(InventoryError::ItemNotFound { id: id.to_string() });
        };

        let updated_item = Item::new(ItemFields {
            id: Some(items[index].id.clone()),
            created_at: Some(items[index].created_at),
            ..fields
        });

        items[index] = updated_item.clone();
        self.save_items(&items)?;

        info!("Updated item {}", id);
        Ok(updated_item)
    }

    /// Removes the item with `id`. Returns `true` on success.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.simulate_latency().await;

        let items = self.load_items()?;
        let before = items.len();
        let remaining: Vec<Item> = items.into_iter().filter(|item| item.id != id).collect();

        if remaining.len() == before {
            error!("Cannot delete item {}: Item not found", id);
            return Err(InventoryError::ItemNotFound { id: id.to_string() });
        }

        self.save_items(&remaining)?;

        info!("Deleted item {}", id);
        Ok(true)
    }

    /// Drops the stored collection and seeds it again as on first run.
    pub async fn reset(&self) -> Result<()> {
        self.simulate_latency().await;

        info!("Resetting collection under '{}'", self.storage_key);
        self.backend.remove_item(&self.storage_key)?;
        self.initialize_items()
    }

    fn load_items(&self) -> Result<Vec<Item>> {
        let stored = self
            .backend
            .get_item(&self.storage_key)?
            .unwrap_or_else(|| "[]".to_string());

        trace!("Parsing {} bytes of stored items", stored.len());
        serde_json::from_str(&stored).map_err(|e| {
            error!("Stored collection under '{}' is corrupt: {}", self.storage_key, e);
            InventoryError::Parse(e)
        })
    }

    fn save_items(&self, items: &[Item]) -> Result<()> {
        trace!("Serializing {} items", items.len());
        let json = serde_json::to_string(items)?;
        self.backend.set_item(&self.storage_key, &json)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// Items written into an empty storage area on first run.
pub fn demo_items() -> Vec<Item> {
    [
        ("Laptop", "MacBook Pro 16-inch", "Electronics", 5, 2399.99),
        ("Coffee Mug", "Ceramic coffee mug with logo", "Kitchen", 20, 12.99),
        ("Wireless Mouse", "Ergonomic wireless mouse", "Electronics", 15, 29.99),
        ("Notebook", "Hardcover notebook, 200 pages", "Office Supplies", 50, 4.99),
    ]
    .into_iter()
    .map(|(name, description, category, quantity, price)| {
        Item::new(
            ItemFields::new()
                .name(name)
                .description(description)
                .category(category)
                .quantity(quantity)
                .price(price),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use crate::MemoryStorage;

    use super::*;

    fn store() -> ItemStore<MemoryStorage> {
        ItemStore::new(MemoryStorage::new(), StoreOptions::immediate()).unwrap()
    }

    #[tokio::test]
    async fn seeds_demo_items_into_empty_storage() {
        let items = store().list_all().await.unwrap();
        let categories: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(
            categories,
            ["Electronics", "Kitchen", "Electronics", "Office Supplies"]
        );
    }

    #[tokio::test]
    async fn existing_empty_collection_is_not_reseeded() {
        let storage = MemoryStorage::new();
        storage.set_item(DEFAULT_STORAGE_KEY, "[]").unwrap();

        let store = ItemStore::new(storage, StoreOptions::immediate()).unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeding_can_be_disabled() {
        let options = StoreOptions {
            seed_demo_data: false,
            ..StoreOptions::immediate()
        };
        let storage = MemoryStorage::new();
        let store = ItemStore::new(storage.clone(), options).unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
        assert_eq!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_supplied_id() {
        let store = store();
        let existing = store.list_all().await.unwrap().remove(0);

        let err = store
            .create(ItemFields::new().id(existing.id.clone()).name("Clone"))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::ItemAlreadyExists { .. }));
        assert_eq!(store.list_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn update_keeps_position() {
        let store = store();
        let second = store.list_all().await.unwrap().remove(1);

        store
            .update(&second.id, ItemFields::from(&second).quantity(1))
            .await
            .unwrap();

        let items = store.list_all().await.unwrap();
        assert_eq!(items[1].id, second.id);
        assert_eq!(items[1].quantity, 1);
    }

    #[tokio::test]
    async fn update_resets_omitted_fields_to_defaults() {
        let store = store();
        let first = store.list_all().await.unwrap().remove(0);

        let updated = store
            .update(&first.id, ItemFields::new().name("Renamed"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.description, "");
        assert_eq!(updated.quantity, 0);
        assert!(updated.is_available);
    }

    #[tokio::test]
    async fn corrupt_snapshot_is_parse_error() {
        let storage = MemoryStorage::new();
        storage.set_item(DEFAULT_STORAGE_KEY, "{\"not\": \"a list\"}").unwrap();

        let store = ItemStore::new(storage, StoreOptions::immediate()).unwrap();
        assert!(matches!(
            store.list_all().await,
            Err(InventoryError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn reset_restores_demo_items() {
        let store = store();
        let first = store.list_all().await.unwrap().remove(0);
        store.delete(&first.id).await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 3);

        store.reset().await.unwrap();
        let items = store.list_all().await.unwrap();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.id != first.id));
    }

    #[tokio::test]
    async fn honours_configured_latency() {
        let options = StoreOptions {
            latency: Duration::from_millis(20),
            ..StoreOptions::default()
        };
        let store = ItemStore::new(MemoryStorage::new(), options).unwrap();

        let started = std::time::Instant::now();
        store.list_all().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
