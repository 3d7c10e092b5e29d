//! CLI module for the snappy application
//!
//! This module handles the command-line interface for interacting with the
//! item store. It plays the form layer: input is validated here before the
//! store ever sees it.
use std::{path::PathBuf, sync::Arc};

use log::{debug, info};

use crate::{
    categories, confirm, format_price, parse_setting, validate, Availability, Commands, Config,
    InventoryError, InventoryStats, Item, ItemFields, ItemFilter, ItemStore, KeyValueStore,
    Result,
};

/// CLI Application handler - processes CLI commands and interfaces with the ItemStore
pub struct App<S> {
    /// The item store backend
    item_store: Arc<ItemStore<S>>,

    /// Application configuration
    config: Config,

    /// Where `config --set/--reset` writes to
    config_path: PathBuf,

    /// Whether to display verbose output
    verbose: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new CLI application with the given store and config
    pub fn new(
        item_store: Arc<ItemStore<S>>,
        config: Config,
        config_path: PathBuf,
        verbose: bool,
    ) -> Self {
        Self {
            item_store,
            config,
            config_path,
            verbose,
        }
    }

    /// Run the CLI application with the given command
    pub async fn run(&self, command: Commands) -> Result<()> {
        debug!("Running command: {:?}", command);

        match command {
            Commands::List {
                search,
                category,
                availability,
                json,
            } => self.list_items(search, category, availability, json).await?,

            Commands::View { id, json } => self.view_item(&id, json).await?,

            Commands::Create {
                name,
                description,
                category,
                quantity,
                price,
                unavailable,
            } => {
                let fields = ItemFields::new()
                    .name(name)
                    .description(description)
                    .category(category)
                    .quantity(quantity)
                    .price(price)
                    .available(!unavailable);
                self.create_item(fields).await?;
            }

            Commands::Update {
                id,
                name,
                description,
                category,
                quantity,
                price,
                available,
            } => {
                let changes = ItemFields {
                    name,
                    description,
                    category,
                    quantity,
                    price,
                    is_available: available,
                    ..ItemFields::default()
                };
                self.update_item(&id, changes).await?;
            }

            Commands::Delete { id, force } => self.delete_item(&id, force).await?,

            Commands::Stats { by_value, json } => self.show_stats(by_value, json).await?,

            Commands::Categories => {
                let items = self.item_store.list_all().await?;
                for category in categories(&items) {
                    println!("{}", category);
                }
            }

            Commands::Config { show, set, reset } => self.handle_config(show, set, reset)?,

            Commands::Reset { force } => self.reset_items(force).await?,
        }

        Ok(())
    }

    async fn list_items(
        &self,
        search: Option<String>,
        category: Option<String>,
        availability: Availability,
        json: bool,
    ) -> Result<()> {
        let filter = ItemFilter {
            search: search.unwrap_or_default(),
            category,
            availability,
        };

        let items = self.item_store.list_all().await?;
        let matching = filter.apply(&items);
        info!("{} of {} items match the filters", matching.len(), items.len());

        if json {
            println!("{}", serde_json::to_string_pretty(&matching)?);
            return Ok(());
        }

        if matching.is_empty() {
            if filter.is_active() {
                println!("No items found. Try adjusting your filters or search term.");
            } else {
                println!("No items found. Start by adding some items to your inventory.");
            }
            return Ok(());
        }

        for (i, item) in matching.iter().enumerate() {
            if i > 0 {
                println!("{}", "-".repeat(50));
            }
            self.print_item(item);
        }

        println!(
            "\nFound {} item{}",
            matching.len(),
            if matching.len() == 1 { "" } else { "s" }
        );
        Ok(())
    }

    async fn view_item(&self, id: &str, json: bool) -> Result<()> {
        let item = self.item_store.get_by_id(id).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&item)?);
        } else {
            self.print_item(&item);
        }
        Ok(())
    }

    async fn create_item(&self, fields: ItemFields) -> Result<Item> {
        validate(&fields).map_err(|errors| InventoryError::Validation { errors })?;

        let item = self.item_store.create(fields).await?;
        println!("Item created successfully! ID: {}", item.id);
        Ok(item)
    }

    /// Pre-fills the form from the stored item, applies `changes` on top and
    /// submits the whole form, the same as editing it by hand.
    async fn update_item(&self, id: &str, changes: ItemFields) -> Result<Item> {
        let existing = self.item_store.get_by_id(id).await?;
        let current = ItemFields::from(&existing);

        let fields = ItemFields {
            name: changes.name.or(current.name),
            description: changes.description.or(current.description),
            category: changes.category.or(current.category),
            quantity: changes.quantity.or(current.quantity),
            price: changes.price.or(current.price),
            is_available: changes.is_available.or(current.is_available),
            ..ItemFields::default()
        };
        validate(&fields).map_err(|errors| InventoryError::Validation { errors })?;

        let item = self.item_store.update(id, fields).await?;
        println!("Item updated successfully!");
        if self.verbose {
            self.print_item(&item);
        }
        Ok(item)
    }

    async fn delete_item(&self, id: &str, force: bool) -> Result<()> {
        let item = self.item_store.get_by_id(id).await?;

        if !force {
            println!("You are about to delete the following item:");
            self.print_item(&item);
            println!("\nThis action cannot be undone!");

            if !confirm("Are you sure you want to delete this item?")? {
                println!("Deletion cancelled.");
                return Ok(());
            }
        }

        self.item_store.delete(id).await?;
        println!("Item '{}' ({}) has been deleted.", item.name, item.id);
        Ok(())
    }

    async fn show_stats(&self, by_value: bool, json: bool) -> Result<()> {
        let items = self.item_store.list_all().await?;
        let stats = InventoryStats::from_items(&items);

        if json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        println!("Total Items: {}", stats.total_items);
        println!("Available:   {}", stats.total_available);
        println!("Total Value: {}", format_price(stats.total_value));
        println!();

        for category in &stats.by_category {
            let label = if category.category.is_empty() {
                "(none)"
            } else {
                category.category.as_str()
            };
            let figure = if by_value {
                format_price(category.value)
            } else {
                format!("{} items", category.count)
            };
            println!("{:<20} {}", console::style(label).bold(), figure);
        }
        Ok(())
    }

    fn handle_config(&self, show: bool, set: Option<String>, reset: bool) -> Result<()> {
        if reset {
            Config::default().save(&self.config_path)?;
            println!("Configuration reset to defaults.");
            return Ok(());
        }

        if let Some(setting) = set {
            let (key, value) = parse_setting(&setting)?;
            let mut config = self.config.clone();
            config.set_value(&key, &value)?;
            config.save(&self.config_path)?;
            println!("Set {} = {}", key, value);
            return Ok(());
        }

        if show || self.verbose {
            println!("Config file: {}", self.config_path.display());
        }
        println!("{}", serde_json::to_string_pretty(&self.config)?);
        Ok(())
    }

    async fn reset_items(&self, force: bool) -> Result<()> {
        if !force && !confirm("Drop every stored item and restore the demo data?")? {
            println!("Reset cancelled.");
            return Ok(());
        }

        self.item_store.reset().await?;
        println!("Inventory reset.");
        Ok(())
    }

    fn print_item(&self, item: &Item) {
        println!(
            "ID: {} | Created: {}",
            item.id,
            item.created_at.format("%Y-%m-%d %H:%M")
        );
        println!("Name: {}", console::style(&item.name).bold());
        if !item.category.is_empty() {
            println!("Category: {}", console::style(&item.category).cyan());
        }
        if !item.description.is_empty() {
            println!("Description: {}", item.description);
        }

        let availability = if item.is_available {
            console::style("Available").green()
        } else {
            console::style("Unavailable").red()
        };
        println!(
            "Quantity: {} | Price: {} | {}",
            item.quantity,
            format_price(item.price),
            availability
        );
    }
}
