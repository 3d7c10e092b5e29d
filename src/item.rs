//! Core data structures for the inventory application.
//!
//! This module contains the `Item` record and the `ItemFields` input used to
//! construct and update items.
use chrono::{DateTime, SubsecRound, Utc};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::{InventoryError, Result};

/// Represents a single inventory entry
///
/// Records built with `Item::new` or read back from JSON carry a
/// millisecond-precision `created_at`. A struct literal with a finer
/// timestamp or a non-finite price does not survive `to_json`/`from_json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Category used for grouping and filtering
    #[serde(default)]
    pub category: String,
    /// Units in stock. Stored JSON may hold it as `5` or `5.0`; a
    /// fractional count is rejected.
    #[serde(default, deserialize_with = "whole_number")]
    pub quantity: i64,
    /// Unit price, always finite once persisted
    #[serde(default, serialize_with = "finite_price")]
    pub price: f64,
    /// When the item was created
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Whether the item can currently be ordered
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// JSON has no NaN or infinity; serde_json would write `null` and the
/// collection could no longer be read back.
fn finite_price<S>(price: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !price.is_finite() {
        return Err(<S::Error as ser::Error>::custom(format!(
            "price must be a finite number, got {}",
            price
        )));
    }
    serializer.serialize_f64(*price)
}

fn whole_number<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Integer(value) => Ok(value),
        Number::Float(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        Number::Float(value) => Err(<D::Error as de::Error>::custom(format!(
            "quantity must be a whole number, got {}",
            value
        ))),
    }
}

/// Input for constructing or updating an item. Unset fields fall back to
/// the item defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub is_available: Option<bool>,
}

impl ItemFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = Some(is_available);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the creation time from its ISO-8601 form.
    pub fn created_at_str(self, created_at: &str) -> Result<Self> {
        let parsed = DateTime::parse_from_rfc3339(created_at).map_err(|e| {
            InventoryError::InvalidTimestamp {
                value: created_at.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(self.created_at(parsed.with_timezone(&Utc)))
    }
}

impl From<&Item> for ItemFields {
    fn from(item: &Item) -> Self {
        ItemFields {
            id: Some(item.id.clone()),
            name: Some(item.name.clone()),
            description: Some(item.description.clone()),
            category: Some(item.category.clone()),
            quantity: Some(item.quantity),
            price: Some(item.price),
            created_at: Some(item.created_at),
            is_available: Some(item.is_available),
        }
    }
}

impl Item {
    /// Builds an item from the given fields, generating an id and creation
    /// time when they are not supplied
    pub fn new(fields: ItemFields) -> Self {
        let created_at = fields.created_at.unwrap_or_else(Utc::now);

        Item {
            id: fields.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: fields.name.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            category: fields.category.unwrap_or_default(),
            quantity: fields.quantity.unwrap_or(0),
            price: fields.price.unwrap_or(0.0),
            // The wire format only carries milliseconds
            created_at: created_at.trunc_subsecs(3),
            is_available: fields.is_available.unwrap_or(true),
        }
    }

    /// Rebuilds an item from its serialized form.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts the item to its serialized form, with `createdAt` as an
    /// ISO-8601 string.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Stock value of this item (`price * quantity`)
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let parsed = DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| D::Error::custom(format!("invalid createdAt '{}': {}", raw, e)))?;
        Ok(parsed.with_timezone(&Utc).trunc_subsecs(3))
    }
}
