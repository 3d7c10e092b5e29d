//! Form rules applied by callers before creating or updating an item.
//!
//! The store and the item model accept anything; these checks belong to the
//! layer collecting user input.
use crate::{FieldError, ItemFields};

/// Categories offered when entering an item
pub const CATEGORIES: [&str; 7] = [
    "Electronics",
    "Clothing",
    "Kitchen",
    "Office Supplies",
    "Furniture",
    "Books",
    "Other",
];

/// Checks `fields` against the form rules, returning every violation.
pub fn validate(fields: &ItemFields) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if fields.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
        errors.push(FieldError {
            field: "name",
            message: "Name is required".to_string(),
        });
    }

    if fields.category.as_deref().map_or(true, str::is_empty) {
        errors.push(FieldError {
            field: "category",
            message: "Category is required".to_string(),
        });
    }

    if fields.quantity.is_some_and(|quantity| quantity < 0) {
        errors.push(FieldError {
            field: "quantity",
            message: "Quantity cannot be negative".to_string(),
        });
    }

    if fields.price.is_some_and(|price| !price.is_finite()) {
        errors.push(FieldError {
            field: "price",
            message: "Price must be a number".to_string(),
        });
    } else if fields.price.is_some_and(|price| price < 0.0) {
        errors.push(FieldError {
            field: "price",
            message: "Price cannot be negative".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_fields() {
        let fields = ItemFields::new()
            .name("Pen")
            .category("Office Supplies")
            .quantity(100)
            .price(0.5);
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn blank_name_and_missing_category() {
        let errors = validate(&ItemFields::new().name("   ")).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "category"]);
        assert_eq!(errors[0].message, "Name is required");
    }

    #[test]
    fn negative_numbers() {
        let fields = ItemFields::new()
            .name("Pen")
            .category("Other")
            .quantity(-1)
            .price(-0.01);
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Quantity cannot be negative");
        assert_eq!(errors[1].message, "Price cannot be negative");
    }

    #[test]
    fn non_finite_price_is_rejected() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let fields = ItemFields::new().name("Pen").category("Other").price(price);
            let errors = validate(&fields).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "price");
            assert_eq!(errors[0].message, "Price must be a number");
        }
    }

    #[test]
    fn zero_is_allowed() {
        let fields = ItemFields::new()
            .name("Freebie")
            .category("Other")
            .quantity(0)
            .price(0.0);
        assert!(validate(&fields).is_ok());
    }
}
