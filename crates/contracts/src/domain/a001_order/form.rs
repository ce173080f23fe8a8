use super::aggregate::{NumberCell, OrderRecord};
use super::error::{NumericField, OrderError};
use serde::{Deserialize, Serialize};

/// Raw form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    pub date: String,
    pub full_name: String,
    pub phone: String,
    pub product: String,
    pub code: String,
    pub color_or_model: String,
    pub quantity: String,
    pub unit_price: String,
    pub status: String,
}

impl OrderForm {
    /// Load a stored record back into the form (total is derived, not editable).
    /// Numeric cells come back as the sheet text, blank included.
    pub fn from_record(r: &OrderRecord) -> Self {
        Self {
            date: r.date.clone(),
            full_name: r.full_name.clone(),
            phone: r.phone.clone(),
            product: r.product.clone(),
            code: r.code.clone(),
            color_or_model: r.color_or_model.clone(),
            quantity: r.quantity.raw().to_string(),
            unit_price: r.unit_price.raw().to_string(),
            status: r.status.clone(),
        }
    }

    /// Validate numeric fields and build the record with its total.
    ///
    /// Text fields are taken as-is, empty strings included.
    pub fn validate(&self) -> Result<OrderRecord, OrderError> {
        let quantity = parse_quantity(&self.quantity)?;
        let unit_price = parse_unit_price(&self.unit_price)?;

        Ok(OrderRecord {
            date: self.date.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            product: self.product.clone(),
            code: self.code.clone(),
            color_or_model: self.color_or_model.clone(),
            quantity: NumberCell::from_i64(quantity),
            unit_price: NumberCell::from_f64(unit_price),
            total: NumberCell::from_f64(quantity as f64 * unit_price),
            status: self.status.clone(),
        })
    }

    /// Total shown while typing; `None` until both numbers are valid
    pub fn total_preview(&self) -> Option<f64> {
        let quantity = parse_quantity(&self.quantity).ok()?;
        let unit_price = parse_unit_price(&self.unit_price).ok()?;
        Some(quantity as f64 * unit_price)
    }
}

/// Quantity must be an integer greater than zero.
///
/// Stricter than a browser `parseInt`: `"2.5"` and `"5abc"` are rejected
/// instead of being read as 2 and 5.
pub fn parse_quantity(raw: &str) -> Result<i64, OrderError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(OrderError::Validation {
            field: NumericField::Quantity,
            raw: trimmed.to_string(),
        }),
    }
}

/// Unit price must be a finite decimal greater than zero
pub fn parse_unit_price(raw: &str) -> Result<f64, OrderError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(OrderError::Validation {
            field: NumericField::UnitPrice,
            raw: trimmed.to_string(),
        }),
    }
}
