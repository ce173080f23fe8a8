use super::error::OrderError;
use crate::domain::common::RowIndex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of positional fields in a remote row
pub const FIELD_COUNT: usize = 10;

// ============================================================================
// Record
// ============================================================================

/// Один pedido. Remote rows are positional tuples in exactly this field order:
/// `[date, full_name, phone, product, code, color_or_model, quantity, unit_price, total, status]`
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    /// `YYYY-MM-DD`, compared lexicographically
    pub date: String,
    pub full_name: String,
    pub phone: String,
    pub product: String,
    pub code: String,
    pub color_or_model: String,
    pub quantity: NumberCell,
    pub unit_price: NumberCell,
    /// `quantity * unit_price`, computed when the record is built; never recomputed on read
    pub total: NumberCell,
    pub status: String,
}

impl OrderRecord {
    /// Decode one remote row.
    ///
    /// Every cell is kept as received. Missing trailing cells read as empty,
    /// extra cells are ignored. Only a row that is not an array is rejected.
    pub fn from_row(row: &Value) -> Result<Self, String> {
        let cells = row
            .as_array()
            .ok_or_else(|| format!("row is not an array: {}", row))?;
        let cell = |i: usize| cells.get(i).unwrap_or(&Value::Null);

        Ok(Self {
            date: text_cell(cell(0)),
            full_name: text_cell(cell(1)),
            phone: text_cell(cell(2)),
            product: text_cell(cell(3)),
            code: text_cell(cell(4)),
            color_or_model: text_cell(cell(5)),
            quantity: NumberCell::from_wire(cell(6)),
            unit_price: NumberCell::from_wire(cell(7)),
            total: NumberCell::from_wire(cell(8)),
            status: text_cell(cell(9)),
        })
    }

    /// Fields as displayed, in column order, exactly as received
    pub fn cells(&self) -> [String; FIELD_COUNT] {
        [
            self.date.clone(),
            self.full_name.clone(),
            self.phone.clone(),
            self.product.clone(),
            self.code.clone(),
            self.color_or_model.clone(),
            self.quantity.raw().to_string(),
            self.unit_price.raw().to_string(),
            self.total.raw().to_string(),
            self.status.clone(),
        ]
    }
}

fn text_cell(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Numeric column of a remote row: the text as received plus its value,
/// when the text is a number. Blank sheet cells have no value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberCell {
    raw: String,
    value: Option<f64>,
}

impl NumberCell {
    pub fn from_i64(value: i64) -> Self {
        Self {
            raw: value.to_string(),
            value: Some(value as f64),
        }
    }

    pub fn from_f64(value: f64) -> Self {
        Self {
            raw: value.to_string(),
            value: Some(value),
        }
    }

    pub fn from_wire(cell: &Value) -> Self {
        let raw = text_cell(cell);
        let value = match cell {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        };
        Self { raw, value }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Value for sums; blank or non-numeric cells count as zero
    pub fn or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

// ============================================================================
// Wire payload
// ============================================================================

/// JSON object sent in the `data` parameter of `add`/`update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "nombre")]
    pub full_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "color")]
    pub color_or_model: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio")]
    pub unit_price: f64,
    pub total: f64,
    #[serde(rename = "estado")]
    pub status: String,
}

/// Meant for records built by `OrderForm::validate`, whose numbers are always set
impl From<&OrderRecord> for OrderPayload {
    fn from(r: &OrderRecord) -> Self {
        Self {
            date: r.date.clone(),
            full_name: r.full_name.clone(),
            phone: r.phone.clone(),
            product: r.product.clone(),
            code: r.code.clone(),
            color_or_model: r.color_or_model.clone(),
            quantity: r.quantity.or_zero() as i64,
            unit_price: r.unit_price.or_zero(),
            total: r.total.or_zero(),
            status: r.status.clone(),
        }
    }
}

// ============================================================================
// List
// ============================================================================

/// A record together with its position in the unfiltered list
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedOrder {
    pub index: RowIndex,
    pub record: OrderRecord,
}

/// Position-indexed mirror of the remote rows (header excluded)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderList {
    records: Vec<OrderRecord>,
}

impl OrderList {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    /// Decode the `list` response body. Row 0 is the sheet header and is dropped.
    pub fn parse_response(body: &str) -> Result<Self, OrderError> {
        let rows: Vec<Value> = serde_json::from_str(body)
            .map_err(|e| OrderError::network(format!("respuesta inválida: {}", e)))?;
        Self::from_rows(&rows).map_err(|e| OrderError::network(format!("respuesta inválida: {}", e)))
    }

    pub fn from_rows(rows: &[Value]) -> Result<Self, String> {
        let records = rows
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, row)| OrderRecord::from_row(row).map_err(|e| format!("fila {}: {}", i, e)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: RowIndex) -> Option<&OrderRecord> {
        self.records.get(index.value())
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> {
        self.records.iter()
    }

    /// Every record paired with its source position
    pub fn indexed(&self) -> impl Iterator<Item = IndexedOrder> + '_ {
        self.records.iter().enumerate().map(|(i, record)| IndexedOrder {
            index: RowIndex::new(i),
            record: record.clone(),
        })
    }
}
