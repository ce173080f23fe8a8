//! Report model behind the PDF export.
//!
//! The report re-evaluates the filter predicate on the full list itself;
//! it never reuses the rows currently shown in the table.

use super::aggregate::{OrderList, FIELD_COUNT};
use super::filter::OrderFilter;

pub const REPORT_TITLE: &str = "Reporte de Pedidos";

pub const REPORT_FILE_NAME: &str = "reporte_pedidos.pdf";

pub const REPORT_HEADERS: [&str; FIELD_COUNT] = [
    "Fecha",
    "Nombre y Apellido",
    "Teléfono",
    "Producto",
    "Código",
    "Color/Modelo",
    "Cantidad",
    "Precio Unitario",
    "Total",
    "Estado",
];

#[derive(Debug, Clone, PartialEq)]
pub struct OrderReport {
    pub title: String,
    /// Filter criteria lines printed above the table
    pub annotations: Vec<String>,
    pub headers: [&'static str; FIELD_COUNT],
    pub rows: Vec<[String; FIELD_COUNT]>,
    pub grand_total: f64,
}

impl OrderReport {
    pub fn build(list: &OrderList, filter: &OrderFilter) -> Self {
        let matching: Vec<_> = list.iter().filter(|r| filter.matches(r)).collect();

        Self {
            title: REPORT_TITLE.to_string(),
            annotations: annotations(filter),
            headers: REPORT_HEADERS,
            rows: matching.iter().map(|r| r.cells()).collect(),
            grand_total: matching.iter().fold(0.0, |acc, r| acc + r.total.or_zero()),
        }
    }

    pub fn grand_total_line(&self) -> String {
        format!("Gran Total: {:.2}", self.grand_total)
    }
}

fn annotations(filter: &OrderFilter) -> Vec<String> {
    let mut lines = Vec::new();
    if !filter.date_from.is_empty() || !filter.date_to.is_empty() {
        lines.push(format!(
            "Desde: {} Hasta: {}",
            or_na(&filter.date_from),
            or_na(&filter.date_to)
        ));
    }
    if !filter.name_query.is_empty() {
        lines.push(format!("Búsqueda: {}", filter.name_query));
    }
    lines
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::{NumberCell, OrderRecord};
    use proptest::prelude::*;

    fn record(date: &str, name: &str, quantity: i64, unit_price: f64) -> OrderRecord {
        OrderRecord {
            date: date.to_string(),
            full_name: name.to_string(),
            phone: "555".to_string(),
            product: "Mesa".to_string(),
            code: "M-1".to_string(),
            color_or_model: "Roble".to_string(),
            quantity: NumberCell::from_i64(quantity),
            unit_price: NumberCell::from_f64(unit_price),
            total: NumberCell::from_f64(quantity as f64 * unit_price),
            status: "pendiente".to_string(),
        }
    }

    fn sample() -> OrderList {
        OrderList::new(vec![
            record("2024-01-01", "Ana", 10, 2.0),
            record("2024-01-20", "Bruno", 5, 2.5),
            record("2024-02-03", "Ana Sofía", 1, 0.333),
        ])
    }

    #[test]
    fn test_unfiltered_report() {
        let report = OrderReport::build(&sample(), &OrderFilter::default());
        assert_eq!(report.title, "Reporte de Pedidos");
        assert!(report.annotations.is_empty());
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.headers[1], "Nombre y Apellido");
        assert_eq!(report.grand_total_line(), "Gran Total: 32.83");
    }

    #[test]
    fn test_annotations_for_partial_date_range_and_search() {
        let filter = OrderFilter {
            date_from: "2024-01-10".into(),
            date_to: String::new(),
            name_query: "Ana".into(),
        };
        let report = OrderReport::build(&sample(), &filter);
        assert_eq!(
            report.annotations,
            vec![
                "Desde: 2024-01-10 Hasta: N/A".to_string(),
                "Búsqueda: Ana".to_string()
            ]
        );
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0][1], "Ana Sofía");
        assert_eq!(report.grand_total_line(), "Gran Total: 0.33");
    }

    #[test]
    fn test_empty_result_has_zero_total() {
        let filter = OrderFilter {
            name_query: "nadie".into(),
            ..Default::default()
        };
        let report = OrderReport::build(&sample(), &filter);
        assert!(report.rows.is_empty());
        assert_eq!(report.grand_total_line(), "Gran Total: 0.00");
    }

    #[test]
    fn test_blank_total_cells_count_as_zero() {
        let mut blank = record("2024-01-05", "Luis", 1, 1.0);
        blank.total = NumberCell::from_wire(&serde_json::json!(""));
        let list = OrderList::new(vec![record("2024-01-01", "Ana", 10, 2.0), blank]);

        let report = OrderReport::build(&list, &OrderFilter::default());
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1][8], "");
        assert_eq!(report.grand_total_line(), "Gran Total: 20.00");
    }

    proptest! {
        #[test]
        fn prop_grand_total_sums_exactly_the_filtered_rows(
            rows in prop::collection::vec((0u32..60, 1i64..50, 1u32..10_000), 0..15),
            from in prop::option::of(0u32..60),
            query in prop_oneof![Just(String::new()), Just("a".to_string()), Just("nadie".to_string())],
        ) {
            let list = OrderList::new(
                rows.iter()
                    .map(|(day, q, cents)| {
                        let date = format!("2024-{:02}-{:02}", day / 28 + 1, day % 28 + 1);
                        let name = if day % 2 == 0 { "Ana" } else { "Luis" };
                        record(&date, name, *q, *cents as f64 / 100.0)
                    })
                    .collect(),
            );
            let filter = OrderFilter {
                date_from: from
                    .map(|d| format!("2024-{:02}-{:02}", d / 28 + 1, d % 28 + 1))
                    .unwrap_or_default(),
                date_to: String::new(),
                name_query: query,
            };

            let report = OrderReport::build(&list, &filter);
            let matching = filter.apply(&list);
            let expected = matching
                .iter()
                .fold(0.0, |acc, r| acc + r.record.total.or_zero());
            prop_assert_eq!(report.rows.len(), matching.len());
            prop_assert_eq!(report.grand_total_line(), format!("Gran Total: {:.2}", expected));
            if matching.is_empty() {
                prop_assert_eq!(report.grand_total_line(), "Gran Total: 0.00");
            }
        }
    }
}
