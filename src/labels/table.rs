use crate::labels::Error;

/// A parsed CSV upload: one header row plus data rows. Rows may be ragged,
/// missing cells read as empty.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            records.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        if records.is_empty() {
            return Err(Error::EmptyCsv);
        }

        let headers = records.remove(0);
        Ok(CsvTable {
            headers,
            rows: records,
        })
    }

    pub fn cell<'a>(&self, row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(|cell| cell.trim()).unwrap_or("")
    }
}

/// Which column plays which role. Chosen by the operator, or guessed from
/// the header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRoles {
    pub sku: usize,
    pub order: usize,
    pub quantity: usize,
}

impl ColumnRoles {
    /// Header-name heuristics, same ones the upload form applies: "sku" for
    /// the SKU column, "orden"/"order" for the order number, "cantidad" for
    /// the quantity. Unmatched roles fall back to the first column.
    pub fn detect(headers: &[String]) -> Self {
        let find = |needles: &[&str]| {
            headers
                .iter()
                .position(|header| {
                    let header = header.to_lowercase();
                    needles.iter().any(|needle| header.contains(needle))
                })
                .unwrap_or(0)
        };

        ColumnRoles {
            sku: find(&["sku"]),
            order: find(&["número de orden", "numero de orden", "orden", "order"]),
            quantity: find(&["cantidad del producto", "cantidad"]),
        }
    }

    /// Explicit operator choices win over detection; every index is bounds
    /// checked against the header row.
    pub fn resolve(
        headers: &[String],
        sku: Option<usize>,
        order: Option<usize>,
        quantity: Option<usize>,
    ) -> Result<Self, Error> {
        let detected = Self::detect(headers);
        let roles = ColumnRoles {
            sku: sku.unwrap_or(detected.sku),
            order: order.unwrap_or(detected.order),
            quantity: quantity.unwrap_or(detected.quantity),
        };

        for index in [roles.sku, roles.order, roles.quantity] {
            if index >= headers.len() {
                return Err(Error::ColumnOutOfRange {
                    index,
                    columns: headers.len(),
                });
            }
        }

        Ok(roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let table = CsvTable::parse("SKU,Cliente,Orden\nSKU-001,ACME,4521\n").unwrap();
        assert_eq!(table.headers, vec!["SKU", "Cliente", "Orden"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn detects_roles_from_headers() {
        let headers: Vec<String> = ["Número de orden", "SKU", "Cantidad del producto"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let roles = ColumnRoles::detect(&headers);
        assert_eq!(
            roles,
            ColumnRoles {
                sku: 1,
                order: 0,
                quantity: 2
            }
        );
    }

    #[test]
    fn unmatched_roles_default_to_first_column() {
        let headers: Vec<String> = ["a", "b"].iter().map(|h| h.to_string()).collect();
        let roles = ColumnRoles::detect(&headers);
        assert_eq!(
            roles,
            ColumnRoles {
                sku: 0,
                order: 0,
                quantity: 0
            }
        );
    }

    #[test]
    fn explicit_index_out_of_range_is_rejected() {
        let headers: Vec<String> = ["a", "b"].iter().map(|h| h.to_string()).collect();
        let result = ColumnRoles::resolve(&headers, Some(5), None, None);
        assert!(matches!(
            result,
            Err(Error::ColumnOutOfRange {
                index: 5,
                columns: 2
            })
        ));
    }
}
