use crate::s0802;
use pacommute_core::model::{Row, RowError, Table};
use serde::{Deserialize, Serialize};

/// locates the statewide total row of the commute table.
///
/// by default this is the row at `position` 1, directly after the column
/// description line. when `name` is set, the row whose `NAME` equals it is
/// used instead and `position` is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatewideRow {
    #[serde(default = "StatewideRow::default_position")]
    pub position: usize,
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for StatewideRow {
    fn default() -> Self {
        Self {
            position: Self::default_position(),
            name: None,
        }
    }
}

impl StatewideRow {
    fn default_position() -> usize {
        1
    }

    pub fn select<'a>(&self, table: &'a Table) -> Result<&'a Row, RowError> {
        match &self.name {
            Some(name) => table
                .find_row(s0802::NAME, name)
                .map(|(_, row)| row)
                .ok_or_else(|| RowError::NoMatchingRow {
                    column: s0802::NAME.to_string(),
                    value: name.clone(),
                }),
            None => {
                let row = table.row(self.position)?;
                if let Some(name) = row.get_optional(s0802::NAME) {
                    if name.to_string().contains("County") {
                        log::warn!(
                            "statewide row at position {} is named '{name}'",
                            self.position
                        );
                    }
                }
                Ok(row)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacommute_core::model::CellValue;

    fn table() -> Table {
        let rows = ["Geographic Area Name", "Pennsylvania", "Adams County, Pennsylvania"]
            .into_iter()
            .map(|n| [(s0802::NAME, CellValue::from(n))].into_iter().collect::<Row>())
            .collect();
        Table::new(vec![s0802::NAME.to_string()], rows)
    }

    #[test]
    fn test_default_is_position_one() {
        let table = table();
        let row = StatewideRow::default().select(&table).unwrap();
        assert_eq!(row.get_text(s0802::NAME).unwrap(), "Pennsylvania");
    }

    #[test]
    fn test_select_by_name() {
        let table = table();
        let selector = StatewideRow {
            position: 0,
            name: Some(String::from("Pennsylvania")),
        };
        let row = selector.select(&table).unwrap();
        assert_eq!(row.get_text(s0802::NAME).unwrap(), "Pennsylvania");
    }

    #[test]
    fn test_missing_rows() {
        let table = table();
        let by_position = StatewideRow {
            position: 10,
            name: None,
        };
        assert_eq!(by_position.select(&table), Err(RowError::MissingRow(10)));
        let by_name = StatewideRow {
            position: 1,
            name: Some(String::from("Ohio")),
        };
        assert!(matches!(
            by_name.select(&table),
            Err(RowError::NoMatchingRow { .. })
        ));
    }
}
