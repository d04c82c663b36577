//! CSV serialisation.

use crate::{
  table::{Cell, Table},
  Result,
};

/// Serialise `table` as UTF-8 CSV with a header row.
pub fn to_csv(table: &Table) -> Result<Vec<u8>> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(&table.headers)?;

  for row in &table.rows {
    writer.write_record(row.iter().map(cell_text))?;
  }

  writer.into_inner().map_err(|e| e.into_error().into())
}

fn cell_text(cell: &Cell) -> String {
  match cell {
    Cell::Text(s) => s.clone(),
    Cell::Integer(n) => n.to_string(),
    Cell::Null => String::new(),
  }
}
