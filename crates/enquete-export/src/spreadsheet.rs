//! XLSX serialisation.

use rust_xlsxwriter::Workbook;

use crate::{
  table::{Cell, Table},
  Result,
};

/// One worksheet write: zero-based row and column plus the value.
#[derive(Debug, Clone, PartialEq)]
enum Write<'a> {
  Text(u32, u16, &'a str),
  Number(u32, u16, f64),
}

/// Lay `table` out on a sheet: headers on row 0 from column 0, data below.
/// Null cells produce no write and stay empty.
fn layout(table: &Table) -> Vec<Write<'_>> {
  let headers = table
    .headers
    .iter()
    .enumerate()
    .map(|(col, header)| Write::Text(0, col as u16, header));

  let cells = table.rows.iter().enumerate().flat_map(|(i, row)| {
    let r = i as u32 + 1;
    row.iter().enumerate().filter_map(move |(col, cell)| {
      let c = col as u16;
      match cell {
        Cell::Text(s) => Some(Write::Text(r, c, s)),
        Cell::Integer(n) => Some(Write::Number(r, c, *n as f64)),
        Cell::Null => None,
      }
    })
  });

  headers.chain(cells).collect()
}

/// Serialise `table` as a single-sheet XLSX workbook with a header row.
pub fn to_xlsx(table: &Table) -> Result<Vec<u8>> {
  let mut workbook = Workbook::new();
  let sheet = workbook.add_worksheet();

  for write in layout(table) {
    match write {
      Write::Text(r, c, s) => {
        sheet.write_string(r, c, s)?;
      }
      Write::Number(r, c, n) => {
        sheet.write_number(r, c, n)?;
      }
    }
  }

  Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
  use enquete_core::token::{Token, VoteRecord};

  use super::*;
  use crate::table::{tokens_table, votes_table};

  #[test]
  fn header_row_starts_at_first_column() {
    let table = tokens_table(&[Token::fresh("aaa")]);
    let writes = layout(&table);
    assert_eq!(
      writes,
      vec![
        Write::Text(0, 0, "token"),
        Write::Text(0, 1, "used_for_intention"),
        Write::Text(0, 2, "used_for_rejection"),
        Write::Text(1, 0, "aaa"),
        Write::Number(1, 1, 0.0),
        Write::Number(1, 2, 0.0),
      ]
    );
  }

  #[test]
  fn data_rows_have_no_index_column() {
    let rows = vec![
      VoteRecord { id: 7, candidate: "Prof Eudes".into(), token: "t1".into() },
      VoteRecord { id: 9, candidate: "Indeciso".into(), token: "t2".into() },
    ];
    let table = votes_table(&rows);
    let writes = layout(&table);

    assert_eq!(writes.len(), 3 + 2 * 3);
    assert!(writes.iter().all(|w| match w {
      Write::Text(_, c, _) | Write::Number(_, c, _) => *c < 3,
    }));
    assert_eq!(writes[3], Write::Number(1, 0, 7.0));
    assert_eq!(writes[7], Write::Text(2, 1, "Indeciso"));
  }

  #[test]
  fn null_cells_are_left_empty() {
    let table = Table {
      headers: vec!["id", "favored_candidate"],
      rows:    vec![vec![Cell::Integer(1), Cell::Null]],
    };
    assert_eq!(
      layout(&table),
      vec![
        Write::Text(0, 0, "id"),
        Write::Text(0, 1, "favored_candidate"),
        Write::Number(1, 0, 1.0),
      ]
    );
  }

  #[test]
  fn workbook_is_a_zip_container() {
    let bytes = to_xlsx(&tokens_table(&[Token::fresh("aaa")])).unwrap();
    assert!(bytes.starts_with(b"PK"));
  }
}
