//! Render description for a results chart.
//!
//! A [`Chart`] is what the presentation layer draws: one proportional
//! segment per candidate, each labelled with its percentage. There is no
//! legend; the title carries the participant total.

use serde::Serialize;

use crate::{candidate::Purpose, tally::Tally};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
  pub candidate: String,
  pub count:     u64,
  /// Share of the total, in percent. Zero when the total is zero.
  pub percent:   f64,
  /// Text drawn on the segment, e.g. `"Prof Eudes: 42.9%"`.
  pub label:     String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
  pub purpose:  Purpose,
  pub title:    String,
  pub total:    u64,
  pub segments: Vec<Segment>,
}

impl Chart {
  /// Build the chart for an already-transformed tally.
  pub fn from_tally(purpose: Purpose, tally: &Tally) -> Self {
    let total = tally.total();
    let segments = tally
      .entries()
      .iter()
      .map(|e| {
        let percent = if total == 0 {
          0.0
        } else {
          e.count as f64 * 100.0 / total as f64
        };
        Segment {
          candidate: e.candidate.clone(),
          count: e.count,
          percent,
          label: format!("{}: {percent:.1}%", e.candidate),
        }
      })
      .collect();

    Self {
      purpose,
      title: format!("{} - Total de participantes: {total}", heading(purpose)),
      total,
      segments,
    }
  }
}

fn heading(purpose: Purpose) -> &'static str {
  match purpose {
    Purpose::Intention => "Intenção de Voto",
    Purpose::Rejection => "Rejeição",
  }
}
