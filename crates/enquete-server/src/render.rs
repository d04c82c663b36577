//! SVG pie chart rendering for a [`Chart`].
//!
//! Uses `quick-xml`'s writer API. Segments start at twelve o'clock and run
//! clockwise in tally order; each carries its own percentage label and there
//! is no legend.

use std::{f64::consts::PI, io::Cursor};

use enquete_core::chart::Chart;
use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::Error;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 440.0;
const CX: f64 = WIDTH / 2.0;
const CY: f64 = 240.0;
const RADIUS: f64 = 170.0;

const PALETTE: [&str; 6] =
  ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b"];

type SvgWriter = Writer<Cursor<Vec<u8>>>;

/// Render `chart` as a standalone SVG document.
pub fn pie_svg(chart: &Chart) -> Result<Vec<u8>, Error> {
  let mut w = Writer::new(Cursor::new(Vec::new()));

  let width = WIDTH.to_string();
  let height = HEIGHT.to_string();
  let view_box = format!("0 0 {WIDTH} {HEIGHT}");
  let mut svg = BytesStart::new("svg");
  svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
  svg.push_attribute(("width", width.as_str()));
  svg.push_attribute(("height", height.as_str()));
  svg.push_attribute(("viewBox", view_box.as_str()));
  write(&mut w, Event::Start(svg))?;

  text(&mut w, CX, 32.0, "18", &chart.title)?;

  let drawn: Vec<_> = chart.segments.iter().filter(|s| s.count > 0).collect();
  let mut start = 0.0_f64;

  for (i, segment) in drawn.iter().enumerate() {
    let fill = PALETTE[i % PALETTE.len()];
    let sweep = segment.count as f64 / chart.total as f64;

    if drawn.len() == 1 {
      let mut circle = BytesStart::new("circle");
      circle.push_attribute(("cx", CX.to_string().as_str()));
      circle.push_attribute(("cy", CY.to_string().as_str()));
      circle.push_attribute(("r", RADIUS.to_string().as_str()));
      circle.push_attribute(("fill", fill));
      write(&mut w, Event::Empty(circle))?;
    } else {
      let d = slice_path(start, start + sweep);
      let mut path = BytesStart::new("path");
      path.push_attribute(("d", d.as_str()));
      path.push_attribute(("fill", fill));
      path.push_attribute(("stroke", "#ffffff"));
      write(&mut w, Event::Empty(path))?;
    }

    let (lx, ly) = point(start + sweep / 2.0, RADIUS * 0.62);
    text(&mut w, lx, ly, "13", &segment.label)?;
    start += sweep;
  }

  write(&mut w, Event::End(BytesEnd::new("svg")))?;
  Ok(w.into_inner().into_inner())
}

/// Point at `fraction` of a full turn, clockwise from twelve o'clock.
fn point(fraction: f64, radius: f64) -> (f64, f64) {
  let angle = fraction * 2.0 * PI - PI / 2.0;
  (CX + radius * angle.cos(), CY + radius * angle.sin())
}

fn slice_path(from: f64, to: f64) -> String {
  let (x1, y1) = point(from, RADIUS);
  let (x2, y2) = point(to, RADIUS);
  let large_arc = u8::from(to - from > 0.5);
  format!(
    "M {CX:.2} {CY:.2} L {x1:.2} {y1:.2} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
  )
}

fn text(w: &mut SvgWriter, x: f64, y: f64, size: &str, content: &str) -> Result<(), Error> {
  let mut el = BytesStart::new("text");
  el.push_attribute(("x", format!("{x:.2}").as_str()));
  el.push_attribute(("y", format!("{y:.2}").as_str()));
  el.push_attribute(("font-size", size));
  el.push_attribute(("text-anchor", "middle"));
  write(w, Event::Start(el))?;
  write(w, Event::Text(BytesText::new(content)))?;
  write(w, Event::End(BytesEnd::new("text")))
}

fn write(w: &mut SvgWriter, event: Event<'_>) -> Result<(), Error> {
  w.write_event(event).map_err(|e| Error::Render(e.to_string()))
}
