// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

fn cell_text(el: &ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// What a label lookup found on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelCell {
    /// No `<td>` carries the label.
    Missing,
    /// The label cell is the last `<td>` in the document.
    NoValueCell,
    /// Text of the `<td>` after the label; may be empty.
    Value(String),
}

/// For each label, find the first `<td>` whose text is exactly that label and read the
/// next `<td>` in document order.
///
/// The document is parsed once; results line up with `labels`.
pub fn values_after_labels(doc: &str, labels: &[&str]) -> Vec<LabelCell> {
    let Ok(td) = Selector::parse("td") else {
        return vec![LabelCell::Missing; labels.len()];
    };
    let html = Html::parse_document(doc);
    let cells: Vec<ElementRef<'_>> = html.select(&td).collect();
    let texts: Vec<String> = cells.iter().map(cell_text).collect();

    labels
        .iter()
        .map(|label| match texts.iter().position(|t| t.as_str() == *label) {
            None => LabelCell::Missing,
            Some(at) => match texts.get(at + 1) {
                Some(v) => LabelCell::Value(v.clone()),
                None => LabelCell::NoValueCell,
            },
        })
        .collect()
}
