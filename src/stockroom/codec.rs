//! # Inventory Text Format
//!
//! Products are persisted as UTF-8, newline-terminated delimited text:
//!
//! ```text
//! id,name,quantity,price
//! 1,Pen,10,100
//! 2,"Note, Big",5,250
//! ```
//!
//! The first line is a descriptive header. It is always written and always
//! skipped on read, whatever it contains.
//!
//! Every record is exactly one physical line. Numeric fields are plain decimal
//! integers. The name is written bare unless it contains the delimiter, a double
//! quote or a line break; then it is wrapped in double quotes with every inner
//! `"` doubled, and line feeds and carriage returns written as `"n` and `"r`.
//! A lone quote inside a quoted field never occurs in plain doubled-quote
//! output, so files written by older tools still decode the same.
//!
//! A field is read as quoted only when its closing quote ends the field. A field
//! that merely starts with `"` (`"Best" pen`, `"Best pen`) is bare text.
//!
//! Decoding is tolerant: a record with the wrong number of fields or an
//! unparsable number is reported in [`LoadReport::skipped`] and the rest of the
//! input still loads.

use crate::model::Product;
use std::borrow::Cow;
use thiserror::Error;
use tracing::warn;

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';
pub const HEADER: &str = "id,name,quantity,price";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("{field} is not an integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// A record that was skipped while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct MalformedRecord {
    /// 1-based line number where the record starts (the header is line 1).
    pub line: usize,
    pub reason: MalformedReason,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub products: Vec<Product>,
    pub skipped: Vec<MalformedRecord>,
}

pub fn encode(products: &[Product]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + products.len() * 32);
    out.push_str(HEADER);
    out.push('\n');
    for product in products {
        out.push_str(&product.id.to_string());
        out.push(DELIMITER);
        out.push_str(&escape_field(&product.name));
        out.push(DELIMITER);
        out.push_str(&product.quantity.to_string());
        out.push(DELIMITER);
        out.push_str(&product.price.to_string());
        out.push('\n');
    }
    out
}

pub fn escape_field(value: &str) -> Cow<'_, str> {
    if !value.contains([DELIMITER, QUOTE, '\n', '\r']) {
        return Cow::Borrowed(value);
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(QUOTE);
    for c in value.chars() {
        match c {
            QUOTE => quoted.push_str("\"\""),
            '\n' => quoted.push_str("\"n"),
            '\r' => quoted.push_str("\"r"),
            c => quoted.push(c),
        }
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}

pub fn decode(text: &str) -> LoadReport {
    let mut report = LoadReport::default();

    // The header is line 1 and is discarded whatever it holds.
    for (idx, raw) in text.split('\n').enumerate().skip(1) {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        match product_from_fields(split_line(line)) {
            Ok(product) => report.products.push(product),
            Err(reason) => {
                warn!(line = line_no, %reason, text = line, "Skipping malformed record");
                report.skipped.push(MalformedRecord {
                    line: line_no,
                    reason,
                    text: line.to_string(),
                });
            }
        }
    }

    report
}

fn product_from_fields(fields: Vec<String>) -> Result<Product, MalformedReason> {
    let [id, name, quantity, price]: [String; 4] = fields
        .try_into()
        .map_err(|f: Vec<String>| MalformedReason::FieldCount(f.len()))?;

    Ok(Product {
        id: parse_int("id", &id)?,
        name,
        quantity: parse_int("quantity", &quantity)?,
        price: parse_int("price", &price)?,
    })
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, MalformedReason> {
    value.parse().map_err(|_| MalformedReason::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Splits one physical line into fields.
///
/// A field counts as quoted only when its closing quote ends the field. Anything
/// else that starts with `"` is read as bare text up to the next delimiter.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut rest = line;
    loop {
        if let Some((field, after)) = rest.strip_prefix(QUOTE).and_then(read_quoted) {
            fields.push(field);
            match after.strip_prefix(DELIMITER) {
                Some(next) => {
                    rest = next;
                    continue;
                }
                None => return fields,
            }
        }
        match rest.split_once(DELIMITER) {
            Some((field, next)) => {
                fields.push(field.to_string());
                rest = next;
            }
            None => {
                fields.push(rest.to_string());
                return fields;
            }
        }
    }
}

/// Reads a quoted field body; the opening quote is already stripped. Returns the
/// unescaped value and the text after the closing quote, which is empty or starts
/// with the delimiter.
fn read_quoted(body: &str) -> Option<(String, &str)> {
    let mut field = String::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != QUOTE {
            field.push(c);
            continue;
        }
        let after = &body[i + 1..];
        let unescaped = match after.chars().next() {
            None | Some(DELIMITER) => return Some((field, after)),
            Some(QUOTE) => QUOTE,
            Some('n') => '\n',
            Some('r') => '\r',
            Some(_) => return None,
        };
        chars.next();
        field.push(unescaped);
    }
    None
}
