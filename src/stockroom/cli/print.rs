use colored::Colorize;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_NAME_WIDTH: usize = 40;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Load-time warnings go to stderr so they never mix with listed data.
pub(crate) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", message.content.yellow());
    }
}

pub(crate) fn print_products(products: &[Product], currency: &str) {
    for line in format_table(products, currency) {
        println!("{}", line);
    }
}

/// Fixed-width rows as the product's `Display` writes them, under a matching header.
pub(crate) fn format_plain(products: &[Product]) -> Vec<String> {
    let header = format!("{:<5} {:<15} {:<8} {:<8}", "ID", "NAME", "QUANTITY", "PRICE");
    std::iter::once(header)
        .chain(products.iter().map(Product::to_string))
        .collect()
}

/// Renders products as aligned rows, header first. Plain text, no color.
pub(crate) fn format_table(products: &[Product], currency: &str) -> Vec<String> {
    if products.is_empty() {
        return Vec::new();
    }

    let names: Vec<String> = products
        .iter()
        .map(|p| truncate_to_width(&single_line(&p.name), MAX_NAME_WIDTH))
        .collect();
    let prices: Vec<String> = products
        .iter()
        .map(|p| {
            if currency.is_empty() {
                p.price.to_string()
            } else {
                format!("{} {}", p.price, currency)
            }
        })
        .collect();

    let id_w = column_width("ID", products.iter().map(|p| p.id.to_string().width()));
    let name_w = column_width("NAME", names.iter().map(|n| n.width()));
    let qty_w = column_width("QUANTITY", products.iter().map(|p| p.quantity.to_string().width()));
    let price_w = column_width("PRICE", prices.iter().map(|p| p.width()));

    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(format!(
        "{}  {}  {}  {}",
        pad_left("ID", id_w),
        pad_right("NAME", name_w),
        pad_left("QUANTITY", qty_w),
        pad_left("PRICE", price_w),
    ));
    for ((product, name), price) in products.iter().zip(&names).zip(&prices) {
        lines.push(format!(
            "{}  {}  {}  {}",
            pad_left(&product.id.to_string(), id_w),
            pad_right(name, name_w),
            pad_left(&product.quantity.to_string(), qty_w),
            pad_left(price, price_w),
        ));
    }
    lines
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(header.width(), usize::max)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
