//! Popup payloads for each dataset.
//!
//! Dataset files are static and trusted today, but every interpolated value is still
//! escaped so the templates stay safe if the source ever becomes user-editable.

use serde_json::Value;

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Attribute-safe link target. Anything that is not plain http(s) becomes `#`.
pub fn safe_href(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        escape_html(trimmed)
    } else {
        "#".to_string()
    }
}

/// Text value of a record field. Numbers are printed, anything else is empty.
pub fn field_text(record: &Value, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

fn field(record: &Value, name: &str) -> String {
    escape_html(&field_text(record, name))
}

pub fn mosque_popup(record: &Value) -> String {
    let name = field(record, "mosque");
    format!(
        "<h1>{name}</h1>\
         <a href=\"{website}\" target=\"_blank\" rel=\"noopener\">\
         <img src=\"{photo}\" alt=\"{name} Photo\" style=\"max-width: 200px;\"></a>\
         <p><strong>Address:</strong> {address}</p>\
         <p><strong>Telephone:</strong> {telephone}</p>",
        website = safe_href(&field_text(record, "website")),
        photo = safe_href(&field_text(record, "photo")),
        address = field(record, "address"),
        telephone = field(record, "telephone"),
    )
}

pub fn carpark_popup(record: &Value) -> String {
    format!(
        "<h1>{}</h1><p>{}</p>",
        field(record, "carpark_no"),
        field(record, "address"),
    )
}

pub fn musolla_popup(record: &Value) -> String {
    format!(
        "<h1>{}</h1><p><strong>Address:</strong> {}, {}</p>",
        field(record, "Location"),
        field(record, "Address"),
        field(record, "Postal Code"),
    )
}
