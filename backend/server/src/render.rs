//! # Views
//!
//! Rendering is a pure function of a [`Page`] and the data it borrows. The
//! [`Renderer`] trait is the seam for swapping in a different engine; handlers
//! only ever build a [`Page`].
use std::fmt::Write;

use crate::{stock::StockStore, temperature::TemperatureReading};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub enum Page<'a> {
    Home,
    AddItemForm,
    Stock(&'a StockStore),
    Temperature(&'a [TemperatureReading]),
    ExpiredItems(&'a [String]),
    Recipes(&'a [String]),
    Camera(Option<&'a str>),
}

impl Page<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::AddItemForm => "add_item_form",
            Page::Stock(_) => "stock",
            Page::Temperature(_) => "temperature",
            Page::ExpiredItems(_) => "expired_items",
            Page::Recipes(_) => "recipes",
            Page::Camera(_) => "camera",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Page::Home => "Fridge",
            Page::AddItemForm => "Add item",
            Page::Stock(_) => "Stock",
            Page::Temperature(_) => "Temperature",
            Page::ExpiredItems(_) => "Expired items",
            Page::Recipes(_) => "Recipes",
            Page::Camera(_) => "Camera",
        }
    }
}

pub trait Renderer: Send + Sync {
    fn render(&self, page: &Page<'_>) -> Result<String, std::fmt::Error>;
}

/// Built-in HTML views.
#[derive(Default)]
pub struct HtmlRenderer;

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/add_item_form", "Add item"),
    ("/stock", "Stock"),
    ("/temperature", "Temperature"),
    ("/expired_items", "Expired items"),
    ("/recipes", "Recipes"),
    ("/capture_image", "Camera"),
];

impl Renderer for HtmlRenderer {
    fn render(&self, page: &Page<'_>) -> Result<String, std::fmt::Error> {
        let mut body = String::new();

        match page {
            Page::Home => home(&mut body)?,
            Page::AddItemForm => add_item_form(&mut body)?,
            Page::Stock(stock) => stock_table(&mut body, stock)?,
            Page::Temperature(readings) => temperature_table(&mut body, readings)?,
            Page::ExpiredItems(items) => name_list(&mut body, items, "No expired items.")?,
            Page::Recipes(recipes) => {
                name_list(&mut body, recipes, "No recipes available with current stock.")?
            }
            Page::Camera(image) => camera(&mut body, *image)?,
        }

        Ok(layout(page.title(), &body))
    }
}

fn layout(title: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a> "#))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<nav>{nav}</nav>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

fn home(out: &mut String) -> std::fmt::Result {
    writeln!(out, "<p>Inventory and temperature control for the fridge.</p>")?;
    writeln!(out, "<ul>")?;
    for (href, label) in NAV.iter().skip(1) {
        writeln!(out, r#"<li><a href="{href}">{label}</a></li>"#)?;
    }
    writeln!(out, "</ul>")?;
    writeln!(out, r#"<form method="post" action="/set_temperature_form">"#)?;
    temperature_input(out)?;
    writeln!(out, "</form>")
}

fn add_item_form(out: &mut String) -> std::fmt::Result {
    writeln!(out, r#"<form method="post" action="/add_item_form">"#)?;
    writeln!(out, r#"<label>Name <input type="text" name="name" required></label>"#)?;
    writeln!(
        out,
        r#"<label>Quantity <input type="number" name="quantity" step="1" required></label>"#
    )?;
    writeln!(
        out,
        r#"<label>Expiration date <input type="date" name="expiration_date" required></label>"#
    )?;
    writeln!(out, r#"<button type="submit">Add</button>"#)?;
    writeln!(out, "</form>")
}

fn temperature_input(out: &mut String) -> std::fmt::Result {
    writeln!(
        out,
        r#"<label>Temperature (°C) <input type="number" name="temperature" step="0.1" required></label>"#
    )?;
    writeln!(out, r#"<button type="submit">Set</button>"#)
}

fn stock_table(out: &mut String, stock: &StockStore) -> std::fmt::Result {
    if stock.is_empty() {
        return writeln!(out, "<p>No items in stock.</p>");
    }

    writeln!(out, "<table>")?;
    writeln!(out, "<tr><th>Item</th><th>Quantity</th><th>Expiration date</th></tr>")?;
    for (name, entry) in stock.items() {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(name),
            entry.quantity,
            entry.expiration_date,
        )?;
    }
    writeln!(out, "</table>")
}

fn temperature_table(out: &mut String, readings: &[TemperatureReading]) -> std::fmt::Result {
    writeln!(out, r#"<form method="post" action="/set_temperature_form">"#)?;
    temperature_input(out)?;
    writeln!(out, "</form>")?;

    if readings.is_empty() {
        return writeln!(out, "<p>No readings yet.</p>");
    }

    writeln!(out, "<table>")?;
    writeln!(out, "<tr><th>Time</th><th>Temperature (°C)</th></tr>")?;
    for reading in readings {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            reading.timestamp.format(TIMESTAMP_FORMAT),
            reading.temperature,
        )?;
    }
    writeln!(out, "</table>")
}

fn name_list(out: &mut String, names: &[String], empty: &str) -> std::fmt::Result {
    if names.is_empty() {
        return writeln!(out, "<p>{empty}</p>");
    }

    writeln!(out, "<ul>")?;
    for name in names {
        writeln!(out, "<li>{}</li>", escape(name))?;
    }
    writeln!(out, "</ul>")
}

fn camera(out: &mut String, image: Option<&str>) -> std::fmt::Result {
    match image {
        Some(src) => writeln!(out, r#"<img src="{}" alt="Captured image">"#, escape(src)),
        None => writeln!(out, "<p>No image captured.</p>"),
    }
}

pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone};

    use super::*;
    use crate::stock::StockEntry;

    fn render(page: Page<'_>) -> String {
        HtmlRenderer.render(&page).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Olive Oil"), "Olive Oil");
    }

    #[test]
    fn test_page_names() {
        assert_eq!(Page::Home.name(), "index");
        assert_eq!(Page::Camera(None).name(), "camera");
        assert_eq!(Page::ExpiredItems(&[]).name(), "expired_items");
    }

    #[test]
    fn test_add_item_form_fields() {
        let html = render(Page::AddItemForm);

        assert!(html.contains(r#"action="/add_item_form""#));
        for field in ["name", "quantity", "expiration_date"] {
            assert!(html.contains(&format!(r#"name="{field}""#)));
        }
    }

    #[test]
    fn test_stock_rows() {
        let mut stock = StockStore::new();
        stock.add_item(
            "Milk <2%>".into(),
            StockEntry {
                quantity: 2,
                expiration_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            },
        );

        let html = render(Page::Stock(&stock));

        assert!(html.contains("<td>Milk &lt;2%&gt;</td><td>2</td><td>2025-01-01</td>"));
    }

    #[test]
    fn test_temperature_rows() {
        let readings = [TemperatureReading {
            timestamp: Local.with_ymd_and_hms(2025, 1, 1, 8, 30, 0).unwrap(),
            temperature: 4.5,
        }];

        let html = render(Page::Temperature(&readings));

        assert!(html.contains("<td>2025-01-01 08:30:00</td><td>4.5</td>"));
    }

    #[test]
    fn test_empty_lists() {
        assert!(render(Page::ExpiredItems(&[])).contains("No expired items."));
        assert!(render(Page::Recipes(&[])).contains("No recipes available"));
        assert!(render(Page::Stock(&StockStore::new())).contains("No items in stock."));
    }

    #[test]
    fn test_camera_image_reference() {
        let with_image = render(Page::Camera(Some("/static/captured_image.jpg")));
        assert!(with_image.contains(r#"<img src="/static/captured_image.jpg""#));

        let without_image = render(Page::Camera(None));
        assert!(!without_image.contains("<img"));
        assert!(without_image.contains("No image captured."));
    }
}
