pub mod price;

pub use price::*;

use scraper::ElementRef;

/// Concatenated text content of an element, trimmed at both ends.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
