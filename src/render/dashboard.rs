use chrono::NaiveDateTime;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{GameEntry, GamePage};

/// Footer timestamp format, e.g. `2024-05-01 13:45:09`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const STYLESHEET: &str = r#"
        body { font-family: Arial, sans-serif; background-color: #f4f4f4; color: #333; padding: 20px; }
        h1 { color: #2c3e50; text-align: center; }
        .game-container { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 20px; justify-content: center; padding: 0 10px; }
        .game { background: #fff; padding: 20px; border-radius: 10px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
        .game h2 { font-size: 1.2em; color: #16a085; text-align: center; margin: 10px 0; }
        .prices { margin-top: 10px; }
        .price { margin: 5px 0; font-size: 1em; text-align: center; }
        .price span { font-weight: bold; color: #e74c3c; }
        .price-button { margin-top: 10px; text-align: center; }
        .price-button a { padding: 10px 20px; background-color: #3498db; color: white; text-decoration: none; border-radius: 5px; }
        .price-button a:hover { background-color: #2980b9; }
        img.game-image { display: block; margin: 0 auto; width: 100%; max-width: 240px; height: auto; }
        .update-time { text-align: center; margin-top: 20px; font-size: 1.2em; color: #8e44ad; }
        @media screen and (max-width: 1200px) {
            .game { padding: 15px; }
        }
        @media screen and (max-width: 800px) {
            .game h2 { font-size: 1.1em; }
            .price-button a { font-size: 0.9em; }
        }
"#;

pub fn format_timestamp(captured_at: &NaiveDateTime) -> String {
    captured_at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the whole dashboard: one card per entry, in order, plus a footer
/// with the capture time. The page reloads itself every `refresh_seconds`.
pub fn render_dashboard(
    entries: &[GameEntry],
    captured_at: &NaiveDateTime,
    refresh_seconds: u64,
) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="refresh" content="{refresh_seconds}">
    <title>Game Prices</title>
    <style>{STYLESHEET}    </style>
</head>
<body>
    <h1>Game Prices</h1>
    <div class="game-container">
"#
    );

    for entry in entries {
        match entry {
            GameEntry::Found(page) if entry.is_found() => {
                html.push_str(&render_card(page));
            }
            // Blank title or no price rows counts as a failed fetch
            _ => html.push_str(&render_failure_card(entry.url())),
        }
    }

    html.push_str(&format!(
        "    </div>\n    <div class=\"update-time\">Last Update: {}</div>\n</body>\n</html>\n",
        format_timestamp(captured_at)
    ));

    html
}

fn render_card(page: &GamePage) -> String {
    let mut card = String::from("<div class=\"game\">\n");

    if let Some(image_url) = &page.image_url {
        card.push_str(&format!(
            "<img class=\"game-image\" src=\"{}\" alt=\"{}\">\n",
            encode_double_quoted_attribute(image_url),
            encode_double_quoted_attribute(&page.title)
        ));
    }

    card.push_str(&format!("<h2>{}</h2>\n", encode_text(&page.title)));

    card.push_str("<div class=\"prices\">\n");
    for (rank, record) in page.top_prices.iter().enumerate() {
        card.push_str(&format!(
            "<div class=\"price\">#{} {}: <span>{}</span></div>\n",
            rank + 1,
            encode_text(&record.region),
            encode_text(&record.price)
        ));
    }
    card.push_str("</div>\n");

    card.push_str(&format!(
        "<div class=\"price-button\"><a href=\"{}\" target=\"_blank\" rel=\"noopener\">Go to Game Page</a></div>\n",
        encode_double_quoted_attribute(&page.source_url)
    ));

    card.push_str("</div>\n");
    card
}

fn render_failure_card(url: &str) -> String {
    format!(
        "<div class=\"game\"><h2>Could not fetch data for URL: {}</h2></div>\n",
        encode_text(url)
    )
}
