//! Formatting helpers shared by the terminal UI and the HTML export.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Shown in a stat counter when there is no value.
pub const STAT_PLACEHOLDER: &str = "\u{2014}";

static URL_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?:)?//").expect("Invalid URL scheme regex"));

/// Compact counter formatting: values of 1000 and above become thousands with
/// one decimal, and a trailing `.0` is dropped.
///
/// ```
/// use ghtrack::render::format_num;
///
/// assert_eq!(format_num(Some(950)), "950");
/// assert_eq!(format_num(Some(1500)), "1.5k");
/// assert_eq!(format_num(Some(2000)), "2k");
/// assert_eq!(format_num(None), "\u{2014}");
/// ```
pub fn format_num(value: Option<u64>) -> String {
    match value {
        None => STAT_PLACEHOLDER.to_string(),
        Some(n) if n >= 1000 => {
            // x.25k is the one exact tie that half-even would round down
            let thousands = if n % 1000 == 250 {
                let tenths = n / 100 + 1;
                format!("{}.{}", tenths / 10, tenths % 10)
            } else {
                format!("{:.1}", n as f64 / 1000.0)
            };
            let trimmed = thousands.strip_suffix(".0").unwrap_or(&thousands);
            format!("{}k", trimmed)
        }
        Some(n) => n.to_string(),
    }
}

/// Prefix `https://` when the stored link has no scheme.
pub fn format_url(url: &str) -> String {
    if URL_SCHEME.is_match(url) {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Make API text safe to draw in a terminal cell grid.
///
/// Line breaks and tabs collapse to a space; other control characters
/// (including ESC) are dropped so remote text cannot drive the terminal.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter_map(|ch| match ch {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Date in the `Tue Jan 25 2011` style used by the "Joined" chip.
pub fn format_long_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%a %b %d %Y").to_string()
}

/// Date in the short `1/26/2011` style used on repository cards.
pub fn format_short_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y").to_string()
}
