use serde::Deserialize;
use shared::CONFIG;

use super::{FetchError, HttpClient};
use crate::state::{Month, PageCursor};

/// One row of the transactions table
///
/// The backend sends more fields per record (id, category, sold flag, ...);
/// only the displayed ones are decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub title: String,
    pub description: String,
    pub price: f64,
}

impl Transaction {
    /// Cell text in column order: title, description, price
    pub fn cells(&self) -> [String; 3] {
        [self.title.clone(), self.description.clone(), format_price(self.price)]
    }
}

/// Number text as a browser prints it: shortest round-trip digits, with
/// exponent notation outside [1e-6, 1e21)
///
/// 10 -> "10", 10.5 -> "10.5", 1e21 -> "1e+21", 1.5e-7 -> "1.5e-7"
fn format_price(price: f64) -> String {
    if price == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }

    let magnitude = price.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return price.to_string();
    }

    let exp = format!("{:e}", price);
    match exp.split_once('e') {
        Some((digits, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", digits, exponent),
        _ => exp,
    }
}

/// Build the transactions URL
///
/// The search text goes in verbatim. A search containing `&` or `#` produces a
/// broken query string; the backend sees whatever the browser makes of it.
pub fn transactions_url(month: Month, search_text: &str, page: PageCursor) -> String {
    format!(
        "{}{}?month={}&searchText={}&page={}",
        CONFIG.api_base, CONFIG.endpoints.transactions, month, search_text, page
    )
}

/// Fetch one page of transactions for a month, filtered by search text
pub async fn fetch_transactions<C: HttpClient>(
    client: &C,
    month: Month,
    search_text: &str,
    page: PageCursor,
) -> Result<Vec<Transaction>, FetchError> {
    client.get_json(&transactions_url(month, search_text, page)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_url() {
        let mut page = PageCursor::FIRST;
        page.next();
        let url = transactions_url(Month::MARCH, "phone", page);
        assert_eq!(url, format!("{}/api/transactions?month=3&searchText=phone&page=2", CONFIG.api_base));
    }

    #[test]
    fn test_search_text_is_not_encoded() {
        let url = transactions_url(Month::MARCH, "a b&c", PageCursor::FIRST);
        assert_eq!(url, format!("{}/api/transactions?month=3&searchText=a b&c&page=1", CONFIG.api_base));
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"[{"id":1,"title":"A","description":"d1","price":10,"category":"x","sold":true}]"#;
        let rows: Vec<Transaction> = serde_json::from_str(json).unwrap();
        assert_eq!(
            rows,
            vec![Transaction {
                title: "A".to_string(),
                description: "d1".to_string(),
                price: 10.0,
            }]
        );
    }

    #[test]
    fn test_cells_render_plain_values() {
        let row = Transaction {
            title: "<b>Mug</b>".to_string(),
            description: "Ceramic".to_string(),
            price: 329.85,
        };
        assert_eq!(row.cells(), ["<b>Mug</b>", "Ceramic", "329.85"]);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0), "10");
        assert_eq!(format_price(10.5), "10.5");
        assert_eq!(format_price(-0.0), "0");
        assert_eq!(format_price(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_price_exponent_range() {
        assert_eq!(format_price(1e21), "1e+21");
        assert_eq!(format_price(-2.5e22), "-2.5e+22");
        assert_eq!(format_price(1e-7), "1e-7");
        assert_eq!(format_price(1.5e-7), "1.5e-7");
        assert_eq!(format_price(1e-6), "0.000001");
        assert_eq!(format_price(123456789012345680000.0), "123456789012345680000");
    }
}
