//! Display Helpers

use chrono::NaiveDate;

/// `₹1.2 Cr` -> `₹ 1.2 Cr`
pub fn format_price(price: &str) -> String {
    price.replacen('₹', "₹ ", 1)
}

/// `2024-03-15` -> `15 March 2024`; anything unparseable is shown as-is
pub fn format_review_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%-d %B %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// First `limit` features plus how many were left out
pub fn feature_preview(features: &[String], limit: usize) -> (&[String], usize) {
    let shown = features.len().min(limit);
    (&features[..shown], features.len() - shown)
}

/// (filled, empty) star counts out of five
pub fn rating_stars(rating: u8) -> (usize, usize) {
    let filled = usize::from(rating.min(5));
    (filled, 5 - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("₹1.2 Cr"), "₹ 1.2 Cr");
        assert_eq!(format_price("₹25,000/month"), "₹ 25,000/month");
        assert_eq!(format_price("Price on request"), "Price on request");
    }

    #[test]
    fn test_format_review_date() {
        assert_eq!(format_review_date("2024-03-15"), "15 March 2024");
        assert_eq!(format_review_date("2023-11-02"), "2 November 2023");
        assert_eq!(format_review_date("last spring"), "last spring");
    }

    #[test]
    fn test_feature_preview() {
        let features: Vec<String> = ["Pool", "Garden", "Gym", "Lift", "Parking"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (shown, rest) = feature_preview(&features, 3);
        assert_eq!(shown.len(), 3);
        assert_eq!(rest, 2);

        let (shown, rest) = feature_preview(&features[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(4), (4, 1));
        assert_eq!(rating_stars(0), (0, 5));
        assert_eq!(rating_stars(9), (5, 0));
    }
}
