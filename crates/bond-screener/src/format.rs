//! Rendering bond records into chat-ready text

use crate::model::{BondRecord, FilterCriteria};

/// Placeholder rendered in place of any missing field
pub const MISSING: &str = "N/A";

/// Fixed reply for searches with zero matches
pub const NO_RESULTS: &str = "❌ No bonds matched your filters";

/// Notice appended to ticker lookups when the response carries no rating
pub const RATING_UNAVAILABLE: &str =
    "⚠️ Credit rating data is not available through the free ISS API";

/// Render one bond as a fixed-layout multi-line block
pub fn format_bond(record: &BondRecord) -> String {
    let name = record
        .shortname
        .as_deref()
        .or(record.secname.as_deref())
        .unwrap_or(MISSING);

    format!(
        "📊 {name}\n\
         🆔 Ticker: {secid}\n\
         💰 Coupon: {coupon}\n\
         📈 Effective yield: {effective_yield}\n\
         💵 Price: {price}\n\
         📅 Maturity: {maturity}\n\
         ⏱ Duration: {duration}\n\
         🔖 ISIN: {isin}",
        secid = text(record.secid.as_deref()),
        coupon = percent(record.couponpercent),
        effective_yield = percent(record.effectiveyield),
        price = number(record.price()),
        maturity = text(record.matdate.as_deref()),
        duration = days(record.duration),
        isin = text(record.isin.as_deref()),
    )
}

/// Render a bounded list of bonds: a header with the total match count and
/// the number shown, then one block per shown record in input order
pub fn format_bond_list(records: &[BondRecord], limit: usize) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }

    let shown = records.len().min(limit);
    let mut out = format!("🔎 Found {} bonds, showing {shown}:\n", records.len());
    for record in records.iter().take(limit) {
        out.push('\n');
        out.push_str(&format_bond(record));
        out.push('\n');
    }
    out
}

/// Render the user's saved criteria, one line per set field
pub fn format_criteria(criteria: &FilterCriteria) -> String {
    let mut out = String::from("⚙️ Current search filters:\n");
    let mut any = false;

    if let Some(rating) = &criteria.credit_rating {
        out.push_str(&format!("🏆 Credit rating: {rating}\n"));
        any = true;
    }
    if let Some(min) = criteria.min_coupon_percent {
        out.push_str(&format!("📈 Min coupon: {min}%\n"));
        any = true;
    }
    if let Some(max) = criteria.max_coupon_percent {
        out.push_str(&format!("📉 Max coupon: {max}%\n"));
        any = true;
    }
    if let Some(min) = criteria.min_effective_yield {
        out.push_str(&format!("📈 Min effective yield: {min}%\n"));
        any = true;
    }
    if let Some(max) = criteria.max_effective_yield {
        out.push_str(&format!("📉 Max effective yield: {max}%\n"));
        any = true;
    }
    if let Some(min) = criteria.min_duration {
        out.push_str(&format!("⏱ Min duration: {min} days\n"));
        any = true;
    }
    if let Some(max) = criteria.max_duration {
        out.push_str(&format!("⏰ Max duration: {max} days\n"));
        any = true;
    }
    if let Some(years) = criteria.years_to_maturity {
        out.push_str(&format!("📅 Years to maturity: {years}\n"));
        any = true;
    }

    if !any {
        out.push_str("No filters configured yet\n");
    }
    out.push_str("\nUse /set <param> <value> to change, /search to run");
    out
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}%"))
}

fn number(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}"))
}

fn days(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.0} days"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bond() -> BondRecord {
        BondRecord {
            secid: Some("RU000A0JX0J2".to_string()),
            shortname: Some("Bond One".to_string()),
            isin: Some("RU000A0JX0J2".to_string()),
            matdate: Some("2027-06-01".to_string()),
            couponpercent: Some(8.15),
            effectiveyield: Some(11.4),
            duration: Some(730.0),
            last: Some(101.35),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_bond_full_record() {
        let text = format_bond(&sample_bond());

        assert!(text.starts_with("📊 Bond One"));
        assert!(text.contains("🆔 Ticker: RU000A0JX0J2"));
        assert!(text.contains("💰 Coupon: 8.15%"));
        assert!(text.contains("📈 Effective yield: 11.40%"));
        assert!(text.contains("💵 Price: 101.35"));
        assert!(text.contains("📅 Maturity: 2027-06-01"));
        assert!(text.contains("⏱ Duration: 730 days"));
        assert!(text.contains("🔖 ISIN: RU000A0JX0J2"));
    }

    #[test]
    fn test_missing_effective_yield_renders_placeholder() {
        let mut bond = sample_bond();
        bond.effectiveyield = None;

        let text = format_bond(&bond);
        assert!(text.contains("📈 Effective yield: N/A"));
    }

    #[test]
    fn test_empty_record_is_all_placeholders() {
        let text = format_bond(&BondRecord::default());
        assert_eq!(text.matches(MISSING).count(), 8);
    }

    #[test]
    fn test_price_falls_back_through_candidates() {
        let mut bond = sample_bond();
        bond.last = None;
        bond.waprice = Some(100.9);
        assert!(format_bond(&bond).contains("💵 Price: 100.90"));

        bond.waprice = None;
        bond.prevprice = Some(99.8);
        assert!(format_bond(&bond).contains("💵 Price: 99.80"));

        bond.prevprice = None;
        assert!(format_bond(&bond).contains("💵 Price: N/A"));
    }

    #[test]
    fn test_empty_list_is_fixed_no_results_message() {
        assert_eq!(format_bond_list(&[], 5), NO_RESULTS);
    }

    #[test]
    fn test_list_header_counts_total_and_shown() {
        let records = vec![sample_bond(); 7];
        let text = format_bond_list(&records, 5);

        assert!(text.starts_with("🔎 Found 7 bonds, showing 5:"));
        assert_eq!(text.matches("📊 Bond One").count(), 5);
    }

    #[test]
    fn test_list_below_limit_shows_everything() {
        let records = vec![sample_bond(); 2];
        let text = format_bond_list(&records, 5);

        assert!(text.starts_with("🔎 Found 2 bonds, showing 2:"));
        assert_eq!(text.matches("📊 Bond One").count(), 2);
    }

    #[test]
    fn test_format_criteria_lists_set_fields_only() {
        let criteria = FilterCriteria {
            credit_rating: Some("AAA".to_string()),
            min_coupon_percent: Some(8.0),
            ..Default::default()
        };

        let text = format_criteria(&criteria);
        assert!(text.contains("🏆 Credit rating: AAA"));
        assert!(text.contains("📈 Min coupon: 8%"));
        assert!(!text.contains("Max coupon"));
    }

    #[test]
    fn test_format_criteria_empty() {
        let text = format_criteria(&FilterCriteria::default());
        assert!(text.contains("No filters configured yet"));
    }
}
