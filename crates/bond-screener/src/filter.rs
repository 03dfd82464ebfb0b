//! Conjunction filter engine over bond records
//!
//! Every present criterion must hold for a record to pass; absent criteria
//! never constrain. Records missing a numerically-filtered field are
//! excluded rather than defaulted to pass.

use crate::model::{BondRecord, FilterCriteria};
use chrono::{Days, NaiveDate, Utc};

/// Keep the records satisfying every present criterion, preserving input
/// order
pub fn apply(records: Vec<BondRecord>, criteria: &FilterCriteria) -> Vec<BondRecord> {
    let today = Utc::now().date_naive();
    records
        .into_iter()
        .filter(|record| matches_at(record, criteria, today))
        .collect()
}

/// True when the record satisfies every present criterion
pub fn matches(record: &BondRecord, criteria: &FilterCriteria) -> bool {
    matches_at(record, criteria, Utc::now().date_naive())
}

fn matches_at(record: &BondRecord, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    if !meets_min(record.couponpercent, criteria.min_coupon_percent) {
        return false;
    }
    if !meets_max(record.couponpercent, criteria.max_coupon_percent) {
        return false;
    }
    if !meets_min(record.effectiveyield, criteria.min_effective_yield) {
        return false;
    }
    if !meets_max(record.effectiveyield, criteria.max_effective_yield) {
        return false;
    }
    if !meets_min(record.duration, criteria.min_duration) {
        return false;
    }
    if !meets_max(record.duration, criteria.max_duration) {
        return false;
    }

    if let Some(wanted) = &criteria.status {
        if record.status.as_deref() != Some(wanted.as_str()) {
            return false;
        }
    }

    if let Some(wanted) = &criteria.credit_rating {
        match &record.creditrating {
            Some(rating) if rating.eq_ignore_ascii_case(wanted) => {}
            _ => return false,
        }
    }

    if let Some(years) = criteria.years_to_maturity {
        if years > 0 && !matures_within(record, today, years) {
            return false;
        }
    }

    // Only a maturity date that parses as a valid calendar day strictly in
    // the past excludes; the sentinel, missing and malformed dates are all
    // treated as not matured.
    if criteria.exclude_matured {
        if let Some(maturity) = record.maturity() {
            if maturity < today {
                return false;
            }
        }
    }

    true
}

fn matures_within(record: &BondRecord, today: NaiveDate, years: u32) -> bool {
    let Some(maturity) = record.maturity() else {
        return false;
    };
    let Some(upper) = today.checked_add_days(Days::new(365 * u64::from(years))) else {
        return false;
    };
    maturity >= today && maturity <= upper
}

fn meets_min(value: Option<f64>, bound: Option<f64>) -> bool {
    match (bound, value) {
        (None, _) => true,
        (Some(min), Some(value)) => value >= min,
        (Some(_), None) => false,
    }
}

fn meets_max(value: Option<f64>, bound: Option<f64>) -> bool {
    match (bound, value) {
        (None, _) => true,
        (Some(max), Some(value)) => value <= max,
        (Some(_), None) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_coupon(secid: &str, coupon: Option<f64>) -> BondRecord {
        BondRecord {
            secid: Some(secid.to_string()),
            couponpercent: coupon,
            ..Default::default()
        }
    }

    fn with_matdate(matdate: &str) -> BondRecord {
        BondRecord {
            matdate: Some(matdate.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_min_coupon_excludes_missing_field() {
        let records = vec![
            with_coupon("LOW", Some(10.0)),
            with_coupon("HIGH", Some(25.0)),
            with_coupon("BARE", None),
        ];
        let criteria = FilterCriteria {
            min_coupon_percent: Some(20.0),
            ..Default::default()
        };

        let kept = apply(records, &criteria);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].secid.as_deref(), Some("HIGH"));
    }

    #[test]
    fn test_exclude_matured_only_drops_valid_past_dates() {
        let records = vec![
            with_matdate("2000-01-01"),
            with_matdate("2999-01-01"),
            with_matdate("0000-00-00"),
            with_matdate("not-a-date"),
        ];
        let criteria = FilterCriteria {
            exclude_matured: true,
            ..Default::default()
        };

        let kept = apply(records, &criteria);

        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|r| r.matdate.as_deref() != Some("2000-01-01")));
    }

    #[test]
    fn test_criteria_combine_by_and() {
        let mut active = with_coupon("ACTIVE", Some(12.0));
        active.status = Some("A".to_string());
        let mut suspended = with_coupon("SUSPENDED", Some(12.0));
        suspended.status = Some("S".to_string());
        let mut low = with_coupon("LOW", Some(5.0));
        low.status = Some("A".to_string());

        let criteria = FilterCriteria {
            min_coupon_percent: Some(10.0),
            status: Some("A".to_string()),
            ..Default::default()
        };

        let kept = apply(vec![active, suspended, low], &criteria);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].secid.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn test_status_requires_exact_equality() {
        let criteria = FilterCriteria {
            status: Some("A".to_string()),
            ..Default::default()
        };

        let mut record = BondRecord::default();
        assert!(!matches(&record, &criteria));

        record.status = Some("N".to_string());
        assert!(!matches(&record, &criteria));

        record.status = Some("A".to_string());
        assert!(matches(&record, &criteria));
    }

    #[test]
    fn test_credit_rating_matches_case_insensitively() {
        let criteria = FilterCriteria {
            credit_rating: Some("AAA".to_string()),
            ..Default::default()
        };

        let mut record = BondRecord::default();
        assert!(!matches(&record, &criteria));

        record.creditrating = Some("aaa".to_string());
        assert!(matches(&record, &criteria));
    }

    #[test]
    fn test_years_to_maturity_window() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
        let criteria = FilterCriteria {
            years_to_maturity: Some(2),
            ..Default::default()
        };

        let inside = with_matdate("2027-06-01");
        let beyond = with_matdate("2040-01-01");
        let undated = with_matdate("0000-00-00");

        assert!(matches_at(&inside, &criteria, today));
        assert!(!matches_at(&beyond, &criteria, today));
        assert!(!matches_at(&undated, &criteria, today));
    }

    #[test]
    fn test_duration_bounds() {
        let criteria = FilterCriteria {
            min_duration: Some(365.0),
            max_duration: Some(1000.0),
            ..Default::default()
        };

        let mut record = BondRecord::default();
        assert!(!matches(&record, &criteria));

        record.duration = Some(100.0);
        assert!(!matches(&record, &criteria));

        record.duration = Some(500.0);
        assert!(matches(&record, &criteria));

        record.duration = Some(2000.0);
        assert!(!matches(&record, &criteria));
    }

    #[test]
    fn test_output_preserves_input_order() {
        let records = vec![
            with_coupon("C", Some(30.0)),
            with_coupon("A", Some(25.0)),
            with_coupon("B", Some(28.0)),
        ];
        let criteria = FilterCriteria {
            min_coupon_percent: Some(20.0),
            ..Default::default()
        };

        let kept = apply(records, &criteria);

        let order: Vec<_> = kept.iter().filter_map(|r| r.secid.as_deref()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_criteria_keep_everything() {
        let records = vec![with_coupon("ANY", None), BondRecord::default()];
        let kept = apply(records, &FilterCriteria::default());
        assert_eq!(kept.len(), 2);
    }
}
