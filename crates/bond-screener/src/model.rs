//! Bond record and filter criteria types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Sentinel maturity date the provider emits for undated issues
pub const SENTINEL_MATURITY: &str = "0000-00-00";

/// A single bond as assembled from one or more provider tables.
///
/// Every known provider column has a dedicated optional field; columns the
/// provider adds later land in [`extra`](Self::extra) lower-cased, prefixed
/// with the source table name when they arrive through an auxiliary-table
/// merge. A field absent from the provider response is simply `None` —
/// consumers must supply their own fallback on access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Security identifier, the join key across provider tables
    pub secid: Option<String>,
    /// Short display name
    pub shortname: Option<String>,
    /// Full security name
    pub secname: Option<String>,
    /// International securities identification number
    pub isin: Option<String>,
    /// Issuer name, when the response carries one
    pub emitent: Option<String>,
    /// Face value of one bond
    pub facevalue: Option<f64>,
    /// Currency of the face value
    pub faceunit: Option<String>,
    /// Maturity date as the provider sent it (`YYYY-MM-DD`)
    pub matdate: Option<String>,
    /// Coupon payment in face-value currency
    pub couponvalue: Option<f64>,
    /// Coupon rate, percent of face value
    pub couponpercent: Option<f64>,
    /// Effective yield to maturity, percent
    pub effectiveyield: Option<f64>,
    /// Duration in days
    pub duration: Option<f64>,
    /// Credit rating, when the response carries one
    pub creditrating: Option<String>,
    /// Trading status ("A" = active)
    pub status: Option<String>,
    /// Previous session close price
    pub prevprice: Option<f64>,
    /// Last trade price (market data)
    pub last: Option<f64>,
    /// Weighted average price (market data)
    pub waprice: Option<f64>,
    /// Provider columns without a dedicated field
    pub extra: HashMap<String, Value>,
}

impl BondRecord {
    /// Build a record by zipping column names with one data row.
    ///
    /// Field names are lower-cased on ingestion. A row shorter than the
    /// column list yields a record missing the unindexable fields; a longer
    /// row drops the tail.
    pub fn from_columns(columns: &[String], row: &[Value]) -> Self {
        let mut record = Self::default();
        for (column, value) in columns.iter().zip(row.iter()) {
            record.set_field(&column.to_lowercase(), value, None);
        }
        record
    }

    /// Merge one auxiliary row into this record.
    ///
    /// Left-outer semantics: fields already present are kept; auxiliary
    /// values only fill gaps. Unrecognized columns are stored in `extra`
    /// under `{prefix}_{column}` when a prefix is given.
    pub fn merge_row(&mut self, columns: &[String], row: &[Value], prefix: Option<&str>) {
        for (column, value) in columns.iter().zip(row.iter()) {
            self.set_field(&column.to_lowercase(), value, prefix);
        }
    }

    fn set_field(&mut self, name: &str, value: &Value, prefix: Option<&str>) {
        if value.is_null() {
            return;
        }
        match name {
            "secid" => fill_text(&mut self.secid, value),
            "shortname" => fill_text(&mut self.shortname, value),
            "secname" => fill_text(&mut self.secname, value),
            "isin" => fill_text(&mut self.isin, value),
            "emitent" | "emitentname" => fill_text(&mut self.emitent, value),
            "facevalue" => fill_number(&mut self.facevalue, value),
            "faceunit" => fill_text(&mut self.faceunit, value),
            "matdate" => fill_text(&mut self.matdate, value),
            "couponvalue" => fill_number(&mut self.couponvalue, value),
            "couponpercent" => fill_number(&mut self.couponpercent, value),
            "effectiveyield" => fill_number(&mut self.effectiveyield, value),
            "duration" => fill_number(&mut self.duration, value),
            "creditrating" => fill_text(&mut self.creditrating, value),
            "status" => fill_text(&mut self.status, value),
            "prevprice" => fill_number(&mut self.prevprice, value),
            "last" => fill_number(&mut self.last, value),
            "waprice" => fill_number(&mut self.waprice, value),
            other => {
                let key = match prefix {
                    Some(prefix) => format!("{prefix}_{other}"),
                    None => other.to_string(),
                };
                self.extra.entry(key).or_insert_with(|| value.clone());
            }
        }
    }

    /// Maturity date parsed strictly; the sentinel and malformed dates are
    /// both `None` (treated as undated, never matured)
    pub fn maturity(&self) -> Option<NaiveDate> {
        let raw = self.matdate.as_deref()?;
        if raw == SENTINEL_MATURITY {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Display price: last trade, then weighted average, then previous close
    pub fn price(&self) -> Option<f64> {
        self.last.or(self.waprice).or(self.prevprice)
    }

    /// True when any field name mentions a credit rating
    pub fn has_rating(&self) -> bool {
        self.creditrating.is_some() || self.extra.keys().any(|k| k.contains("rating"))
    }
}

fn fill_text(slot: &mut Option<String>, value: &Value) {
    if slot.is_some() {
        return;
    }
    *slot = coerce_text(value);
}

fn fill_number(slot: &mut Option<f64>, value: &Value) {
    if slot.is_some() {
        return;
    }
    *slot = coerce_number(value);
}

/// Coerce a provider value to text; empty strings count as absent
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce a provider value to a float; numeric strings are accepted,
/// anything else is absent
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// User-supplied search thresholds.
///
/// `None` (or `false` for the matured toggle) means no constraint on that
/// dimension; present criteria combine by logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub credit_rating: Option<String>,
    pub min_coupon_percent: Option<f64>,
    pub max_coupon_percent: Option<f64>,
    pub min_effective_yield: Option<f64>,
    pub max_effective_yield: Option<f64>,
    pub min_duration: Option<f64>,
    pub max_duration: Option<f64>,
    pub years_to_maturity: Option<u32>,
    pub status: Option<String>,
    pub exclude_matured: bool,
}

impl FilterCriteria {
    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when some constraint has no server-side query parameter and the
    /// search must go through the full-listing path
    pub fn needs_listing(&self) -> bool {
        self.max_coupon_percent.is_some()
            || self.max_effective_yield.is_some()
            || self.min_duration.is_some()
            || self.max_duration.is_some()
    }

    /// Copy with the standing search defaults applied: active status only,
    /// matured issues excluded. The original value is left untouched.
    pub fn with_search_defaults(&self) -> Self {
        let mut criteria = self.clone();
        criteria.status = Some("A".to_string());
        criteria.exclude_matured = true;
        criteria
    }
}
