//! Core record types and ingestion-time numeric coercion.
//!
//! Backends deliver `unique_views` as a JSON string or number; it is
//! coerced to an integer exactly once, at deserialization. A missing or
//! non-coercible value is a backend contract violation and fails the run.

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single search hit returned by a backend.
///
/// All backend-sourced fields are immutable after ingestion. The only
/// mutable field is `relevancy_score`, a derived attribute computed (and
/// possibly recomputed) by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier, unique per underlying app. The same app may
    /// appear in multiple backend responses, so this is the dedup key,
    /// not a per-instance id.
    pub app_id: String,
    /// Display title, opaque to the pipeline.
    pub title: String,
    /// Display owner, opaque to the pipeline.
    pub owner: String,
    /// Popularity counter. Accepts a JSON number or a numeric string.
    #[serde(deserialize_with = "views_from_string_or_number")]
    pub unique_views: u64,
    /// Backend-assigned raw relevance signal, present only when the
    /// backend was asked for it.
    #[serde(
        rename = "@CONFIDENCE_SCORE",
        default,
        deserialize_with = "confidence_from_string_or_number"
    )]
    pub confidence_score: Option<f64>,
    /// Derived relevancy. Absent on raw backend output; computed by the
    /// scoring stage and recomputed by the view booster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevancy_score: Option<f64>,
}

/// An ordered sequence of records produced by one backend query.
///
/// Order is backend-assigned relevance order and is preserved through
/// interleaving.
pub type ResultSet = Vec<Record>;

fn views_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct ViewsVisitor;

    impl de::Visitor<'_> for ViewsVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer or a string holding one")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(ViewsVisitor)
}

fn confidence_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ConfidenceVisitor;

    impl de::Visitor<'_> for ConfidenceVisitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Option<f64>, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Option<f64>, E> {
            Ok(Some(v as f64))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Option<f64>, E> {
            Ok(Some(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Option<f64>, E> {
            v.trim()
                .parse()
                .map(Some)
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Option<f64>, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(ConfidenceVisitor)
}
