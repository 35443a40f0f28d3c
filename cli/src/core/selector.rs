//! # Zingers Response Selector
//!
//! File: cli/src/core/selector.rs
//!
//! ## Overview
//!
//! The whole request/response cycle of a submission lives here:
//!
//! 1. `parse_age` turns the raw text of the age field into an integer.
//! 2. `classify` maps the age onto an `AgeBucket`.
//! 3. `build_pool` concatenates the catalog's default list with the bucket's list.
//! 4. `select_response` picks one entry uniformly at random.
//!
//! `ResponseSelector::on_submit` runs those steps in order and applies the
//! configured `InvalidInputPolicy` when the age does not parse. Displaying the
//! result is left to the caller (see `common::ui::ResponseBox`).
//!
//! Nothing here keeps state between submissions. The random source is borrowed
//! per call, so a seeded `StdRng` gives reproducible output.
//!
use crate::core::catalog::{AgeBucket, MessageCatalog};
use crate::core::config::InvalidInputPolicy;
use crate::core::error::ZingerError;
use rand::Rng;
use tracing::{debug, warn};

/// Lower bound (inclusive) of the `Adult` bucket.
pub const ADULT_MIN_AGE: i64 = 25;
/// Lower bound (inclusive) of the `Senior` bucket.
pub const SENIOR_MIN_AGE: i64 = 60;

/// Parses the age field the way a browser's `parseInt(value, 10)` would.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits is used and the rest of the input ignored, so `"17abc"` is
/// 17 and `"4.9"` is 4. Input without any leading digits is `InvalidInput`.
/// Out-of-range values saturate.
pub fn parse_age(raw: &str) -> Result<i64, ZingerError> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return Err(ZingerError::InvalidInput {
            input: raw.trim().to_string(),
        });
    }
    // Only overflow can fail here; `digits` is non-empty ASCII digits.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Maps an age onto its bucket using half-open ranges.
pub fn classify(age: i64) -> AgeBucket {
    if age < ADULT_MIN_AGE {
        AgeBucket::Young
    } else if age < SENIOR_MIN_AGE {
        AgeBucket::Adult
    } else {
        AgeBucket::Senior
    }
}

/// Default messages followed by the bucket's own messages. Duplicates are kept.
pub fn build_pool(bucket: AgeBucket, catalog: &MessageCatalog) -> Vec<&str> {
    catalog
        .default_pool()
        .iter()
        .chain(catalog.bucket_pool(bucket))
        .map(String::as_str)
        .collect()
}

/// Picks one entry of `pool` uniformly at random.
pub fn select_response<'a, R: Rng + ?Sized>(
    pool: &[&'a str],
    rng: &mut R,
) -> Result<&'a str, ZingerError> {
    if pool.is_empty() {
        return Err(ZingerError::EmptyPool {
            pool: "selection".to_string(),
        });
    }
    Ok(pool[rng.gen_range(0..pool.len())])
}

/// What gets shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedResponse {
    pub bucket: AgeBucket,
    pub text: String,
    /// The age did not parse and the fallback bucket was used.
    pub fallback: bool,
}

/// Runs submissions against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector<'a> {
    catalog: &'a MessageCatalog,
    policy: InvalidInputPolicy,
    fallback_bucket: AgeBucket,
}

impl<'a> ResponseSelector<'a> {
    pub fn new(
        catalog: &'a MessageCatalog,
        policy: InvalidInputPolicy,
        fallback_bucket: AgeBucket,
    ) -> Self {
        ResponseSelector {
            catalog,
            policy,
            fallback_bucket,
        }
    }

    /// Handles one submission of the age field.
    pub fn on_submit<R: Rng + ?Sized>(
        &self,
        raw_age: &str,
        rng: &mut R,
    ) -> Result<DisplayedResponse, ZingerError> {
        let (bucket, fallback) = match parse_age(raw_age) {
            Ok(age) => (classify(age), false),
            Err(err) => match self.policy {
                InvalidInputPolicy::Fallback => {
                    warn!(
                        "{}; using the '{}' bucket instead.",
                        err, self.fallback_bucket
                    );
                    (self.fallback_bucket, true)
                }
                InvalidInputPolicy::Reject => return Err(err),
            },
        };
        let pool = build_pool(bucket, self.catalog);
        let text = select_response(&pool, rng)?.to_string();
        debug!(
            "Selected response from '{}' pool of {} messages",
            bucket,
            pool.len()
        );
        Ok(DisplayedResponse {
            bucket,
            text,
            fallback,
        })
    }
}
