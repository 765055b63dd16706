use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::text::ascii_digits;

/// Multiplier applied to the source price when no other margin is configured.
pub const DEFAULT_MARGIN: f64 = 1.15;

/// Prices below this round up to [`SMALL_STEP`], the rest to [`LARGE_STEP`].
const STEP_THRESHOLD: u64 = 1000;
const SMALL_STEP: u64 = 50;
const LARGE_STEP: u64 = 100;

static CURRENCY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[¥￥,]").expect("Failed to compile currency regex"));

/// Target price for a formatted source price such as `¥1,980`.
///
/// Returns 0 when the source price is empty or not a whole number.
pub fn calculate_price(source_price: &str, margin: f64) -> u64 {
    let normalized = ascii_digits(source_price);
    let cleaned = CURRENCY_REGEX.replace_all(&normalized, "");
    let base: u64 = match cleaned.trim().parse() {
        Ok(base) => base,
        Err(err) => {
            warn!(price = source_price, error = %err, "could not parse source price");
            return 0;
        }
    };

    // `as` saturates, so a negative or NaN product becomes 0.
    let scaled = (base as f64 * margin) as u64;
    round_up_price(scaled)
}

pub fn round_up_price(price: u64) -> u64 {
    let step = if price < STEP_THRESHOLD {
        SMALL_STEP
    } else {
        LARGE_STEP
    };
    price.div_ceil(step).saturating_mul(step)
}
