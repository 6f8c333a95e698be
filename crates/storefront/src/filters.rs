//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a monetary amount to two decimal places with a dollar sign.
///
/// Usage in templates: `{{ item.price|price }}`
#[askama::filter_fn]
pub fn price(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${amount:.2}"))
}
