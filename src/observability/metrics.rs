//! Metrics collection.
//!
//! # Metrics
//! - `xff_rewrites_total` (counter): header values rewritten
//! - `xff_tokens_unmapped_total` (counter): `::ffff` tokens turned into IPv4
//! - `xff_tokens_unparsed_total` (counter): `::ffff` tokens kept as written

use metrics::counter;

use crate::xff::Rewrite;

/// Record the outcome of one header rewrite.
pub fn record_rewrite(filter: &str, rewrite: &Rewrite) {
    let name = filter.to_string();
    counter!("xff_rewrites_total", "filter" => name.clone()).increment(1);

    if rewrite.unmapped > 0 {
        counter!("xff_tokens_unmapped_total", "filter" => name.clone()).increment(rewrite.unmapped as u64);
    }
    if rewrite.unparsed > 0 {
        counter!("xff_tokens_unparsed_total", "filter" => name).increment(rewrite.unparsed as u64);
    }
}

