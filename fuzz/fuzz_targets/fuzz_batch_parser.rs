//! Fuzz target for batch JSON parsing and validation.
//!
//! Goal: parsing arbitrary bytes **never panics**, and any batch that parses
//! validates without panicking, with violations in input order.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_batch_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use pil_domain::PilValidator;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(batch) = pil_app::parse_batch_json(text) else {
        return;
    };

    let (copy, result) = PilValidator::default().validate(&batch);
    assert_eq!(copy, batch);
    assert!(result.violations.windows(2).all(|w| w[0].item <= w[1].item));
    assert!((0.0..=1.0).contains(&result.confidence_score));
});
