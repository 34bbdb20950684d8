//! Fuzz target for `pil.toml` parsing and resolution.
//!
//! Goal: arbitrary config text **never panics**; resolved thresholds are finite
//! and the confidence floor stays in [0, 1].

#![no_main]

use libfuzzer_sys::fuzz_target;
use pil_settings::{Overrides, parse_config_toml, resolve_config};

fuzz_target!(|data: &[u8]| {
    if data.len() > 16 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = parse_config_toml(text) else {
        return;
    };
    if let Ok(resolved) = resolve_config(cfg, Overrides::default()) {
        let t = resolved.effective.thresholds;
        assert!(t.contrast_min.is_finite() && t.volume_max_db.is_finite());
        assert!(t.haptic_min <= t.haptic_max);
        assert!((0.0..=1.0).contains(&resolved.effective.confidence.floor));
    }
});
