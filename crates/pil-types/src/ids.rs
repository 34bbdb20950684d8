//! Stable identifiers for rules and violation codes.
//!
//! A rule id is `<domain>.<rule>`. `code` is a short snake_case discriminator.

// Rules: sight
pub const RULE_SIGHT_CONTRAST_RATIO: &str = "sight.contrast_ratio";
pub const RULE_SIGHT_COLOR_BLIND_SAFE: &str = "sight.color_blind_safe";
pub const RULE_SIGHT_VISUAL_COMPLEXITY: &str = "sight.visual_complexity";

// Rules: sound
pub const RULE_SOUND_VOLUME_LEVEL: &str = "sound.volume_level";
pub const RULE_SOUND_AUDIO_DESCRIPTIONS: &str = "sound.audio_descriptions";
pub const RULE_SOUND_TOXICITY: &str = "sound.toxicity";

// Rules: touch
pub const RULE_TOUCH_HAPTIC_INTENSITY: &str = "touch.haptic_intensity";
pub const RULE_TOUCH_SAFETY_CUTOFF: &str = "touch.safety_cutoff";

// Validator-level
pub const RULE_CORE_UNSUPPORTED_DOMAIN: &str = "core.unsupported_domain";

// Codes
pub const CODE_INSUFFICIENT_CONTRAST: &str = "insufficient_contrast";
pub const CODE_NOT_COLOR_BLIND_SAFE: &str = "not_color_blind_safe";
pub const CODE_COGNITIVE_OVERLOAD: &str = "cognitive_overload";
pub const CODE_UNSAFE_VOLUME: &str = "unsafe_volume";
pub const CODE_MISSING_DESCRIPTIONS: &str = "missing_descriptions";
pub const CODE_TOXIC_CONTENT: &str = "toxic_content";
pub const CODE_INTENSITY_OUT_OF_BAND: &str = "intensity_out_of_band";
pub const CODE_MISSING_SAFETY_CUTOFF: &str = "missing_safety_cutoff";
pub const CODE_UNSUPPORTED_DOMAIN: &str = "unsupported_domain";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Every rule id that can be configured in `pil.toml`.
pub const CONFIGURABLE_RULES: &[&str] = &[
    RULE_SIGHT_CONTRAST_RATIO,
    RULE_SIGHT_COLOR_BLIND_SAFE,
    RULE_SIGHT_VISUAL_COMPLEXITY,
    RULE_SOUND_VOLUME_LEVEL,
    RULE_SOUND_AUDIO_DESCRIPTIONS,
    RULE_SOUND_TOXICITY,
    RULE_TOUCH_HAPTIC_INTENSITY,
    RULE_TOUCH_SAFETY_CUTOFF,
];
