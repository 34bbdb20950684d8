//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and which attributes it reads.
    pub description: &'static str,
    /// How to resolve violations.
    pub remediation: &'static str,
    /// Before/after attribute examples.
    pub examples: ExamplePair,
}

/// Before and after attribute examples (JSON).
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Attributes that would trigger a violation.
    pub before: &'static str,
    /// Attributes that pass the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_SIGHT_CONTRAST_RATIO | ids::CODE_INSUFFICIENT_CONTRAST => {
            Some(explain_contrast_ratio())
        }
        ids::RULE_SIGHT_COLOR_BLIND_SAFE | ids::CODE_NOT_COLOR_BLIND_SAFE => {
            Some(explain_color_blind_safe())
        }
        ids::RULE_SIGHT_VISUAL_COMPLEXITY | ids::CODE_COGNITIVE_OVERLOAD => {
            Some(explain_visual_complexity())
        }
        ids::RULE_SOUND_VOLUME_LEVEL | ids::CODE_UNSAFE_VOLUME => Some(explain_volume_level()),
        ids::RULE_SOUND_AUDIO_DESCRIPTIONS | ids::CODE_MISSING_DESCRIPTIONS => {
            Some(explain_audio_descriptions())
        }
        ids::RULE_SOUND_TOXICITY | ids::CODE_TOXIC_CONTENT => Some(explain_toxicity()),
        ids::RULE_TOUCH_HAPTIC_INTENSITY | ids::CODE_INTENSITY_OUT_OF_BAND => {
            Some(explain_haptic_intensity())
        }
        ids::RULE_TOUCH_SAFETY_CUTOFF | ids::CODE_MISSING_SAFETY_CUTOFF => {
            Some(explain_safety_cutoff())
        }
        ids::RULE_CORE_UNSUPPORTED_DOMAIN | ids::CODE_UNSUPPORTED_DOMAIN => {
            Some(explain_unsupported_domain())
        }
        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_SIGHT_CONTRAST_RATIO,
        ids::RULE_SIGHT_COLOR_BLIND_SAFE,
        ids::RULE_SIGHT_VISUAL_COMPLEXITY,
        ids::RULE_SOUND_VOLUME_LEVEL,
        ids::RULE_SOUND_AUDIO_DESCRIPTIONS,
        ids::RULE_SOUND_TOXICITY,
        ids::RULE_TOUCH_HAPTIC_INTENSITY,
        ids::RULE_TOUCH_SAFETY_CUTOFF,
        ids::RULE_CORE_UNSUPPORTED_DOMAIN,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_INSUFFICIENT_CONTRAST,
        ids::CODE_NOT_COLOR_BLIND_SAFE,
        ids::CODE_COGNITIVE_OVERLOAD,
        ids::CODE_UNSAFE_VOLUME,
        ids::CODE_MISSING_DESCRIPTIONS,
        ids::CODE_TOXIC_CONTENT,
        ids::CODE_INTENSITY_OUT_OF_BAND,
        ids::CODE_MISSING_SAFETY_CUTOFF,
        ids::CODE_UNSUPPORTED_DOMAIN,
    ]
}

fn explain_contrast_ratio() -> Explanation {
    Explanation {
        title: "Minimum Contrast Ratio",
        description: "\
Flags visual content whose `contrast_ratio` is below the configured minimum
(4.5 by default, the WCAG 2.x AA level for body text; the strict profile uses 7.0).

Low contrast makes text and interface elements hard to read for users with
low vision, in bright ambient light, or on poor displays.",
        remediation: "\
Increase the luminance difference between foreground and background:
- darken text or lighten the background (or the reverse)
- avoid placing text over busy imagery without a scrim
- re-measure the ratio after palette changes",
        examples: ExamplePair {
            before: r#"{"contrast_ratio": 3.2}"#,
            after: r#"{"contrast_ratio": 4.8}"#,
        },
    }
}

fn explain_color_blind_safe() -> Explanation {
    Explanation {
        title: "Color-Blind Safe Palette",
        description: "\
Flags visual content declared with `color_blind_safe: false`.

Roughly one in twelve men has some form of color vision deficiency. Meaning that is
carried by hue alone (red/green status, color-coded teams) is lost for them.",
        remediation: "\
Carry meaning through more than color:
- add shapes, patterns or icons next to colored states
- label elements directly
- pick palettes that stay distinguishable under deuteranopia and protanopia",
        examples: ExamplePair {
            before: r#"{"color_blind_safe": false}"#,
            after: r#"{"color_blind_safe": true}"#,
        },
    }
}

fn explain_visual_complexity() -> Explanation {
    Explanation {
        title: "Visual Complexity / Cognitive Load",
        description: "\
Reports visual content whose `complexity_score` exceeds the cognitive load ceiling
(7 by default). This is informational: dense scenes are not unsafe, but they are
harder to parse quickly.",
        remediation: "\
Reduce simultaneous visual elements or split them into smaller steps:
- progressive disclosure for secondary controls
- group related items
- remove decoration that carries no information",
        examples: ExamplePair {
            before: r#"{"complexity_score": 9}"#,
            after: r#"{"complexity_score": 5}"#,
        },
    }
}

fn explain_volume_level() -> Explanation {
    Explanation {
        title: "Safe Listening Volume",
        description: "\
Flags audio whose `volume_db` exceeds the hearing-safety ceiling (85 dB by default).
Sustained exposure above this level is associated with noise-induced hearing loss.",
        remediation: "\
Lower the mastered level or cap output, and give users a volume control.",
        examples: ExamplePair {
            before: r#"{"volume_db": 92}"#,
            after: r#"{"volume_db": 75}"#,
        },
    }
}

fn explain_audio_descriptions() -> Explanation {
    Explanation {
        title: "Audio Descriptions",
        description: "\
Flags audio content declared with `has_descriptions: false`. Without descriptions,
visually impaired users miss information conveyed only on screen.",
        remediation: "\
Provide an audio description track or text alternatives for the content.",
        examples: ExamplePair {
            before: r#"{"has_descriptions": false}"#,
            after: r#"{"has_descriptions": true}"#,
        },
    }
}

fn explain_toxicity() -> Explanation {
    Explanation {
        title: "Content Moderation (Toxicity)",
        description: "\
Flags audio whose `toxicity_score` exceeds the moderation ceiling (0.5 by default,
0.8 in the lenient profile). The score is produced upstream; PIL only compares it.",
        remediation: "\
Review the content, then remove, replace or moderate the offending segments.",
        examples: ExamplePair {
            before: r#"{"toxicity_score": 0.72}"#,
            after: r#"{"toxicity_score": 0.1}"#,
        },
    }
}

fn explain_haptic_intensity() -> Explanation {
    Explanation {
        title: "Haptic Intensity Safe Band",
        description: "\
Flags haptic feedback whose `vibration_intensity` is outside the safe band
(0 to 8 by default). Values above the band risk discomfort; negative values are
nonsensical and usually indicate a units error upstream.",
        remediation: "\
Scale the waveform into the safe band, or clamp it at the device driver.",
        examples: ExamplePair {
            before: r#"{"vibration_intensity": 9.5}"#,
            after: r#"{"vibration_intensity": 6.0}"#,
        },
    }
}

fn explain_safety_cutoff() -> Explanation {
    Explanation {
        title: "Safety Cutoff on Strong Feedback",
        description: "\
Flags strong haptic feedback (`vibration_intensity` at or above 6 by default) that
does not declare `has_safety_cutoff: true`. Strong feedback should stop automatically
after a bounded duration.",
        remediation: "\
Add a duration limit or user-reachable cutoff and declare it with `has_safety_cutoff`.",
        examples: ExamplePair {
            before: r#"{"vibration_intensity": 7}"#,
            after: r#"{"vibration_intensity": 7, "has_safety_cutoff": true}"#,
        },
    }
}

fn explain_unsupported_domain() -> Explanation {
    Explanation {
        title: "Unsupported Domain",
        description: "\
Informational notice: the item's domain has no rule set (proprioception,
thermoception), or an asset group name could not be mapped to a domain. Nothing was
checked for that item; the rest of the batch was validated normally.",
        remediation: "\
Rename the asset group to a recognized name (for example `lighting`, `audio`,
`haptics`), or accept the gap in rule coverage.",
        examples: ExamplePair {
            before: r#"{"particles": {"density": 0.4}}"#,
            after: r#"{"lighting": {"contrast_ratio": 5.0}}"#,
        },
    }
}
