//! Per-domain rule sets.
//!
//! Each domain variant maps to at most one [`RuleSet`] through [`rule_set_for`]. A rule is
//! a pure function of the item's attributes and the configured thresholds; severity comes
//! from the rule's policy, not from the rule itself.

use crate::model::PerceptualData;
use crate::policy::{EffectiveConfig, Thresholds};
use pil_types::{PerceptualDomain, Severity};
use serde_json::Value;

mod sight;
mod sound;
mod touch;
mod utils;


/// What a rule reports when it fires.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleHit {
    pub code: &'static str,
    pub message: String,
    pub suggestion: Option<String>,
    pub data: Value,
}

pub type RuleFn = fn(&PerceptualData, &Thresholds) -> Option<RuleHit>;

pub struct Rule {
    pub id: &'static str,
    /// Item confidence is capped at this weight when the rule fires.
    pub weight: f64,
    pub eval: RuleFn,
}

pub struct RuleSet {
    pub domain: PerceptualDomain,
    /// Declaration order is the reporting order.
    pub rules: &'static [Rule],
}

/// A fired rule with its policy severity (before any confidence degradation).
#[derive(Clone, Debug, PartialEq)]
pub struct RuleOutcome {
    pub rule_id: &'static str,
    pub weight: f64,
    pub severity: Severity,
    pub hit: RuleHit,
}

impl RuleSet {
    pub fn rule_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.id)
    }

    pub fn is_pass_through(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn evaluate(&self, data: &PerceptualData, cfg: &EffectiveConfig) -> Vec<RuleOutcome> {
        let mut out = Vec::new();
        for rule in self.rules {
            let Some(policy) = cfg.rule_policy(rule.id) else {
                continue;
            };
            if let Some(hit) = (rule.eval)(data, &cfg.thresholds) {
                out.push(RuleOutcome {
                    rule_id: rule.id,
                    weight: rule.weight,
                    severity: policy.severity,
                    hit,
                });
            }
        }
        out
    }
}

pub static SIGHT: RuleSet = RuleSet {
    domain: PerceptualDomain::Sight,
    rules: &sight::RULES,
};

pub static SOUND: RuleSet = RuleSet {
    domain: PerceptualDomain::Sound,
    rules: &sound::RULES,
};

pub static TOUCH: RuleSet = RuleSet {
    domain: PerceptualDomain::Touch,
    rules: &touch::RULES,
};

/// Reserved for future taste rules; never reports anything.
pub static TASTE: RuleSet = RuleSet {
    domain: PerceptualDomain::Taste,
    rules: &[],
};

/// Reserved for future smell rules; never reports anything.
pub static SMELL: RuleSet = RuleSet {
    domain: PerceptualDomain::Smell,
    rules: &[],
};

/// Rule set registered for a domain. `None` means the domain is declared but unsupported.
pub fn rule_set_for(domain: PerceptualDomain) -> Option<&'static RuleSet> {
    match domain {
        PerceptualDomain::Sight => Some(&SIGHT),
        PerceptualDomain::Sound => Some(&SOUND),
        PerceptualDomain::Touch => Some(&TOUCH),
        PerceptualDomain::Taste => Some(&TASTE),
        PerceptualDomain::Smell => Some(&SMELL),
        PerceptualDomain::Proprioception | PerceptualDomain::Thermoception => None,
    }
}
