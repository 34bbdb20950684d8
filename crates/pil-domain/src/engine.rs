use crate::model::PerceptualData;
use crate::policy::{EffectiveConfig, FailOn};
use crate::rules;
use pil_types::{
    PerceptualDomain, Severity, SeverityCounts, Suggestion, ValidationResult, Verdict, Violation,
    ids,
};
use serde_json::json;
use tracing::debug;

/// Runs the rule set matching each item's domain and merges the outcomes.
///
/// Holds only read-only configuration, so one validator can serve any number of
/// calls (including concurrent ones) and always returns the same result for the same batch.
#[derive(Clone, Debug, Default)]
pub struct PilValidator {
    cfg: EffectiveConfig,
}

impl PilValidator {
    pub fn new(cfg: EffectiveConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &EffectiveConfig {
        &self.cfg
    }

    /// Validate a batch. Returns an untouched copy of the data next to the result.
    pub fn validate(&self, batch: &[PerceptualData]) -> (Vec<PerceptualData>, ValidationResult) {
        let mut acc = Accumulator::default();
        for (index, data) in batch.iter().enumerate() {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            self.evaluate_item(index, data, None, &mut acc);
        }
        let result = acc.finish(self.cfg.fail_on);
        debug!(
            items = batch.len(),
            violations = result.violations.len(),
            verdict = ?result.verdict,
            "batch validated"
        );
        (batch.to_vec(), result)
    }

    pub(crate) fn evaluate_item(
        &self,
        item: u32,
        data: &PerceptualData,
        subject: Option<&str>,
        acc: &mut Accumulator,
    ) {
        let domain = data.domain();
        let Some(rule_set) = rules::rule_set_for(domain) else {
            debug!(item, %domain, "no rule set registered");
            acc.unsupported(item, Some(domain), subject, data.confidence());
            return;
        };

        let low_confidence = self.cfg.confidence.is_low(data.confidence());
        let mut score = data.confidence();

        for outcome in rule_set.evaluate(data, &self.cfg) {
            score = score.min(outcome.weight);
            let severity = if low_confidence {
                outcome.severity.degrade()
            } else {
                outcome.severity
            };

            acc.violations.push(Violation {
                domain: Some(domain),
                rule_name: outcome.rule_id.to_string(),
                code: outcome.hit.code.to_string(),
                message: outcome.hit.message,
                severity,
                item,
                subject: subject.map(str::to_string),
                degraded: severity != outcome.severity,
                data: outcome.hit.data,
            });
            if let Some(text) = outcome.hit.suggestion {
                acc.suggestions.push(Suggestion {
                    domain: Some(domain),
                    rule_name: outcome.rule_id.to_string(),
                    message: text,
                    item,
                });
            }
        }

        debug!(item, %domain, low_confidence, score, "item evaluated");
        acc.scores.push(score);
    }
}

#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    violations: Vec<Violation>,
    suggestions: Vec<Suggestion>,
    scores: Vec<f64>,
}

impl Accumulator {
    /// Info-level notice for an item no rule set covers. Carries no suggestion.
    pub(crate) fn unsupported(
        &mut self,
        item: u32,
        domain: Option<PerceptualDomain>,
        subject: Option<&str>,
        confidence: f64,
    ) {
        let message = match (domain, subject) {
            (Some(d), _) => format!("unsupported domain '{d}': no rule set registered, item not checked"),
            (None, Some(group)) => format!(
                "unsupported domain: asset group '{group}' does not map to a perceptual domain"
            ),
            (None, None) => "unsupported domain".to_string(),
        };
        self.violations.push(Violation {
            domain,
            rule_name: ids::RULE_CORE_UNSUPPORTED_DOMAIN.to_string(),
            code: ids::CODE_UNSUPPORTED_DOMAIN.to_string(),
            message,
            severity: Severity::Info,
            item,
            subject: subject.map(str::to_string),
            degraded: false,
            data: json!({ "domain": domain.map(|d| d.as_str()), "subject": subject }),
        });
        self.scores.push(confidence);
    }

    pub(crate) fn finish(self, fail_on: FailOn) -> ValidationResult {
        let verdict = compute_verdict(&self.violations, fail_on);
        let counts = SeverityCounts::from_violations(&self.violations);
        let confidence_score = if self.scores.is_empty() {
            0.0
        } else {
            self.scores.iter().sum::<f64>() / self.scores.len() as f64
        };

        ValidationResult {
            is_valid: verdict != Verdict::Fail,
            verdict,
            violations: self.violations,
            suggestions: self.suggestions,
            counts,
            confidence_score,
        }
    }
}

fn compute_verdict(violations: &[Violation], fail_on: FailOn) -> Verdict {
    let has_error = violations.iter().any(|v| v.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = violations.iter().any(|v| v.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}
