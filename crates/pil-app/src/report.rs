use anyhow::Context;
use pil_types::{
    PilReport, SCHEMA_REPORT_V1, Severity, SeverityCounts, ToolMeta, ValidationResult, Verdict,
    Violation, ids,
};
use time::OffsetDateTime;

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "pil".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn build_report(
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
    profile: &str,
    items_validated: usize,
    result: ValidationResult,
) -> PilReport {
    PilReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: result.verdict,
        profile: profile.to_string(),
        items_validated: u32::try_from(items_validated).unwrap_or(u32::MAX),
        result,
    }
}

/// Report for a run that could not validate anything (bad input, config or I/O).
pub fn runtime_error_report(message: &str) -> PilReport {
    let now = OffsetDateTime::now_utc();
    let violations = vec![Violation {
        domain: None,
        rule_name: ids::RULE_TOOL_RUNTIME.to_string(),
        code: ids::CODE_RUNTIME_ERROR.to_string(),
        message: message.to_string(),
        severity: Severity::Error,
        item: 0,
        subject: None,
        degraded: false,
        data: serde_json::Value::Null,
    }];
    let result = ValidationResult {
        is_valid: false,
        verdict: Verdict::Fail,
        counts: SeverityCounts::from_violations(&violations),
        violations,
        suggestions: Vec::new(),
        confidence_score: 0.0,
    };
    build_report(now, now, "unknown", 0, result)
}

pub fn serialize_report(report: &PilReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<PilReport> {
    let report: PilReport = serde_json::from_str(text).context("parse pil report")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_report_fails_with_tool_finding() {
        let report = runtime_error_report("read input: no such file");
        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.verdict, Verdict::Fail);
        assert!(!report.result.is_valid);
        assert_eq!(report.result.counts.error, 1);
        assert_eq!(report.result.violations[0].rule_name, ids::RULE_TOOL_RUNTIME);
    }

    #[test]
    fn serialized_report_parses_back() {
        let report = runtime_error_report("boom");
        let bytes = serialize_report(&report).expect("serialize");
        assert_eq!(bytes.last(), Some(&b'\n'));
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let report = runtime_error_report("boom");
        let mut value = serde_json::to_value(&report).expect("to value");
        value["schema"] = serde_json::json!("other.report.v1");
        let err = parse_report_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn oversized_item_count_saturates() {
        let now = OffsetDateTime::now_utc();
        let result = runtime_error_report("boom").result;
        let report = build_report(now, now, "default", usize::MAX, result.clone());
        assert_eq!(report.items_validated, u32::MAX);
        let report = build_report(now, now, "default", 3, result);
        assert_eq!(report.items_validated, 3);
    }
}
