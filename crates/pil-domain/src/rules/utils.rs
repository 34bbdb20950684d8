use crate::model::PerceptualData;

/// Remediation text, with the declared intent appended as context when present.
pub fn advise(data: &PerceptualData, text: impl Into<String>) -> String {
    let text = text.into();
    match data.intent() {
        Some(intent) => format!("{text} (intent: {intent})"),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pil_types::PerceptualDomain;

    #[test]
    fn advise_appends_intent() {
        let data = PerceptualData::builder(PerceptualDomain::Sight)
            .intent("ui_design")
            .build()
            .expect("valid");
        assert_eq!(advise(&data, "Do it"), "Do it (intent: ui_design)");
    }

    #[test]
    fn advise_without_intent_is_unchanged() {
        let data = PerceptualData::builder(PerceptualDomain::Sight)
            .build()
            .expect("valid");
        assert_eq!(advise(&data, "Do it"), "Do it");
    }
}
