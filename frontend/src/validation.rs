use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::forms::{FormKind, FormRecord};

static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());
static PINCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").unwrap());

const RESUME_HOSTS: [&str; 2] = ["drive.google.com", "docs.google.com"];

/// Ten digits starting with 6-9, after stripping everything that is not a digit.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let digits: String = mobile.chars().filter(char::is_ascii_digit).collect();
    MOBILE_RE.is_match(&digits)
}

pub fn is_valid_pincode(pincode: &str) -> bool {
    PINCODE_RE.is_match(pincode)
}

/// Accepts any well-formed URL whose text mentions Google Drive or Docs.
///
/// The host is not compared: `https://example.com/drive.google.com` passes.
/// That leniency is kept on purpose until the product asks for a strict
/// host match.
pub fn is_valid_resume_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(_) => RESUME_HOSTS.iter().any(|host| url.contains(host)),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Required,
    Mobile,
    Pincode,
    ResumeUrl,
}

impl Rule {
    fn accepts(self, value: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }
        match self {
            Rule::Required => true,
            Rule::Mobile => is_valid_mobile(value),
            Rule::Pincode => is_valid_pincode(value),
            Rule::ResumeUrl => is_valid_resume_url(value),
        }
    }
}

struct Check {
    field: &'static str,
    rule: Rule,
    message: &'static str,
}

const NAME: Check = Check { field: "name", rule: Rule::Required, message: "Please enter your name" };
const MOBILE: Check = Check {
    field: "mobile",
    rule: Rule::Mobile,
    message: "Please enter a valid mobile number",
};
const CITY: Check = Check { field: "city", rule: Rule::Required, message: "Please enter city" };
const STATE: Check = Check { field: "state", rule: Rule::Required, message: "Please enter state" };
const PINCODE: Check = Check {
    field: "pincode",
    rule: Rule::Pincode,
    message: "Please enter a valid pincode",
};

const MECHANIC_CHECKS: &[Check] = &[
    NAME,
    MOBILE,
    Check { field: "workshop", rule: Rule::Required, message: "Please enter workshop name" },
    CITY,
    STATE,
    PINCODE,
];

const SUPPLIER_CHECKS: &[Check] = &[
    NAME,
    MOBILE,
    Check { field: "shop", rule: Rule::Required, message: "Please enter shop name" },
    CITY,
    STATE,
    PINCODE,
];

const CAREER_CHECKS: &[Check] = &[
    NAME,
    MOBILE,
    Check { field: "position", rule: Rule::Required, message: "Please select a position" },
    CITY,
    STATE,
    Check { field: "resume", rule: Rule::ResumeUrl, message: "Please enter a valid resume link" },
];

fn checks(kind: FormKind) -> &'static [Check] {
    match kind {
        FormKind::Mechanic => MECHANIC_CHECKS,
        FormKind::Supplier => SUPPLIER_CHECKS,
        FormKind::Career => CAREER_CHECKS,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: &'static str,
    pub reason: String,
}

/// Every failing field, in the order the form checks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub failures: Vec<FieldFailure>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn first(&self) -> Option<&FieldFailure> {
        self.failures.first()
    }
}

pub fn validate(kind: FormKind, record: &FormRecord) -> ValidationResult {
    let failures = checks(kind)
        .iter()
        .filter(|check| !check.rule.accepts(record.get(check.field)))
        .map(|check| FieldFailure { field: check.field, reason: check.message.to_string() })
        .collect();
    ValidationResult { failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(fields: &[(&'static str, &str)]) -> FormRecord {
        let mut record = FormRecord::default();
        for (field, value) in fields {
            record.set(*field, *value);
        }
        record
    }

    fn valid_mechanic() -> FormRecord {
        record(&[
            ("name", "Ravi Kumar"),
            ("mobile", "98765 43210"),
            ("workshop", "Kumar Auto Works"),
            ("city", "Bengaluru"),
            ("state", "Karnataka"),
            ("pincode", "560001"),
        ])
    }

    #[test]
    fn test_mobile_validator() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("1234567890"));
        assert!(!is_valid_mobile("98765"));
        assert!(!is_valid_mobile("98765432101"));
    }

    #[test]
    fn test_mobile_validator_strips_separators() {
        assert!(is_valid_mobile("98765-43210"));
        assert!(is_valid_mobile("(987) 654 3210"));
    }

    #[test]
    fn test_pincode_validator() {
        assert!(is_valid_pincode("560001"));
        assert!(!is_valid_pincode("012345"));
        assert!(!is_valid_pincode("56000"));
        assert!(!is_valid_pincode("5600011"));
        assert!(!is_valid_pincode(" 560001"));
    }

    #[test]
    fn test_resume_url_validator() {
        assert!(is_valid_resume_url("https://drive.google.com/file/d/abc"));
        assert!(is_valid_resume_url("https://docs.google.com/document/d/xyz/edit"));
        assert!(!is_valid_resume_url("not a url"));
        assert!(!is_valid_resume_url("https://dropbox.com/s/resume.pdf"));
    }

    #[test]
    fn test_resume_url_matches_domain_anywhere_in_text() {
        assert!(is_valid_resume_url("https://example.com/drive.google.com"));
        assert!(is_valid_resume_url("https://example.com/?next=docs.google.com"));
    }

    #[test]
    fn test_valid_mechanic_form_passes() {
        let result = validate(FormKind::Mechanic, &valid_mechanic());
        assert!(result.is_ok());
        assert_eq!(result.first(), None);
    }

    #[test]
    fn test_empty_form_reports_fields_in_check_order() {
        let result = validate(FormKind::Mechanic, &FormRecord::default());
        let fields: Vec<_> = result.failures.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["name", "mobile", "workshop", "city", "state", "pincode"]);
        assert_eq!(result.first().map(|f| f.reason.as_str()), Some("Please enter your name"));
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let mut form = valid_mechanic();
        form.set("city", "   ");
        let result = validate(FormKind::Mechanic, &form);
        assert_eq!(
            result.failures,
            vec![FieldFailure { field: "city", reason: "Please enter city".to_string() }]
        );
    }

    #[test]
    fn test_first_failure_follows_check_order_not_field_order() {
        let mut form = valid_mechanic();
        form.set("pincode", "012345");
        form.set("mobile", "12345");
        let result = validate(FormKind::Mechanic, &form);
        assert_eq!(result.first().map(|f| f.field), Some("mobile"));
        assert_eq!(result.failures.len(), 2);
    }

    #[test]
    fn test_supplier_requires_shop_name() {
        let mut form = valid_mechanic();
        form.set("workshop", "");
        let result = validate(FormKind::Supplier, &form);
        assert_eq!(
            result.failures,
            vec![FieldFailure { field: "shop", reason: "Please enter shop name".to_string() }]
        );
    }

    #[test]
    fn test_career_form_checks_position_and_resume() {
        let form = record(&[
            ("name", "Asha"),
            ("mobile", "9123456789"),
            ("city", "Pune"),
            ("state", "Maharashtra"),
            ("resume", "https://example.com/cv.pdf"),
        ]);
        let result = validate(FormKind::Career, &form);
        let fields: Vec<_> = result.failures.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["position", "resume"]);
    }
}
