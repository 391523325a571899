use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Demographic fields of the assessed child.
///
/// `sex` is free text as entered by the operator (e.g. `"F"`, `"Femenino"`,
/// `"male"`). Interpretation is left to the feature builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectProfile {
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub sex: String,
}

impl SubjectProfile {
    #[must_use]
    pub fn new(birth_date: NaiveDate, sex: impl Into<String>) -> Self {
        Self {
            birth_date,
            sex: sex.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sex_defaults_to_empty() {
        let profile: SubjectProfile =
            serde_json::from_str(r#"{ "birth_date": "2015-03-01" }"#).unwrap();
        assert_eq!(profile.birth_date, NaiveDate::from_ymd_opt(2015, 3, 1).unwrap());
        assert!(profile.sex.is_empty());
    }
}
