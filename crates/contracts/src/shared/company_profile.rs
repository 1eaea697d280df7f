use serde::{Deserialize, Serialize};

/// Реквизиты компании-продавца для шапки счёта.
///
/// Передаётся в форму явным параметром, а не через глобальный контекст.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub template_name: String,
    #[serde(default)]
    pub address_lines: Vec<String>,
    #[serde(default)]
    pub phones: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            template_name: "Vuexy".to_string(),
            address_lines: vec![
                "Office 149, 450 South Brand Brooklyn".to_string(),
                "San Diego County, CA 91905, USA".to_string(),
            ],
            phones: "+1 (123) 456 7891, +44 (876) 543 2198".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let profile: CompanyProfile =
            serde_json::from_str(r#"{"templateName":"Acme"}"#).unwrap();
        assert_eq!(profile.template_name, "Acme");
        assert!(profile.address_lines.is_empty());
        assert_eq!(profile.phones, "");
    }
}
