use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент из справочника клиентов.
///
/// `name` уникален и служит ключом выбора в форме счёта.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub company: String,
    pub address: String,
    pub contact: String,

    #[serde(rename = "companyEmail")]
    pub company_email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Client {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Client name must not be empty".into());
        }
        if self.company.trim().is_empty() {
            return Err("Company must not be empty".into());
        }
        if !self.company_email.trim().is_empty() && !self.company_email.contains('@') {
            return Err(format!("Invalid company email: {}", self.company_email));
        }
        Ok(())
    }
}

/// Найти клиента по точному совпадению имени
pub fn find_by_name<'a>(clients: &'a [Client], name: &str) -> Option<&'a Client> {
    clients.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str) -> Client {
        Client {
            name: name.into(),
            company: "Hall-Robbins PLC".into(),
            address: "7777 Mendez Plains".into(),
            contact: "(616) 865-4180".into(),
            company_email: "don85@johnson.com".into(),
            country: Some("USA".into()),
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r#"{
            "name": "Jordan Stevenson",
            "company": "Hall-Robbins PLC",
            "address": "7777 Mendez Plains",
            "contact": "(616) 865-4180",
            "companyEmail": "don85@johnson.com"
        }"#;
        let parsed: Client = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.company_email, "don85@johnson.com");
        assert_eq!(parsed.country, None);

        let value = serde_json::to_value(client("Jordan Stevenson")).unwrap();
        assert_eq!(value["companyEmail"], "don85@johnson.com");
        assert_eq!(value["country"], "USA");
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let clients = vec![client("Jordan Stevenson"), client("Tony Herrera")];
        assert_eq!(
            find_by_name(&clients, "Tony Herrera").map(|c| c.name.as_str()),
            Some("Tony Herrera")
        );
        assert!(find_by_name(&clients, "tony herrera").is_none());
        assert!(find_by_name(&clients, "Tony").is_none());
    }

    #[test]
    fn test_validate() {
        assert!(client("Jordan Stevenson").validate().is_ok());

        let mut bad = client("  ");
        assert!(bad.validate().is_err());

        bad = client("Jordan Stevenson");
        bad.company_email = "no-at-sign".into();
        assert!(bad.validate().is_err());
    }
}
