use crate::base;

/// A client project that time is logged against.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub client: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Default billable flag for new entries.
    #[serde(default)]
    pub billable: bool,
    #[serde(default = "active_default")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<base::Cents>,
}

fn active_default() -> bool {
    true
}

impl Project {
    pub fn new(client: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            name: name.into(),
            description: String::new(),
            billable: false,
            active: true,
            fees: None,
        }
    }

    /// `client - name`
    pub fn label(&self) -> String {
        format!("{} - {}", self.client, self.name)
    }
}
