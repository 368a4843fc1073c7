//! `juju status --format=json` output, reduced to what the built-in routines need.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelStatus {
    #[serde(default)]
    pub applications: BTreeMap<String, ApplicationStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationStatus {
    #[serde(rename = "application-status", default)]
    pub application_status: StatusInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusInfo {
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusInfo {
    pub fn is_active(&self) -> bool {
        self.current == "active"
    }

    /// Workload states that will not recover without intervention.
    pub fn is_terminal_failure(&self) -> bool {
        matches!(self.current.as_str(), "error" | "blocked")
    }
}

impl ModelStatus {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Applications whose workload status is not `active`, in name order.
    pub fn inactive(&self) -> impl Iterator<Item = (&str, &StatusInfo)> {
        self.applications
            .iter()
            .filter(|(_, app)| !app.application_status.is_active())
            .map(|(name, app)| (name.as_str(), &app.application_status))
    }

    /// First application stuck in `error` or `blocked`.
    pub fn first_failure(&self) -> Option<(&str, &StatusInfo)> {
        self.inactive().find(|(_, status)| status.is_terminal_failure())
    }

    pub fn all_active(&self) -> bool {
        self.inactive().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = r#"{
        "model": {"name": "zaza-0123456789ab"},
        "applications": {
            "keystone": {
                "charm": "keystone",
                "application-status": {"current": "active", "message": "Unit is ready"}
            },
            "mysql": {
                "application-status": {"current": "waiting", "message": "Incomplete relations"}
            },
            "vault": {
                "application-status": {"current": "blocked", "message": "Vault needs to be initialized"}
            }
        }
    }"#;

    #[test]
    fn parses_application_statuses() {
        let status = ModelStatus::from_json(STATUS).unwrap();
        assert_eq!(status.applications.len(), 3);
        assert!(status.applications["keystone"].application_status.is_active());
        assert!(!status.all_active());

        let inactive: Vec<&str> = status.inactive().map(|(name, _)| name).collect();
        assert_eq!(inactive, ["mysql", "vault"]);
    }

    #[test]
    fn blocked_application_is_a_terminal_failure() {
        let status = ModelStatus::from_json(STATUS).unwrap();
        let (name, info) = status.first_failure().unwrap();
        assert_eq!(name, "vault");
        assert_eq!(info.message.as_deref(), Some("Vault needs to be initialized"));
    }

    #[test]
    fn empty_model_counts_as_active() {
        let status = ModelStatus::from_json(r#"{"model": {}}"#).unwrap();
        assert!(status.all_active());
        assert!(status.first_failure().is_none());
    }
}
