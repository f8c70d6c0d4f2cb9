use serde::{Deserialize, Serialize};
use std::fmt;

/// Color code shown on the page when the service is interrupted
pub const OFFLINE_COLOR_CODE: &str = "#f51616";

/// Binary service status derived from the page markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
    Offline,
}

impl ServiceStatus {
    /// Classify a style string into a service status
    ///
    /// Pure function of the style string: containing the offline color
    /// code means the service is down, anything else means it is up.
    pub fn classify(style: &str) -> Self {
        if style.contains(OFFLINE_COLOR_CODE) {
            ServiceStatus::Offline
        } else {
            ServiceStatus::Online
        }
    }

    /// The stored string form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "online",
            ServiceStatus::Offline => "offline",
        }
    }

    /// Parse a stored status string
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(ServiceStatus::Online),
            "offline" => Some(ServiceStatus::Offline),
            _ => None,
        }
    }

    /// Notification text announcing a transition into this status
    pub fn change_message(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "Serviço voltou a funcionar",
            ServiceStatus::Offline => "Interrupção no serviço",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_offline_on_error_color() {
        let style = "background-color: #f51616; border-radius: 4px;";
        assert_eq!(ServiceStatus::classify(style), ServiceStatus::Offline);
    }

    #[test]
    fn test_classify_online_on_any_other_style() {
        assert_eq!(
            ServiceStatus::classify("background-color: #16f51d;"),
            ServiceStatus::Online
        );
        assert_eq!(ServiceStatus::classify(""), ServiceStatus::Online);
        // Only the exact color code matters
        assert_eq!(
            ServiceStatus::classify("background-color: #F51616;"),
            ServiceStatus::Online
        );
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!(
            ServiceStatus::parse(ServiceStatus::Online.as_str()),
            Some(ServiceStatus::Online)
        );
        assert_eq!(
            ServiceStatus::parse(ServiceStatus::Offline.as_str()),
            Some(ServiceStatus::Offline)
        );
        assert_eq!(ServiceStatus::parse("unknown"), None);
    }

    #[test]
    fn test_change_messages() {
        assert_eq!(
            ServiceStatus::Offline.change_message(),
            "Interrupção no serviço"
        );
        assert_eq!(
            ServiceStatus::Online.change_message(),
            "Serviço voltou a funcionar"
        );
    }
}
