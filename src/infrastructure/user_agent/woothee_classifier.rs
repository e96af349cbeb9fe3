//! User-agent classification backed by `woothee`.

use woothee::parser::Parser;

use crate::domain::user_agent::{UserAgentClassifier, UserAgentConfig, UserAgentInfo};

/// Placeholder woothee reports for fields it could not detect.
const UNKNOWN: &str = "UNKNOWN";

/// Classifier using the woothee project's user-agent rules.
///
/// Stateless; a parser is created per call, so one instance can be shared
/// across requests.
#[derive(Debug, Clone, Default)]
pub struct WootheeClassifier;

impl WootheeClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl UserAgentClassifier for WootheeClassifier {
    fn classify(&self, user_agent: &str, config: &UserAgentConfig) -> UserAgentInfo {
        if user_agent.trim().is_empty() {
            return UserAgentInfo::default();
        }

        let parser = Parser::new();
        let Some(result) = parser.parse(user_agent) else {
            return UserAgentInfo::default();
        };

        let truncation = config.version_truncation;

        UserAgentInfo {
            os_name: known(&result.os),
            os_version: known(&result.os_version).map(|v| truncation.apply(&v)),
            browser_name: known(&result.name),
            browser_version: known(&result.version).map(|v| truncation.apply(&v)),
            device_type: device_label(&result.category).map(str::to_string),
        }
    }
}

fn known(value: &str) -> Option<String> {
    (!value.is_empty() && value != UNKNOWN).then(|| value.to_string())
}

/// Maps a woothee category onto the device-type label stored with clicks.
fn device_label(category: &str) -> Option<&'static str> {
    match category {
        "pc" => Some("desktop"),
        "smartphone" => Some("smartphone"),
        "mobilephone" => Some("feature phone"),
        "appliance" => Some("appliance"),
        "crawler" => Some("bot"),
        _ => None,
    }
}
