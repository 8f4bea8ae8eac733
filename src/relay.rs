// src/relay.rs
// Thin adapter around the third-party mail relay. The relay's request shape
// and the three opaque configuration values are the whole boundary; its
// delivery guarantees are not our concern.

use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

use crate::state::ContactMessage;

const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const PUBLIC_KEY_VAR: &str = "FOLIO_RELAY_PUBLIC_KEY";
const SERVICE_ID_VAR: &str = "FOLIO_RELAY_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "FOLIO_RELAY_TEMPLATE_ID";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing mail relay configuration value {0}")]
    Missing(&'static str),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("mail relay request failed: {0}")]
    Network(String),
    #[error("mail relay rejected the message (status {status})")]
    Rejected { status: u16, detail: String },
}

impl TransportError {
    /// Diagnostic text for the console log. Never rendered to the visitor.
    pub fn detail(&self) -> &str {
        match self {
            TransportError::Network(detail) => detail,
            TransportError::Rejected { detail, .. } => detail,
        }
    }
}

/// The three opaque values identifying us to the relay, baked in at build
/// time like the rest of the page.
#[derive(Debug)]
pub struct RelayConfig {
    public_key: &'static str,
    service_id: &'static str,
    template_id: &'static str,
}

impl RelayConfig {
    fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            option_env!("FOLIO_RELAY_PUBLIC_KEY"),
            option_env!("FOLIO_RELAY_SERVICE_ID"),
            option_env!("FOLIO_RELAY_TEMPLATE_ID"),
        )
    }

    fn from_parts(
        public_key: Option<&'static str>,
        service_id: Option<&'static str>,
        template_id: Option<&'static str>,
    ) -> Result<Self, ConfigError> {
        let require = |value: Option<&'static str>, name: &'static str| {
            value
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        Ok(Self {
            public_key: require(public_key, PUBLIC_KEY_VAR)?,
            service_id: require(service_id, SERVICE_ID_VAR)?,
            template_id: require(template_id, TEMPLATE_ID_VAR)?,
        })
    }
}

static RELAY: OnceLock<RelayConfig> = OnceLock::new();

/// One-time startup initialization. A missing value fails here, before the
/// page becomes interactive, rather than on the first send. The error only
/// disables the contact feature; the rest of the page keeps working.
pub fn init() -> Result<(), ConfigError> {
    let config = RelayConfig::from_build_env()?;
    let _ = RELAY.set(config);
    Ok(())
}

/// None until `init` has succeeded.
pub fn client() -> Option<MailRelayClient> {
    RELAY.get().map(|config| MailRelayClient { config })
}

#[derive(Clone, Copy)]
pub struct MailRelayClient {
    config: &'static RelayConfig,
}

/// Field names the relay template expects. `subject` travels as `title` and
/// `body` as `message`; the mapping is fixed, not configurable.
#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    title: &'a str,
}

impl<'a> TemplateParams<'a> {
    fn from_message(message: &'a ContactMessage) -> Self {
        Self {
            name: &message.name,
            email: &message.email,
            message: &message.body,
            title: &message.subject,
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

impl MailRelayClient {
    /// Exactly one network call per invocation. No retry and no timeout at
    /// this layer; the caller owns retry policy (and chooses none).
    pub async fn send(&self, message: &ContactMessage) -> Result<(), TransportError> {
        let payload = SendRequest {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: TemplateParams::from_message(message),
        };

        let response = gloo_net::http::Request::post(SEND_ENDPOINT)
            .json(&payload)
            .map_err(|e| TransportError::Network(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("{e:?}")))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            Err(TransportError::Rejected { status, detail })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Collaboration".into(),
            body: "I have a project in mind.".into(),
        }
    }

    #[test]
    fn test_template_params_rename_subject_to_title() {
        let message = sample_message();
        let json = serde_json::to_string(&TemplateParams::from_message(&message)).unwrap();
        assert!(json.contains("\"title\":\"Collaboration\""));
        assert!(json.contains("\"message\":\"I have a project in mind.\""));
        assert!(!json.contains("subject"));
        assert!(!json.contains("body"));
    }

    #[test]
    fn test_send_request_envelope() {
        let message = sample_message();
        let config = RelayConfig {
            public_key: "pk_test",
            service_id: "svc_test",
            template_id: "tpl_test",
        };
        let payload = SendRequest {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: TemplateParams::from_message(&message),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"service_id\":\"svc_test\""));
        assert!(json.contains("\"template_id\":\"tpl_test\""));
        assert!(json.contains("\"user_id\":\"pk_test\""));
        assert!(json.contains("\"template_params\""));
    }

    #[test]
    fn test_config_requires_every_value() {
        let ok = RelayConfig::from_parts(Some("pk"), Some("svc"), Some("tpl"));
        assert!(ok.is_ok());

        let missing = RelayConfig::from_parts(None, Some("svc"), Some("tpl"));
        assert_eq!(missing.unwrap_err(), ConfigError::Missing(PUBLIC_KEY_VAR));

        let empty = RelayConfig::from_parts(Some("pk"), Some(""), Some("tpl"));
        assert_eq!(empty.unwrap_err(), ConfigError::Missing(SERVICE_ID_VAR));

        let no_template = RelayConfig::from_parts(Some("pk"), Some("svc"), None);
        assert_eq!(no_template.unwrap_err(), ConfigError::Missing(TEMPLATE_ID_VAR));
    }
}
