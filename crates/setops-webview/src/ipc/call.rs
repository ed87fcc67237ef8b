//! Requests from the display context, parsed into the closed set of
//! operations the host will perform.

use serde::{Deserialize, Serialize};
use setops_common::BridgeError;

/// Options accepted by `selectFiles`. The filter groups are fixed by the
/// host and cannot be supplied here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectFilesOptions {
    pub title: Option<String>,
    pub default_path: Option<String>,
}

/// Icon / severity requested for a message box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    None,
    Info,
    Error,
    Question,
    Warning,
}

/// Options accepted by `showMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBoxOptions {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: MessageType,
    #[serde(default)]
    pub buttons: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub default_id: Option<usize>,
    /// Index reported when the box is dismissed without a button.
    #[serde(default)]
    pub cancel_id: Option<usize>,
    #[serde(default)]
    pub checkbox_label: Option<String>,
    #[serde(default)]
    pub checkbox_checked: bool,
}

/// Every operation reachable from the display context.
///
/// This enum is the allow-list: a message that does not parse into one of
/// these variants never reaches the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    SelectFiles(SelectFilesOptions),
    SelectFolder,
    OpenFolder { path: String },
    ShowMessage(MessageBoxOptions),
}

impl BridgeCall {
    /// Wire names, in the order the JS API declares them.
    pub const KINDS: [&'static str; 4] = ["selectFiles", "selectFolder", "openFolder", "showMessage"];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::SelectFiles(_) => "selectFiles",
            Self::SelectFolder => "selectFolder",
            Self::OpenFolder { .. } => "openFolder",
            Self::ShowMessage(_) => "showMessage",
        }
    }

    /// Build a call from its wire name and JSON payload.
    pub fn from_parts(kind: &str, payload: serde_json::Value) -> Result<Self, BridgeError> {
        match kind {
            "selectFiles" => {
                let options = if payload.is_null() {
                    SelectFilesOptions::default()
                } else {
                    decode("selectFiles", payload)?
                };
                Ok(Self::SelectFiles(options))
            }
            "selectFolder" => Ok(Self::SelectFolder),
            "openFolder" => {
                // Non-string paths are treated as nonexistent, not as errors.
                let path = match payload {
                    serde_json::Value::String(s) => s,
                    _ => String::new(),
                };
                Ok(Self::OpenFolder { path })
            }
            "showMessage" => Ok(Self::ShowMessage(decode("showMessage", payload)?)),
            other => Err(BridgeError::UnknownKind(other.to_string())),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    kind: &'static str,
    payload: serde_json::Value,
) -> Result<T, BridgeError> {
    serde_json::from_value(payload).map_err(|e| BridgeError::InvalidPayload {
        kind,
        reason: e.to_string(),
    })
}

/// The raw envelope posted by the JS bridge: `{ id, kind, payload }`.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeRequest {
    pub id: u64,
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl BridgeRequest {
    /// Parse the envelope only. The operation is checked by [`Self::into_call`].
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::Malformed(e.to_string()))
    }

    /// Resolve the envelope against the allow-list.
    pub fn into_call(self) -> Result<BridgeCall, BridgeError> {
        BridgeCall::from_parts(&self.kind, self.payload)
    }
}
