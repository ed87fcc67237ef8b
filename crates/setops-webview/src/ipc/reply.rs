//! Results sent back to the display context.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Result of `selectFiles` / `selectFolder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub cancelled: bool,
    pub file_paths: Vec<String>,
}

impl SelectionResult {
    /// The user dismissed the chooser.
    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            file_paths: Vec::new(),
        }
    }

    /// The user confirmed a selection, in the order the dialog reported it.
    pub fn selected(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            cancelled: false,
            file_paths: paths
                .into_iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// Result of `showMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBoxResult {
    /// Index of the chosen button.
    pub response: usize,
    pub checkbox_checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Resolved,
    Rejected,
}

/// Reply envelope matched to its request by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub id: u64,
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BridgeResponse {
    pub fn resolved(id: u64, value: serde_json::Value) -> Self {
        Self {
            id,
            status: ResponseStatus::Resolved,
            value: Some(value),
            error: None,
        }
    }

    pub fn rejected(id: u64, error: impl Into<String>) -> Self {
        Self {
            id,
            status: ResponseStatus::Rejected,
            value: None,
            error: Some(error.into()),
        }
    }
}

/// JavaScript that delivers `response` to the waiting promise.
pub fn js_settle(response: &BridgeResponse) -> String {
    let json = serde_json::to_string(response).unwrap_or_else(|_| {
        format!(
            r#"{{"id":{},"status":"rejected","error":"unserializable response"}}"#,
            response.id
        )
    });
    format!("window.__setopsBridge && window.__setopsBridge.settle({json});")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cancelled_selection_is_empty() {
        let result = SelectionResult::cancelled();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "cancelled": true, "filePaths": [] })
        );
    }

    #[test]
    fn selected_paths_keep_order() {
        let result = SelectionResult::selected(vec![
            PathBuf::from("/data/b.csv"),
            PathBuf::from("/data/a.xlsx"),
        ]);
        assert!(!result.cancelled);
        assert_eq!(result.file_paths, vec!["/data/b.csv", "/data/a.xlsx"]);
    }

    #[test]
    fn message_box_result_wire_names() {
        let result = MessageBoxResult {
            response: 0,
            checkbox_checked: false,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "response": 0, "checkboxChecked": false })
        );
    }

    #[test]
    fn resolved_response_omits_error() {
        let resp = BridgeResponse::resolved(3, json!(true));
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "id": 3, "status": "resolved", "value": true })
        );
    }

    #[test]
    fn rejected_response_omits_value() {
        let resp = BridgeResponse::rejected(4, "shell error: failed to run xdg-open");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "id": 4, "status": "rejected", "error": "shell error: failed to run xdg-open" })
        );
    }

    #[test]
    fn settle_script_embeds_json() {
        let script = js_settle(&BridgeResponse::resolved(9, json!({ "response": 1 })));
        assert!(script.starts_with("window.__setopsBridge && window.__setopsBridge.settle({"));
        assert!(script.contains(r#""id":9"#));
        assert!(script.ends_with(");"));
    }

    #[test]
    fn settle_script_escapes_strings() {
        let script = js_settle(&BridgeResponse::rejected(1, "</script>\"); alert(1); (\""));
        assert!(!script.contains("\"); alert(1); (\"\""));
        assert!(script.contains("\\\"); alert(1); (\\\""));
    }
}
