//! Bridge message validation and dispatch from webview to host services.

use setops_common::BridgeError;
use setops_webview::{BridgeRequest, BridgeResponse};

use crate::app_state::core::SetOpsApp;

use super::host_ops::HostServices;

impl SetOpsApp {
    /// Handle a single bridge message from a webview and send the reply.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view_id: u64, body: &str) {
        let Some(response) = dispatch(&self.host, view_id, body) else {
            return;
        };

        match self.windows.get(view_id) {
            Some(entry) => {
                // Failures are logged by the handle.
                let _ = entry.webview.send_response(&response);
            }
            None => tracing::warn!(
                view_id,
                id = response.id,
                "Bridge reply dropped: window already closed"
            ),
        }
    }
}

/// Parse, execute and answer one raw bridge message.
///
/// Returns `None` when no reply must be sent: the envelope is unreadable or
/// names an operation outside the allow-list.
fn dispatch(host: &HostServices, view_id: u64, body: &str) -> Option<BridgeResponse> {
    let request = match BridgeRequest::parse(body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(view_id, body_len = body.len(), error = %e, "Bridge message rejected");
            return None;
        }
    };

    let id = request.id;
    let call = match request.into_call() {
        Ok(call) => call,
        Err(e @ BridgeError::UnknownKind(_)) => {
            tracing::warn!(view_id, id, error = %e, "Bridge message rejected");
            return None;
        }
        Err(e) => {
            tracing::warn!(view_id, id, error = %e, "Bridge call refused");
            return Some(BridgeResponse::rejected(id, e.to_string()));
        }
    };

    let kind = call.kind();
    tracing::debug!(view_id, id, kind, "Bridge call dispatched");

    Some(match host.execute(call) {
        Ok(value) => BridgeResponse::resolved(id, value),
        Err(e) => {
            tracing::error!(view_id, id, kind, error = %e, "Bridge call failed");
            BridgeResponse::rejected(id, e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::super::host_ops::fakes::{RecordingOpener, ScriptedDialogs};
    use super::*;
    use serde_json::json;
    use setops_webview::ipc::ResponseStatus;

    fn host() -> HostServices {
        HostServices::new(
            Box::new(ScriptedDialogs {
                button: Some(0),
                ..Default::default()
            }),
            Box::new(RecordingOpener::default()),
        )
    }

    #[test]
    fn resolved_reply_carries_request_id() {
        let resp = dispatch(&host(), 1, r#"{"id":12,"kind":"selectFiles","payload":null}"#).unwrap();
        assert_eq!(resp.id, 12);
        assert_eq!(resp.status, ResponseStatus::Resolved);
        assert_eq!(resp.value, Some(json!({ "cancelled": true, "filePaths": [] })));
    }

    #[test]
    fn open_folder_missing_resolves_false() {
        let resp = dispatch(
            &host(),
            1,
            r#"{"id":3,"kind":"openFolder","payload":"/nonexistent/setops"}"#,
        )
        .unwrap();
        assert_eq!(resp.status, ResponseStatus::Resolved);
        assert_eq!(resp.value, Some(json!(false)));
    }

    #[test]
    fn show_message_round_trip() {
        let resp = dispatch(
            &host(),
            1,
            r#"{"id":5,"kind":"showMessage","payload":{"message":"ok","buttons":["OK"]}}"#,
        )
        .unwrap();
        assert_eq!(resp.value, Some(json!({ "response": 0, "checkboxChecked": false })));
    }

    #[test]
    fn unknown_kind_gets_no_reply() {
        for kind in ["eval", "exec", "readFile", "select-files", ""] {
            let body = json!({ "id": 1, "kind": kind, "payload": null }).to_string();
            assert!(dispatch(&host(), 1, &body).is_none(), "{kind:?} got a reply");
        }
    }

    #[test]
    fn malformed_envelope_gets_no_reply() {
        assert!(dispatch(&host(), 1, "not json").is_none());
        assert!(dispatch(&host(), 1, r#"{"kind":"selectFolder"}"#).is_none());
    }

    #[test]
    fn invalid_payload_is_rejected() {
        let resp = dispatch(&host(), 1, r#"{"id":8,"kind":"showMessage","payload":{}}"#).unwrap();
        assert_eq!(resp.id, 8);
        assert_eq!(resp.status, ResponseStatus::Rejected);
        assert!(resp.error.unwrap().contains("showMessage"));
    }

    #[test]
    fn native_failure_is_rejected() {
        let host = HostServices::new(
            Box::new(ScriptedDialogs {
                fail: true,
                ..Default::default()
            }),
            Box::new(RecordingOpener::default()),
        );
        let resp = dispatch(&host, 1, r#"{"id":4,"kind":"selectFiles"}"#).unwrap();
        assert_eq!(resp.status, ResponseStatus::Rejected);
        assert_eq!(resp.error.as_deref(), Some("dialog error: no display"));
    }
}
