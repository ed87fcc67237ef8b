/// Installed into every WebView before page scripts run.
///
/// Exposes a frozen `window.setops` with exactly four promise-returning
/// methods and a private `window.__setopsBridge.settle` used by the host to
/// deliver replies. There is no generic invoke.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.setops) { return; }

    var pending = new Map();
    var nextId = 1;

    function call(kind, payload) {
        return new Promise(function(resolve, reject) {
            var id = nextId++;
            pending.set(id, { resolve: resolve, reject: reject });
            window.ipc.postMessage(JSON.stringify({
                id: id,
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        });
    }

    function settle(msg) {
        var entry = pending.get(msg.id);
        if (!entry) { return; }
        pending.delete(msg.id);
        if (msg.status === 'resolved') {
            entry.resolve(msg.value);
        } else {
            entry.reject(new Error(msg.error));
        }
    }

    Object.defineProperty(window, '__setopsBridge', {
        value: Object.freeze({ settle: settle }),
        writable: false,
        configurable: false
    });

    Object.defineProperty(window, 'setops', {
        value: Object.freeze({
            selectFiles: function(options) { return call('selectFiles', options); },
            selectFolder: function() { return call('selectFolder'); },
            openFolder: function(folderPath) { return call('openFolder', folderPath); },
            showMessage: function(options) { return call('showMessage', options); }
        }),
        writable: false,
        configurable: false
    });
})();
"#;
