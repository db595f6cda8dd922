use versus::ClientConfig;

const CLIENT_CONFIG_KEY: &str = "versus.client_config.v1";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// `None` when nothing is stored; `Some(Err)` when the stored JSON is unusable.
pub(super) fn load_client_config() -> Option<Result<ClientConfig, String>> {
    let raw = local_storage_get_string(CLIENT_CONFIG_KEY)?;
    Some(ClientConfig::from_json(&raw).map_err(|e| e.to_string()))
}

/// `(protocol, host)` of the current page, e.g. `("https:", "vote.example:8443")`.
pub(super) fn page_location() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let host = location.host().ok()?;
    Some((protocol, host))
}
