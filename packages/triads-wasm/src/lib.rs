use serde::Serialize;
use triads::{EngineConfig, TriadError};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct EngineError {
    message: String,
    kind: &'static str,
}

fn error_to_engine_error(e: TriadError) -> EngineError {
    let kind = match &e {
        TriadError::InvalidNoteName(_) => "invalid-key",
        TriadError::InvalidStringIndex { .. } | TriadError::InvalidFretNumber { .. } => {
            "invalid-position"
        }
        TriadError::ConfigError(_) => "invalid-config",
        TriadError::SerializeError(_) => "serialize",
    };
    EngineError {
        message: e.to_string(),
        kind,
    }
}

fn to_js_error(e: TriadError) -> JsValue {
    let error = error_to_engine_error(e);
    let json = serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone());
    JsValue::from_str(&json)
}

/// Voicings for a major key as a JSON string
#[wasm_bindgen]
pub fn generate_triads_data(key: &str) -> Result<String, JsValue> {
    triads::generate_triads_data(key)
        .and_then(|result| result.to_json())
        .map_err(to_js_error)
}

/// Voicings for a major key with `max-fret` / `max-stretch` overrides given as YAML
#[wasm_bindgen]
pub fn generate_triads_data_with_config(
    key: &str,
    config_yaml: &str,
) -> Result<String, JsValue> {
    EngineConfig::from_yaml(config_yaml)
        .and_then(|config| triads::generate_triads_data_with(key, &config))
        .and_then(|result| result.to_json())
        .map_err(to_js_error)
}

/// The twelve key names accepted by the engine, as a JSON array
#[wasm_bindgen]
pub fn list_keys() -> String {
    serde_json::to_string(&triads::NOTE_NAMES_SHARP).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let error = error_to_engine_error(TriadError::InvalidNoteName("H".to_string()));
        assert_eq!(error.kind, "invalid-key");
        assert!(error.message.contains("'H'"));

        let error = error_to_engine_error(TriadError::ConfigError("bad".to_string()));
        assert_eq!(error.kind, "invalid-config");
    }

    #[test]
    fn test_generate_returns_json() {
        let json = generate_triads_data("C").unwrap();
        assert!(json.starts_with("{\"key\":\"C\""));
    }

    #[test]
    fn test_list_keys() {
        let keys: Vec<String> = serde_json::from_str(&list_keys()).unwrap();
        assert_eq!(keys.len(), 12);
        assert_eq!(keys[0], "C");
    }
}
