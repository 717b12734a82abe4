// ============================================================================
// TRACKING VIEWMODEL - Normalización del payload crudo de tracking
// ============================================================================
// El backend guarda el resultado del carrier como string JSON opaco y poco
// tipado. Esta es LA ÚNICA ruta de ese blob hacia la UI: una función pura.
// Payload ausente o malformado => sentinel de error, jamás un panic.
// ============================================================================

use serde_json::Value;

/// Evento del historial de tracking (el backend lo entrega newest-first,
/// aquí no se re-ordena)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingEvent {
    pub time: String,
    pub text: String,
}

/// View-model normalizado del estado de envío de un pedido
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingViewModel {
    pub carrier: Option<String>,
    pub status: String,
    /// Progreso clampeado a [0, 100]
    pub progress: u8,
    pub history: Vec<TrackingEvent>,
    pub url: Option<String>,
    /// Con error=true la UI de tracking se suprime por completo
    pub error: bool,
}

impl TrackingViewModel {
    /// Sentinel de error: suprime todos los widgets de tracking dependientes
    pub fn error_sentinel() -> Self {
        Self {
            carrier: None,
            status: String::new(),
            progress: 0,
            history: Vec::new(),
            url: None,
            error: true,
        }
    }
}

/// Derivar el view-model desde el payload crudo opcional.
/// Determinista: mismo payload, salida idéntica en cada llamada.
pub fn derive(raw: Option<&str>) -> TrackingViewModel {
    let raw = match raw {
        Some(raw) => raw,
        None => return TrackingViewModel::error_sentinel(),
    };

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return TrackingViewModel::error_sentinel(),
    };

    let obj = match value.as_object() {
        Some(obj) => obj,
        None => return TrackingViewModel::error_sentinel(),
    };

    // El servicio de tracking marca los fallos con una clave "error"
    if obj.contains_key("error") {
        return TrackingViewModel::error_sentinel();
    }

    let carrier = obj
        .get("carrier")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let status = obj
        .get("status")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let progress = clamp_progress(obj.get("progress"));

    let history = obj
        .get("history")
        .and_then(|v| v.as_array())
        .map(|events| {
            events
                .iter()
                .filter_map(|event| {
                    let event = event.as_object()?;
                    Some(TrackingEvent {
                        time: event.get("time")?.as_str().unwrap_or("").to_string(),
                        text: event.get("text")?.as_str().unwrap_or("").to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let url = obj
        .get("url")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    TrackingViewModel {
        carrier,
        status,
        progress,
        history,
        url,
        error: false,
    }
}

/// Clampear progress a [0, 100]; ausente o no numérico => 0
fn clamp_progress(value: Option<&Value>) -> u8 {
    let raw = match value {
        Some(v) => v
            .as_i64()
            .or_else(|| v.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        None => 0,
    };
    raw.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_payload_yields_error_sentinel() {
        let vm = derive(None);
        assert!(vm.error);
        assert_eq!(vm.progress, 0);
        assert!(vm.history.is_empty());
    }

    #[test]
    fn malformed_payloads_never_panic() {
        for raw in ["", "{", "not json", "[1,2,3]", "42", "null", "\"str\""] {
            let vm = derive(Some(raw));
            assert!(vm.error, "payload {:?} debería dar sentinel", raw);
        }
    }

    #[test]
    fn error_key_in_payload_yields_sentinel() {
        let vm = derive(Some(r#"{"error": "carrier timeout", "status": "x"}"#));
        assert!(vm.error);
        assert!(vm.status.is_empty());
    }

    #[test]
    fn valid_payload_is_fully_extracted() {
        let raw = r#"{
            "carrier": "DHL",
            "status": "In transit",
            "progress": 60,
            "url": "https://dhl.example/track/X",
            "history": [
                {"time": "2024-03-02 10:00", "text": "En reparto"},
                {"time": "2024-03-01 18:00", "text": "En centro logístico"}
            ]
        }"#;
        let vm = derive(Some(raw));
        assert!(!vm.error);
        assert_eq!(vm.carrier.as_deref(), Some("DHL"));
        assert_eq!(vm.status, "In transit");
        assert_eq!(vm.progress, 60);
        assert_eq!(vm.history.len(), 2);
        // Orden recibido preservado (newest-first según el backend)
        assert_eq!(vm.history[0].text, "En reparto");
        assert_eq!(vm.url.as_deref(), Some("https://dhl.example/track/X"));
    }

    #[test]
    fn progress_is_clamped_into_range() {
        assert_eq!(derive(Some(r#"{"status":"s"}"#)).progress, 0);
        assert_eq!(derive(Some(r#"{"progress": -5}"#)).progress, 0);
        assert_eq!(derive(Some(r#"{"progress": 250}"#)).progress, 100);
        assert_eq!(derive(Some(r#"{"progress": 33.7}"#)).progress, 33);
        assert_eq!(derive(Some(r#"{"progress": "high"}"#)).progress, 0);
    }

    #[test]
    fn derive_is_deterministic() {
        let raw = r#"{"carrier":"Hermes","status":"Delivered","progress":100,"history":[]}"#;
        assert_eq!(derive(Some(raw)), derive(Some(raw)));
    }

    #[test]
    fn empty_carrier_becomes_none() {
        let vm = derive(Some(r#"{"carrier": "", "status": "s", "progress": 1}"#));
        assert_eq!(vm.carrier, None);
    }
}
