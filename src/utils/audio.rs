// ============================================================================
// AUDIO - Reproducción del sonido de notificación
// ============================================================================

use web_sys::HtmlAudioElement;

/// Resolver la ruta del asset de sonido desde la preferencia del usuario.
/// "default" y ausencia significan "sin asset resuelto" (sin reproducción),
/// igual que el comportamiento original del cliente.
pub fn resolve_sound_asset(preference: Option<&str>) -> Option<String> {
    match preference {
        Some(name) if !name.is_empty() && name != "default" => {
            Some(format!("/static/sounds/{}.mp3", name))
        }
        _ => None,
    }
}

/// Reproducir el sonido; cualquier fallo (autoplay bloqueado, asset ausente)
/// se ignora silenciosamente
pub fn play_sound(src: &str) {
    if let Ok(audio) = HtmlAudioElement::new_with_src(src) {
        if let Ok(promise) = audio.play() {
            // El navegador puede rechazar la promesa (política de autoplay);
            // consumirla evita un "unhandled rejection" en consola
            wasm_bindgen_futures::spawn_local(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_named_sound_to_asset_path() {
        assert_eq!(
            resolve_sound_asset(Some("chime")),
            Some("/static/sounds/chime.mp3".to_string())
        );
    }

    #[test]
    fn default_and_missing_resolve_to_none() {
        assert_eq!(resolve_sound_asset(Some("default")), None);
        assert_eq!(resolve_sound_asset(Some("")), None);
        assert_eq!(resolve_sound_asset(None), None);
    }
}
