use serde::de::DeserializeOwned;
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Guardar un string plano (language, view_mode)
pub fn save_string(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())
}

/// Cargar un string plano (None si no existe o no hay storage)
pub fn load_string(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Cargar un valor JSON; None si falta o está corrupto (nunca falla)
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_string(key)?;
    serde_json::from_str(&json).ok()
}
