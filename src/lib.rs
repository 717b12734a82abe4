// ============================================================================
// KLEINMANAGER - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Derivaciones puras render-ready
// - Services: Comunicación API, polling y orquestación de refresh
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 KleinManager - Rust Puro + MVVM");

    // Crear y arrancar la app
    let app = App::new();
    app.run();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}
