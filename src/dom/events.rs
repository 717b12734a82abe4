// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye (p.ej. con
//   set_inner_html... o un re-render de sección), el navegador automáticamente limpia
//   los listeners asociados. Por lo tanto, closure.forget() es seguro para listeners locales.
// - Para listeners globales (window/document): solo deben registrarse UNA VEZ al inicio
//   de la app, si no se acumulan.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

/// Helper para crear click handler simple
/// Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click handler por ID de elemento (no hace nada si el elemento no existe)
pub fn on_click_id<F>(id: &str, handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    if let Some(element) = crate::dom::get_element_by_id(id) {
        let _ = on_click(&element, handler);
    }
}

/// Helper para el evento change (selects de filtro)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Change handler por ID de elemento
pub fn on_change_id<F>(id: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    if let Some(element) = crate::dom::get_element_by_id(id) {
        let _ = on_change(&element, handler);
    }
}

/// Helper para keyup (Enter en el campo de búsqueda)
pub fn on_keyup<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
