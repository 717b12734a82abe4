// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Establecer text content de un elemento por ID (si existe)
pub fn set_text_by_id(id: &str, text: &str) {
    if let Some(element) = get_element_by_id(id) {
        set_text_content(&element, text);
    }
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .class_list()
        .add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .class_list()
        .remove_1(class)
}

/// Mostrar elemento (remueve la clase `hidden`)
pub fn show_element(id: &str) {
    if let Some(element) = get_element_by_id(id) {
        let _ = remove_class(&element, "hidden");
    }
}

/// Ocultar elemento (agrega la clase `hidden`)
pub fn hide_element(id: &str) {
    if let Some(element) = get_element_by_id(id) {
        let _ = add_class(&element, "hidden");
    }
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Leer el value de un input por ID ("" si no existe)
pub fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

/// Establecer el value de un input por ID
pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = get_element_by_id(id).and_then(|e| e.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value(value);
    }
}

/// Leer el value de un select por ID ("" si no existe)
pub fn select_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
        .map(|s| s.value())
        .unwrap_or_default()
}

/// Establecer el value de un select por ID
pub fn set_select_value(id: &str, value: &str) {
    if let Some(select) = get_element_by_id(id).and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    {
        select.set_value(value);
    }
}

/// Query selector all (buscar múltiples elementos por selector CSS)
/// Usa js_sys::eval para ejecutar querySelectorAll directamente
pub fn query_selector_all(selector: &str) -> Result<js_sys::Array, JsValue> {
    let js_code = format!("Array.from(document.querySelectorAll('{}'))", selector);
    let result = js_sys::eval(&js_code)?;
    if let Some(array) = result.dyn_ref::<js_sys::Array>() {
        Ok(array.clone())
    } else {
        Err(JsValue::from_str("querySelectorAll did not return an array"))
    }
}

/// Diálogo de confirmación nativo (false si no hay window)
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
