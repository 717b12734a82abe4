// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use crate::dom::{create_element, set_attribute};
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer inner HTML
    pub fn html(self, html: &str) -> Self {
        self.element.set_inner_html(html);
        self
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}

// Solo ejecutable con wasm-pack test: necesita un document real
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn builds_element_with_class_attr_and_html() {
        let element = ElementBuilder::new("button")
            .unwrap()
            .class("swatch w-8 h-8 rounded-full")
            .attr("title", "Rot")
            .unwrap()
            .html(r#"<i class="fas fa-check"></i>"#)
            .build();

        assert_eq!(element.tag_name(), "BUTTON");
        assert_eq!(element.class_name(), "swatch w-8 h-8 rounded-full");
        assert_eq!(element.get_attribute("title").as_deref(), Some("Rot"));
        assert!(element.inner_html().contains("fa-check"));
    }
}
