// ============================================================================
// CHARTS FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para el renderer de gráficos JS - Sin estado, sin lógica
// El gráfico es un sink opaco: recibe labels y series, nada más
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = renderStatusChart)]
    pub fn render_status_chart(canvas_id: &str, labels: Box<[JsValue]>, values: Box<[JsValue]>);

    #[wasm_bindgen(js_name = destroyCharts)]
    pub fn destroy_charts();
}

/// Helper: entregar la distribución por estado al sink de gráficos.
/// Labels ya localizados; los values se pasan como f64 (requisito de Chart.js)
pub fn render_status_distribution(labels: &[String], values: &[i64]) {
    let labels: Box<[JsValue]> = labels.iter().map(|l| JsValue::from_str(l)).collect();
    let values: Box<[JsValue]> = values.iter().map(|v| JsValue::from_f64(*v as f64)).collect();
    render_status_chart("statusChart", labels, values);
}
