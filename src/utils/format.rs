// Formateo compartido por las vistas

use chrono::NaiveDateTime;

/// Precio en euros, siempre con dos decimales
pub fn format_price(price: f64) -> String {
    format!("€{:.2}", price)
}

/// Fecha del backend (ISO-8601 sin zona) como dd.mm.yyyy.
/// Si el valor no parsea se muestra tal cual llegó.
pub fn format_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Fecha + hora para el panel de notificaciones
pub fn format_datetime(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Escapar texto que va dentro de HTML generado con format!
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(format_price(12.0), "€12.00");
        assert_eq!(format_price(7.556), "€7.56");
        assert_eq!(format_price(7.554), "€7.55");
    }

    #[test]
    fn date_parses_backend_shapes() {
        assert_eq!(format_date("2024-03-01T09:30:00"), "01.03.2024");
        assert_eq!(format_date("2024-03-01T09:30:00.123456"), "01.03.2024");
        // Valor irreconocible: passthrough
        assert_eq!(format_date("ayer"), "ayer");
    }

    #[test]
    fn datetime_keeps_time() {
        assert_eq!(format_datetime("2024-03-01T09:30:00"), "01.03.2024 09:30");
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b onclick="x">Löwe & Co</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;Löwe &amp; Co&lt;/b&gt;"
        );
    }
}
