use netra_core::ColumnData;

/// Normalize a raw cell. Empty strings and `null` (case-insensitive) are
/// missing values; everything else is kept trimmed.
pub fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

/// Build typed storage from raw text cells. The narrowest type that fits
/// every non-null cell wins: Int, then Float, then Bool, then Utf8.
pub fn build_column(raw: Vec<Option<String>>) -> ColumnData {
    if raw.iter().flatten().count() == 0 {
        return ColumnData::Utf8(raw);
    }

    if raw.iter().flatten().all(|cell| cell.parse::<i64>().is_ok()) {
        return ColumnData::Int(
            raw.into_iter()
                .map(|cell| cell.and_then(|c| c.parse::<i64>().ok()))
                .collect(),
        );
    }

    if raw
        .iter()
        .flatten()
        .all(|cell| cell.parse::<f64>().is_ok())
    {
        return ColumnData::Float(
            raw.into_iter()
                .map(|cell| cell.and_then(|c| c.parse::<f64>().ok()))
                .collect(),
        );
    }

    if raw.iter().flatten().all(|cell| parse_bool(cell).is_some()) {
        return ColumnData::Bool(
            raw.into_iter()
                .map(|cell| cell.and_then(|c| parse_bool(&c)))
                .collect(),
        );
    }

    ColumnData::Utf8(raw)
}
