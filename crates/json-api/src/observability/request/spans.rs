//! Route templates for span and metric labels.

/// Replace numeric path segments with `{id}` so metric labels stay low-cardinality.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    if segments.first() == Some(&"assets") {
        return "/assets/{path}".to_owned();
    }

    format!("/{}", segments.join("/"))
}
