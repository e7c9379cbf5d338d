use validator::ValidationErrors;

/// Render validation failures as one human-readable line.
///
/// Issues are sorted by field path and use the JSON (camelCase) names, e.g.
/// `Validation error: Required at "complaintId"; Required at "rating"`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut issues: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let path = to_camel_case(&*field);
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                (path.clone(), message)
            })
        })
        .collect();

    issues.sort();

    let rendered: Vec<String> = issues
        .into_iter()
        .map(|(path, message)| format!("{} at \"{}\"", message, path))
        .collect();

    format!("Validation error: {}", rendered.join("; "))
}

/// `complaint_id` -> `complaintId`
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
