use std::collections::HashMap;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use tracing::debug;

/// Drains a multipart body into a flat name -> value map.
///
/// Only text parts are kept; uploaded files are skipped. A repeated name
/// keeps its last value.
pub async fn collect_fields(
    mut multipart: Multipart,
) -> Result<HashMap<String, String>, MultipartError> {
    let mut fields = HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if field.file_name().is_some() {
            debug!("Skipping uploaded file in form field: {}", name);
            continue;
        }
        let value = field.text().await?;
        fields.insert(name, value);
    }

    Ok(fields)
}

#[cfg(test)]
pub(crate) const TEST_BOUNDARY: &str = "----relay-test-boundary";

/// Builds a `multipart/form-data` body out of text fields.
#[cfg(test)]
pub(crate) fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{TEST_BOUNDARY}--\r\n"));
    body
}
