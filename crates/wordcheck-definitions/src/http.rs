use reqwest::{RequestBuilder, Url};

use crate::LookupError;

/// Append path segments to a base URL, percent-encoding each one
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<Url, LookupError> {
    let mut url = Url::parse(base).map_err(|e| LookupError::Endpoint(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| LookupError::Endpoint(format!("{base}: cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send the request and return the body of a 2xx response
pub(crate) async fn fetch_body(request: RequestBuilder) -> Result<String, LookupError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Http {
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}
