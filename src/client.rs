use std::{path::Path, sync::Arc};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use secrecy::{ExposeSecret as _, SecretString};

use crate::{Error, Model, Result, types};

const BASE_URI: &str = "https://generativelanguage.googleapis.com";

/// Handle to the generative-language API
///
/// Holds an immutable API key and a shared [`reqwest::Client`]; cloning is
/// cheap and clones share the transport. Each call is stateless, so a single
/// client may serve concurrent calls without locking.
///
/// The key travels as a URL query parameter on every request, so treat the
/// request URL as a secret and keep it out of logs.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    key: SecretString,
    base_uri: Box<str>,
}

impl Client {
    pub fn new(key: impl Into<SecretString>) -> Self {
        Self::with_http_client(key, reqwest::Client::new())
    }

    /// Builds a client around a caller-supplied transport, e.g. one with
    /// timeouts or a proxy configured. The library sets no timeouts itself.
    pub fn with_http_client(key: impl Into<SecretString>, http: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http,
                key: key.into(),
                base_uri: BASE_URI.into(),
            }),
        }
    }

    #[cfg(test)]
    fn with_base_uri(self, base_uri: &str) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: self.inner.http.clone(),
                key: self.inner.key.expose_secret().into(),
                base_uri: base_uri.into(),
            }),
        }
    }

    /// Sends a text-only prompt and returns the first generated text, or
    /// `None` if the model produced nothing.
    pub async fn generate_text(&self, prompt: &str, model: Model) -> Result<Option<String>> {
        let request = types::GenerateContent {
            contents: vec![types::Content {
                parts: vec![types::Part::text(prompt)],
            }],
        };

        self.dispatch(model, &request).await
    }

    /// Sends a prompt together with an image read from disk.
    ///
    /// The MIME type is inferred from the file extension (`.png`, `.jpg`,
    /// `.jpeg`, `.webp`); a missing file or any other extension fails before
    /// the request is sent.
    pub async fn generate_text_with_image_file(
        &self,
        prompt: &str,
        image_path: impl AsRef<Path>,
        model: Model,
    ) -> Result<Option<String>> {
        let image_path = image_path.as_ref();

        if !image_path.exists() {
            return Err(Error::ImageNotFound(image_path.to_path_buf()));
        }
        let mime_type = image_mime_type(image_path)?;

        let bytes = tokio::fs::read(image_path).await?;
        let data = STANDARD.encode(bytes);

        self.generate_with_image(prompt, &data, mime_type, model)
            .await
    }

    /// Sends a prompt together with pre-encoded image data.
    ///
    /// An empty or whitespace-only payload fails before the request is sent;
    /// the MIME type is forwarded as given.
    pub async fn generate_text_with_image_data(
        &self,
        prompt: &str,
        base64_image: &str,
        mime_type: &str,
        model: Model,
    ) -> Result<Option<String>> {
        if base64_image.trim().is_empty() {
            return Err(Error::EmptyImageData);
        }

        self.generate_with_image(prompt, base64_image, mime_type, model)
            .await
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        base64_image: &str,
        mime_type: &str,
        model: Model,
    ) -> Result<Option<String>> {
        // Text part first: part order changes how the model reads the prompt.
        let request = types::GenerateContent {
            contents: vec![types::Content {
                parts: vec![
                    types::Part::text(prompt),
                    types::Part::inline_data(mime_type, base64_image),
                ],
            }],
        };

        self.dispatch(model, &request).await
    }

    async fn dispatch(
        &self,
        model: Model,
        request: &types::GenerateContent,
    ) -> Result<Option<String>> {
        let url = format!(
            "{}/v1beta/{}:generateContent?key={}",
            self.inner.base_uri,
            model.path(),
            self.inner.key.expose_secret(),
        );

        let response = self.inner.http.post(url).json(request).send().await?;
        let status_error = response.error_for_status_ref().err();
        let raw_json = response.text().await?;

        match serde_json::from_str::<types::ApiResponse<types::Response>>(&raw_json) {
            // A tolerant Response parses almost any JSON object, so a bad
            // status still wins even when the body looked like a success.
            Ok(types::ApiResponse::Ok(response)) => match status_error {
                Some(error) => Err(Error::Http(error)),
                None => Ok(first_text(response)),
            },
            Ok(types::ApiResponse::Err(api_error)) => Err(Error::Gemini(api_error.error)),
            // A body that is not the error envelope either rode in on a bad
            // status or is plain garbage.
            Err(json_error) => Err(status_error
                .map(Error::Http)
                .unwrap_or(Error::Json(json_error))),
        }
    }
}

/// First candidate, its content, its first part, its text. A break anywhere
/// in the chain means the model produced nothing, which is not an error.
fn first_text(response: types::Response) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
}

fn image_mime_type(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "webp" => Ok("image/webp"),
        _ => Err(Error::UnsupportedImageFormat(ext)),
    }
}
