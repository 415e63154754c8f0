//! Turns a selected image file into a data URI for the avatar preview.
//!
//! The read is a one-shot future: there is no progress reporting and no
//! cancellation. A failed read is logged and otherwise dropped, leaving the
//! previous preview (if any) on screen.

use crate::profile::ProfileForm;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use leptos::logging::{log, warn};
use std::future::Future;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// MIME type used when the file does not report one (same as `FileReader.readAsDataURL`)
pub const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to read `{name}`: {reason}")]
    Read { name: String, reason: String },
    #[error("reading `{0}` did not produce an ArrayBuffer")]
    NotBuffer(String),
}

/// Anything the preview can be read from. In the browser this is a `File`
/// out of the picker's `FileList`.
pub trait ImageSource {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;
    fn read_bytes(&self) -> impl Future<Output = Result<Vec<u8>, PreviewError>>;
}

impl ImageSource for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    fn read_bytes(&self) -> impl Future<Output = Result<Vec<u8>, PreviewError>> {
        let name = self.name();
        let promise = self.array_buffer();
        async move {
            let buffer = JsFuture::from(promise)
                .await
                .map_err(|err| PreviewError::Read {
                    name: name.clone(),
                    reason: format!("{err:?}"),
                })?;
            if !buffer.is_instance_of::<js_sys::ArrayBuffer>() {
                return Err(PreviewError::NotBuffer(name));
            }
            Ok(js_sys::Uint8Array::new(&buffer).to_vec())
        }
    }
}

/// `data:<mime>;base64,<payload>`
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

pub async fn load_preview<S: ImageSource>(source: &S) -> Result<String, PreviewError> {
    let bytes = source.read_bytes().await?;
    log!(
        "read {} bytes from `{}` for preview",
        bytes.len(),
        source.file_name()
    );
    Ok(encode_data_uri(&source.mime_type(), &bytes))
}

/// A read started by a picker selection. The uploaded flag is already set
/// by the time one of these exists.
pub struct PendingPreview<S> {
    source: S,
}

impl<S: ImageSource> PendingPreview<S> {
    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn read(self) -> Result<String, PreviewError> {
        load_preview(&self.source).await
    }
}

/// Handle a file-picker selection: set the uploaded flag, then hand back the
/// read to run for the first selected file, if there is one.
pub fn select_image<S: ImageSource>(
    profile: &mut ProfileForm,
    file: Option<S>,
) -> Option<PendingPreview<S>> {
    profile.begin_image_upload();
    file.map(|source| PendingPreview { source })
}

/// Apply a finished read. A failure keeps whatever preview was showing.
pub fn finish_preview(profile: &mut ProfileForm, result: Result<String, PreviewError>) {
    match result {
        Ok(data_uri) => profile.apply_preview(data_uri),
        Err(err) => warn!("no preview: {err}"),
    }
}

/// Run `pending` in the background and hand its result to `apply`.
pub fn spawn_preview<S, F>(pending: PendingPreview<S>, apply: F)
where
    S: ImageSource + 'static,
    F: FnOnce(Result<String, PreviewError>) + 'static,
{
    leptos::task::spawn_local(async move { apply(pending.read().await) });
}
