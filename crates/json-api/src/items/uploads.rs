//! Item image uploads.

use std::path::Path;

use jiff::Timestamp;
use salvo::{Request, http::StatusError};
use tokio::fs;
use tracing::{info, warn};
use uuid::Uuid;

use crate::extensions::*;

const IMAGE_FIELD: &str = "image";

/// Upload names are `<millis>-<random><ext>`, keeping the client's extension.
pub(super) fn image_file_name(original: Option<&str>, millis: i64, random: u64) -> String {
    let extension = original
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|extension| extension.to_str())
        .filter(|extension| {
            !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric())
        });

    match extension {
        Some(extension) => format!("{millis}-{random}.{extension}"),
        None => format!("{millis}-{random}"),
    }
}

/// Copies the `image` part of a multipart request into `assets_dir`.
///
/// Returns the stored file name, or an empty string when the request carries no image.
pub(super) async fn store_image(
    req: &mut Request,
    assets_dir: &Path,
) -> Result<String, StatusError> {
    let Some(file) = req.file(IMAGE_FIELD).await else {
        return Ok(String::new());
    };

    let file_name = image_file_name(
        file.name(),
        Timestamp::now().as_millisecond(),
        Uuid::new_v4().as_u64_pair().0 % 1_000_000_000,
    );

    fs::create_dir_all(assets_dir)
        .await
        .or_500("failed to create assets directory")?;

    fs::copy(file.path(), assets_dir.join(&file_name))
        .await
        .or_500("failed to store item image")?;

    info!(file_name, "stored item image");

    Ok(file_name)
}

/// Best-effort removal of an image whose item was never created.
pub(super) async fn discard_image(assets_dir: &Path, file_name: &str) {
    if file_name.is_empty() {
        return;
    }

    if let Err(source) = fs::remove_file(assets_dir.join(file_name)).await {
        warn!(file_name, "failed to discard orphaned item image: {source}");
    }
}
