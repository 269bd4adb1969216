use actix_multipart::Multipart;
use futures::{StreamExt, TryStreamExt};
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use mongodb::bson::oid::ObjectId;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("No avatar field in upload")]
    MissingFile,
    #[error("Upload exceeds {0} bytes")]
    TooLarge(usize),
    #[error("Malformed multipart body: {0}")]
    Multipart(String),
    #[error("GCS error: {0}")]
    Gcs(String),
}

impl From<AvatarError> for ApiError {
    fn from(err: AvatarError) -> Self {
        match err {
            AvatarError::UnsupportedType(_) | AvatarError::MissingFile | AvatarError::Multipart(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AvatarError::TooLarge(max) => ApiError::PayloadTooLarge(max),
            AvatarError::Gcs(msg) => ApiError::Storage(msg),
        }
    }
}

pub const AVATAR_FIELD: &str = "avatar";

/// An image pulled out of a multipart upload.
#[derive(Debug)]
pub struct AvatarUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub fn file_extension(content_type: &str) -> Result<&'static str, AvatarError> {
    match content_type {
        "image/jpeg" | "image/jpg" => Ok("jpg"),
        "image/png" => Ok("png"),
        "image/gif" => Ok("gif"),
        "image/webp" => Ok("webp"),
        other => Err(AvatarError::UnsupportedType(other.to_string())),
    }
}

pub fn object_name(user_id: ObjectId, extension: &str) -> String {
    format!(
        "avatars/{}/{}-{}.{}",
        user_id.to_hex(),
        chrono::Utc::now().timestamp(),
        Uuid::new_v4(),
        extension
    )
}

pub fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_name)
}

/// Reads the `avatar` field of a multipart body, refusing anything past `max_bytes`.
pub async fn read_avatar(mut payload: Multipart, max_bytes: usize) -> Result<AvatarUpload, AvatarError> {
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| AvatarError::Multipart(e.to_string()))?;

        let is_avatar = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .is_some_and(|name| name == AVATAR_FIELD);
        if !is_avatar {
            while field
                .try_next()
                .await
                .map_err(|e| AvatarError::Multipart(e.to_string()))?
                .is_some()
            {}
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        file_extension(&content_type)?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AvatarError::Multipart(e.to_string()))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AvatarError::TooLarge(max_bytes));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(AvatarUpload {
            content_type,
            bytes,
        });
    }

    Err(AvatarError::MissingFile)
}

pub struct AvatarService {
    client: Client,
    bucket_name: String,
}

impl AvatarService {
    pub async fn new(bucket_name: String) -> Result<Self, AvatarError> {
        let config = ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| AvatarError::Gcs(format!("Failed to create GCS client: {}", e)))?;

        Ok(Self {
            client: Client::new(config),
            bucket_name,
        })
    }

    pub async fn upload(&self, user_id: ObjectId, avatar: AvatarUpload) -> Result<String, AvatarError> {
        let extension = file_extension(&avatar.content_type)?;
        let object_name = object_name(user_id, extension);

        let mut media = Media::new(object_name.clone());
        media.content_type = avatar.content_type.into();
        let upload_type = UploadType::Simple(media);
        let upload_request = UploadObjectRequest {
            bucket: self.bucket_name.clone(),
            ..Default::default()
        };

        self.client
            .upload_object(&upload_request, avatar.bytes, &upload_type)
            .await
            .map_err(|e| AvatarError::Gcs(format!("Failed to upload to GCS: {}", e)))?;

        log::info!("Stored avatar {} in {}", object_name, self.bucket_name);
        Ok(public_url(&self.bucket_name, &object_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("image/jpeg").unwrap(), "jpg");
        assert_eq!(file_extension("image/jpg").unwrap(), "jpg");
        assert_eq!(file_extension("image/webp").unwrap(), "webp");
        assert!(matches!(
            file_extension("application/pdf"),
            Err(AvatarError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_object_name_is_scoped_to_user() {
        let user_id = ObjectId::new();
        let name = object_name(user_id, "png");
        assert!(name.starts_with(&format!("avatars/{}/", user_id.to_hex())));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            public_url("travel-avatars", "avatars/a/b.png"),
            "https://storage.googleapis.com/travel-avatars/avatars/a/b.png"
        );
    }

    #[test]
    fn test_errors_map_to_http() {
        use actix_web::ResponseError;

        let err: ApiError = AvatarError::TooLarge(1024).into();
        assert_eq!(err.status_code(), actix_web::http::StatusCode::PAYLOAD_TOO_LARGE);

        let err: ApiError = AvatarError::UnsupportedType("text/plain".into()).into();
        assert_eq!(err.status_code(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
