//! Tutorial assets: images, videos and readable content.
//!
//! An asset is identified by a GUID rather than a storage-assigned integer,
//! so it can be created inside a tutorial before anything is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;
use uuid::Uuid;

use crate::domain::foundation::{require_non_empty, ValidationError};

use super::content_item::ContentItem;

/// Kind of asset attached to a tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    ReadableContentItem,
    Image,
    Video,
}

impl AssetType {
    /// Name used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::ReadableContentItem => "ReadableContentItem",
            AssetType::Image => "Image",
            AssetType::Video => "Video",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ReadableContentItem" => Ok(AssetType::ReadableContentItem),
            "Image" => Ok(AssetType::Image),
            "Video" => Ok(AssetType::Video),
            other => Err(ValidationError::invalid_format(
                "asset_type",
                format!("unknown asset type '{}'", other),
            )),
        }
    }
}

/// Editorial status of an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublishingStatus {
    #[default]
    Draft,
    ReadyToEdit,
    ReadyToApproval,
    ApprovedAndLocked,
}

impl PublishingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishingStatus::Draft => "Draft",
            PublishingStatus::ReadyToEdit => "ReadyToEdit",
            PublishingStatus::ReadyToApproval => "ReadyToApproval",
            PublishingStatus::ApprovedAndLocked => "ApprovedAndLocked",
        }
    }
}

impl fmt::Display for PublishingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublishingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(PublishingStatus::Draft),
            "ReadyToEdit" => Ok(PublishingStatus::ReadyToEdit),
            "ReadyToApproval" => Ok(PublishingStatus::ReadyToApproval),
            "ApprovedAndLocked" => Ok(PublishingStatus::ApprovedAndLocked),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown publishing status '{}'", other),
            )),
        }
    }
}

/// Globally unique asset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcmeAssetIdentifier(Uuid);

impl AcmeAssetIdentifier {
    /// Creates a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AcmeAssetIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AcmeAssetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_uri(field: &str, raw: &str) -> Result<Url, ValidationError> {
    let raw = require_non_empty(field, raw)?;
    Url::parse(&raw).map_err(|e| ValidationError::invalid_format(field, e.to_string()))
}

/// Image hosted at an absolute URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    image_uri: Url,
}

impl ImageAsset {
    /// # Errors
    ///
    /// - `InvalidFormat` if `image_url` is not an absolute URI
    pub fn new(image_url: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            image_uri: parse_uri("image_url", image_url)?,
        })
    }

    pub fn image_uri(&self) -> &Url {
        &self.image_uri
    }
}

/// Video hosted at an absolute URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    video_uri: Url,
}

impl VideoAsset {
    /// # Errors
    ///
    /// - `InvalidFormat` if `video_url` is not an absolute URI
    pub fn new(video_url: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            video_uri: parse_uri("video_url", video_url)?,
        })
    }

    pub fn video_uri(&self) -> &Url {
        &self.video_uri
    }
}

/// Inline text meant to be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadableContentAsset {
    readable_content: String,
}

impl ReadableContentAsset {
    pub fn new(readable_content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            readable_content: require_non_empty("readable_content", readable_content)?,
        })
    }

    pub fn readable_content(&self) -> &str {
        &self.readable_content
    }
}

/// The concrete payload of an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetKind {
    Image(ImageAsset),
    Video(VideoAsset),
    ReadableContent(ReadableContentAsset),
}

/// An asset owned by a tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    identifier: AcmeAssetIdentifier,
    status: PublishingStatus,
    kind: AssetKind,
}

impl Asset {
    /// Creates a draft asset with a fresh identifier.
    pub fn new(kind: AssetKind) -> Self {
        Self {
            identifier: AcmeAssetIdentifier::new(),
            status: PublishingStatus::Draft,
            kind,
        }
    }

    pub fn image(image_url: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(AssetKind::Image(ImageAsset::new(image_url)?)))
    }

    pub fn video(video_url: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(AssetKind::Video(VideoAsset::new(video_url)?)))
    }

    pub fn readable_content(content: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(AssetKind::ReadableContent(
            ReadableContentAsset::new(content)?,
        )))
    }

    /// Rebuilds an asset from its stored columns.
    pub fn reconstitute(
        identifier: AcmeAssetIdentifier,
        status: PublishingStatus,
        asset_type: AssetType,
        content: &str,
    ) -> Result<Self, ValidationError> {
        let kind = match asset_type {
            AssetType::Image => AssetKind::Image(ImageAsset::new(content)?),
            AssetType::Video => AssetKind::Video(VideoAsset::new(content)?),
            AssetType::ReadableContentItem => {
                AssetKind::ReadableContent(ReadableContentAsset::new(content)?)
            }
        };
        Ok(Self {
            identifier,
            status,
            kind,
        })
    }

    pub fn identifier(&self) -> AcmeAssetIdentifier {
        self.identifier
    }

    pub fn status(&self) -> PublishingStatus {
        self.status
    }

    pub fn kind(&self) -> &AssetKind {
        &self.kind
    }

    pub fn asset_type(&self) -> AssetType {
        match self.kind {
            AssetKind::Image(_) => AssetType::Image,
            AssetKind::Video(_) => AssetType::Video,
            AssetKind::ReadableContent(_) => AssetType::ReadableContentItem,
        }
    }

    pub fn readable(&self) -> bool {
        matches!(self.kind, AssetKind::ReadableContent(_))
    }

    pub fn viewable(&self) -> bool {
        matches!(self.kind, AssetKind::Image(_) | AssetKind::Video(_))
    }

    /// URI for media assets, the text itself for readable ones.
    pub fn content(&self) -> String {
        match &self.kind {
            AssetKind::Image(image) => image.image_uri().to_string(),
            AssetKind::Video(video) => video.video_uri().to_string(),
            AssetKind::ReadableContent(text) => text.readable_content().to_string(),
        }
    }

    pub fn to_content_item(&self) -> ContentItem {
        ContentItem::new(self.asset_type(), self.content())
    }
}
