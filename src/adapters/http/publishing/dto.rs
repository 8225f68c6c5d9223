//! Wire resources for category and tutorial endpoints and their assemblers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, TutorialId};
use crate::domain::publishing::{
    AcmeAssetIdentifier, AddVideoAssetToTutorialCommand, Asset, AssetType, Category,
    CreateCategoryCommand, CreateTutorialCommand, PublishingStatus, Tutorial,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryResource {
    pub name: String,
}

impl From<CreateCategoryResource> for CreateCategoryCommand {
    fn from(resource: CreateCategoryResource) -> Self {
        CreateCategoryCommand {
            name: resource.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTutorialResource {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub category_id: i64,
}

impl From<CreateTutorialResource> for CreateTutorialCommand {
    fn from(resource: CreateTutorialResource) -> Self {
        CreateTutorialCommand {
            title: resource.title,
            summary: resource.summary,
            category_id: CategoryId::new(resource.category_id),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVideoAssetToTutorialResource {
    pub video_url: String,
}

impl AddVideoAssetToTutorialResource {
    /// The tutorial id comes from the path, not the body.
    pub fn into_command(self, tutorial_id: TutorialId) -> AddVideoAssetToTutorialCommand {
        AddVideoAssetToTutorialCommand {
            video_url: self.video_url,
            tutorial_id,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResource {
    pub id: i64,
    pub name: String,
}

impl From<&Category> for CategoryResource {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().value(),
            name: category.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResource {
    pub identifier: AcmeAssetIdentifier,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub status: PublishingStatus,
    pub content: String,
}

impl From<&Asset> for AssetResource {
    fn from(asset: &Asset) -> Self {
        Self {
            identifier: asset.identifier(),
            asset_type: asset.asset_type(),
            status: asset.status(),
            content: asset.content(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialResource {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub category_id: i64,
    pub readable: bool,
    pub viewable: bool,
    pub assets: Vec<AssetResource>,
}

impl From<&Tutorial> for TutorialResource {
    fn from(tutorial: &Tutorial) -> Self {
        Self {
            id: tutorial.id().value(),
            title: tutorial.title().to_string(),
            summary: tutorial.summary().to_string(),
            category_id: tutorial.category_id().value(),
            readable: tutorial.readable(),
            viewable: tutorial.viewable(),
            assets: tutorial.assets().iter().map(AssetResource::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_tutorial_resource_reads_category_id() {
        let resource: CreateTutorialResource =
            serde_json::from_str(r#"{"title": "Traits", "summary": "s", "categoryId": 3}"#).unwrap();
        let cmd = CreateTutorialCommand::from(resource);
        assert_eq!(cmd.category_id, CategoryId::new(3));
    }

    #[test]
    fn tutorial_resource_exposes_asset_type_as_type() {
        let mut tutorial = Tutorial::new("Traits", "s", CategoryId::new(1))
            .unwrap()
            .with_id(TutorialId::new(8));
        tutorial.add_video("https://videos.acme.dev/traits.mp4").unwrap();

        let json = serde_json::to_value(TutorialResource::from(&tutorial)).unwrap();

        assert_eq!(json["id"], 8);
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["viewable"], true);
        assert_eq!(json["readable"], false);
        assert_eq!(json["assets"][0]["type"], "Video");
        assert_eq!(json["assets"][0]["status"], "Draft");
        assert_eq!(json["assets"][0]["content"], "https://videos.acme.dev/traits.mp4");
    }

    #[test]
    fn video_resource_takes_tutorial_id_from_path() {
        let resource: AddVideoAssetToTutorialResource =
            serde_json::from_str(r#"{"videoUrl": "https://v.acme.dev/1.mp4"}"#).unwrap();
        let cmd = resource.into_command(TutorialId::new(4));
        assert_eq!(cmd.tutorial_id, TutorialId::new(4));
        assert_eq!(cmd.video_url, "https://v.acme.dev/1.mp4");
    }
}
