use super::{ApiRequest, HttpMethod};
use crate::{
    LearningMaterial, MaterialDraft, MaterialOrder, MaterialPatch, MaterialPublishResponse,
    MessageResponse,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CourseMaterials {
    #[serde(skip)]
    pub course_id: String,
}

impl CourseMaterials {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl ApiRequest for CourseMaterials {
    type Response = Vec<LearningMaterial>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/learning-materials/course/{}", self.course_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetMaterial {
    #[serde(skip)]
    pub material_id: String,
}

impl ApiRequest for GetMaterial {
    type Response = LearningMaterial;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/learning-materials/{}", self.material_id)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CreateMaterial(pub MaterialDraft);

impl ApiRequest for CreateMaterial {
    type Response = LearningMaterial;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/learning-materials".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMaterial {
    #[serde(skip)]
    pub material_id: String,
    #[serde(flatten)]
    pub patch: MaterialPatch,
}

impl ApiRequest for UpdateMaterial {
    type Response = LearningMaterial;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/learning-materials/{}", self.material_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleMaterialPublish {
    #[serde(skip)]
    pub material_id: String,
}

impl ToggleMaterialPublish {
    pub fn new(material_id: impl Into<String>) -> Self {
        Self {
            material_id: material_id.into(),
        }
    }
}

impl ApiRequest for ToggleMaterialPublish {
    type Response = MaterialPublishResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/learning-materials/{}/publish", self.material_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteMaterial {
    #[serde(skip)]
    pub material_id: String,
}

impl DeleteMaterial {
    pub fn new(material_id: impl Into<String>) -> Self {
        Self {
            material_id: material_id.into(),
        }
    }
}

impl ApiRequest for DeleteMaterial {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/learning-materials/{}", self.material_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReorderMaterials {
    #[serde(skip)]
    pub course_id: String,
    pub materials: Vec<MaterialOrder>,
}

impl ApiRequest for ReorderMaterials {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/learning-materials/course/{}/reorder", self.course_id)
    }
}
