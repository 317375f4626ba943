use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::web::http::Transport;
use ocms_shared::protocol::{
    CourseMaterials, CreateMaterial, DeleteMaterial, GetMaterial, ReorderMaterials,
    ToggleMaterialPublish, UpdateMaterial,
};
use ocms_shared::{
    LearningMaterial, MaterialDraft, MaterialOrder, MaterialPatch, MaterialPublishResponse,
    MessageResponse,
};

pub struct MaterialService<'a, T> {
    pub(super) api: &'a ApiClient<T>,
}

impl<T: Transport> MaterialService<'_, T> {
    /// 课程材料。失败时返回错误，是否降级为空列表由页面决定
    pub async fn for_course(&self, course_id: &str) -> ApiResult<Vec<LearningMaterial>> {
        self.api.call(&CourseMaterials::new(course_id)).await
    }

    pub async fn get(&self, material_id: &str) -> ApiResult<LearningMaterial> {
        self.api
            .call(&GetMaterial {
                material_id: material_id.to_string(),
            })
            .await
    }

    pub async fn create(&self, draft: MaterialDraft) -> ApiResult<LearningMaterial> {
        self.api.call(&CreateMaterial(draft)).await
    }

    pub async fn update(&self, material_id: &str, patch: MaterialPatch) -> ApiResult<LearningMaterial> {
        self.api
            .call(&UpdateMaterial {
                material_id: material_id.to_string(),
                patch,
            })
            .await
    }

    pub async fn toggle_publish(&self, material_id: &str) -> ApiResult<MaterialPublishResponse> {
        self.api.call(&ToggleMaterialPublish::new(material_id)).await
    }

    pub async fn delete(&self, material_id: &str) -> ApiResult<MessageResponse> {
        self.api.call(&DeleteMaterial::new(material_id)).await
    }

    pub async fn reorder(
        &self,
        course_id: &str,
        materials: Vec<MaterialOrder>,
    ) -> ApiResult<MessageResponse> {
        self.api
            .call(&ReorderMaterials {
                course_id: course_id.to_string(),
                materials,
            })
            .await
    }
}
