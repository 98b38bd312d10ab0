use crate::models::materials::entities::Material;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct MaterialListResponse {
    pub items: Vec<Material>,
}
