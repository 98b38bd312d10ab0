use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
