use axum::Json;

use bedside_core::models::tool::{Tool, ToolInfo};

pub async fn list_tools() -> Json<Vec<ToolInfo>> {
    Json(Tool::ALL.into_iter().map(ToolInfo::from).collect())
}
