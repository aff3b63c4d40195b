use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/// Envelope shared by every `/api/v1` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub code: u16,
    pub result: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            status: "SUCCESS".to_string(),
            code: 200,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            status: "FAILURE".to_string(),
            code: error.code,
            result: None,
            error: Some(error),
        }
    }
}

pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(data))
}
