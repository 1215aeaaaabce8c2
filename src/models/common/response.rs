use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::PaginationInfo;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: None,
        }
    }

    pub fn success_paginated(
        data: T,
        pagination: PaginationInfo,
        message: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: Some(pagination),
        }
    }

    pub fn error(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Some(data),
            pagination: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            pagination: None,
        }
    }

    pub fn error_empty(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            pagination: None,
        }
    }
}
