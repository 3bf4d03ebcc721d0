//! Test-series entities and the nested test/section/question tree
//!
//! A test series owns an ordered list of tests; each test owns
//! sections; each section owns questions. The upstream API exposes the
//! tree through deep routes
//! (`/admin/test-series/{id}/tests/{id}/sections/{id}/questions/{id}`),
//! so every level carries its own `_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccessType, Reference};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSeries {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Reference>,
    #[serde(default)]
    pub sub_category: Option<Reference>,
    #[serde(default)]
    pub language: Option<Reference>,
    #[serde(default)]
    pub validity: Option<Reference>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub access_type: AccessType,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub tests: Vec<Test>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub sections: Vec<TestSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSection {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<TestQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestQuestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: u32,
    #[serde(default)]
    pub marks: Option<f64>,
    #[serde(default)]
    pub negative_marks: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSeriesCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub access_type: AccessType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSeriesUpdateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub access_type: AccessType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestUpdateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSectionCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestQuestionCreateRequest {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_marks: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestQuestionUpdateRequest {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_marks: Option<f64>,
}
