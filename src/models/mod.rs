use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod test_series;

pub use test_series::{
    Test, TestCreateRequest, TestQuestion, TestQuestionCreateRequest, TestQuestionUpdateRequest,
    TestSection, TestSectionCreateRequest, TestSeries, TestSeriesCreateRequest,
    TestSeriesUpdateRequest, TestUpdateRequest,
};

/// A foreign-key reference as the upstream API serializes it: either a
/// raw identifier string or a populated object carrying `_id` plus
/// whatever descriptive fields the backend chose to embed.
///
/// This is the typed rendition of the `field?._id || field`
/// normalization that call sites otherwise repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Populated(PopulatedReference),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopulatedReference {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Populated(populated) => &populated.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Id(_) => None,
            Reference::Populated(populated) => populated.name.as_deref(),
        }
    }
}

/// Content visibility flag controlling whether end-users need payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessType {
    #[default]
    Free,
    Paid,
}

/// Pagination metadata shared by the client decoders, the stores and
/// the table engine. Defaults are page 1, limit 20, total 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            total: 0,
            total_pages: 0,
        }
    }
}

/// Entities that carry a unique identifier; the stores splice mutation
/// results into cached lists by this id.
pub trait Identified {
    fn entity_id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(impl Identified for $ty {
            fn entity_id(&self) -> &str {
                &self.id
            }
        })+
    };
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: Reference,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Access-duration option attached to paid content (e.g. "12 months")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub duration_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
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
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiscountType {
    Percentage,
    Flat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub used_count: Option<u32>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_type: String,
    pub item: Reference,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Reference,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub coupon: Option<Reference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAffairsCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAffairs {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<Reference>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub access_type: AccessType,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: u32,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuiz {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub access_type: AccessType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EBook {
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
    pub price: Option<f64>,
    #[serde(default)]
    pub access_type: AccessType,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveClass {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub course: Option<Reference>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub access_type: AccessType,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl_identified!(
    Category,
    SubCategory,
    Language,
    Validity,
    Course,
    Coupon,
    Order,
    CurrentAffairsCategory,
    CurrentAffairs,
    DailyQuiz,
    EBook,
    LiveClass,
    TestSeries,
);

// Request payloads. File-bearing creates (course, ebook, live class,
// current affairs) additionally travel as multipart through the form
// engine; the JSON shapes below are the non-file field sets.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryCreateRequest {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidityCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponCreateRequest {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdateRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuizCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub questions: Vec<QuizQuestion>,
    pub access_type: AccessType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_deserializes_raw_id() {
        let reference: Reference = serde_json::from_str(r#""64a1f2""#).unwrap();
        assert_eq!(reference.id(), "64a1f2");
        assert_eq!(reference.name(), None);
    }

    #[test]
    fn reference_deserializes_populated_object() {
        let reference: Reference =
            serde_json::from_str(r#"{"_id":"64a1f2","name":"UPSC","slug":"upsc"}"#).unwrap();
        assert_eq!(reference.id(), "64a1f2");
        assert_eq!(reference.name(), Some("UPSC"));
    }

    #[test]
    fn access_type_uses_uppercase_wire_names() {
        assert_eq!(serde_json::to_string(&AccessType::Paid).unwrap(), r#""PAID""#);
        let parsed: AccessType = serde_json::from_str(r#""FREE""#).unwrap();
        assert_eq!(parsed, AccessType::Free);
    }

    #[test]
    fn course_tolerates_missing_optional_fields() {
        let course: Course =
            serde_json::from_str(r#"{"_id":"c1","title":"Polity Foundation"}"#).unwrap();
        assert_eq!(course.entity_id(), "c1");
        assert_eq!(course.access_type, AccessType::Free);
        assert!(course.category.is_none());
    }
}
