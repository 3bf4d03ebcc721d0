//! Schema-driven form engine
//!
//! Create/edit forms for every content type are expressed as
//! declarative field lists instead of per-entity code. A schema seeds
//! a draft from an existing entity (unwrapping populated references to
//! their identifier), collects text values and file attachments into
//! one flat payload, and selects the wire encoding: multipart whenever
//! a file field is present, JSON otherwise.
//!
//! Upload previews are scoped resources: each attachment writes a
//! preview file that is deleted when its handle drops, so a preview
//! can never outlive the draft that owns it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::errors::WebError;

pub mod schemas;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
    Number,
    Select,
    Textarea,
    File,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Choices for `Select` fields; usually filled from a sibling
    /// store at render time
    pub options: Vec<SelectOption>,
    /// Accepted MIME pattern for `File` fields
    pub accept: Option<&'static str>,
    /// Entity key holding the already-uploaded asset URL; defaults to
    /// `thumbnailUrl`
    pub preview_key: Option<&'static str>,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            options: Vec::new(),
            accept: None,
            preview_key: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn accept(mut self, pattern: &'static str) -> Self {
        self.accept = Some(pattern);
        self
    }

    pub fn preview_key(mut self, key: &'static str) -> Self {
        self.preview_key = Some(key);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub entity: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Seed a draft from an existing entity (or `Value::Null` for a
    /// create form). Populated reference objects collapse to their
    /// `_id`; scalars are stringified; anything absent seeds empty.
    pub fn seed(&self, initial: &Value) -> FormDraft {
        let mut draft = FormDraft::default();

        for field in &self.fields {
            if field.kind == FieldKind::File {
                let key = field.preview_key.unwrap_or("thumbnailUrl");
                if let Some(url) = initial.get(key).and_then(Value::as_str) {
                    draft
                        .existing_previews
                        .insert(field.name.to_string(), url.to_string());
                }
                continue;
            }
            let seeded = match initial.get(field.name) {
                Some(value) => seed_text(value),
                None => String::new(),
            };
            draft.values.insert(field.name.to_string(), seeded);
        }

        draft
    }

    /// Native-`required` level validation only; anything richer is the
    /// backend's job.
    pub fn validate(&self, draft: &FormDraft) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();
        for field in &self.fields {
            if !field.required {
                continue;
            }
            let present = match field.kind {
                FieldKind::File => {
                    draft.files.iter().any(|f| f.field == field.name)
                        || draft.existing_previews.contains_key(field.name)
                }
                _ => draft
                    .values
                    .get(field.name)
                    .map(|v| !v.is_empty())
                    .unwrap_or(false),
            };
            if !present {
                missing.push(format!("{} is required", field.label));
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

fn seed_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Object(fields) => fields
            .get("_id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    Json,
    Multipart,
}

#[derive(Debug, Clone)]
pub struct FileAttachment {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Scoped preview artifact: the file is removed when the handle drops
#[derive(Debug)]
pub struct PreviewHandle {
    path: PathBuf,
}

impl PreviewHandle {
    pub fn create(dir: &Path, field: &str, bytes: &[u8]) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{field}-{}", Uuid::new_v4()));
        std::fs::write(&path, bytes)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), "failed to remove preview: {error}");
            }
        }
    }
}

/// Local mutable mirror of an entity being created or edited, plus
/// unsaved attachments. Discarded (previews included) when dropped.
#[derive(Debug, Default)]
pub struct FormDraft {
    values: BTreeMap<String, String>,
    files: Vec<FileAttachment>,
    previews: Vec<PreviewHandle>,
    existing_previews: BTreeMap<String, String>,
}

impl FormDraft {
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set_value<S: Into<String>>(&mut self, name: &str, value: S) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn existing_preview(&self, name: &str) -> Option<&str> {
        self.existing_previews.get(name).map(String::as_str)
    }

    pub fn files(&self) -> &[FileAttachment] {
        &self.files
    }

    /// Attach a file; when a preview directory is given, a scoped
    /// preview file is written alongside. Replacing an attachment for
    /// the same field releases the previous preview.
    pub fn attach_file(
        &mut self,
        field: &str,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
        preview_dir: Option<&Path>,
    ) -> std::io::Result<()> {
        if let Some(index) = self.files.iter().position(|f| f.field == field) {
            self.files.remove(index);
            self.previews.retain(|preview| {
                !preview
                    .path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with(&format!("{field}-")))
                    .unwrap_or(false)
            });
        }

        if let Some(dir) = preview_dir {
            self.previews.push(PreviewHandle::create(dir, field, &bytes)?);
        }
        self.files.push(FileAttachment {
            field: field.to_string(),
            file_name,
            content_type,
            bytes,
        });
        Ok(())
    }

    /// Multipart iff any file is attached
    pub fn encoding(&self) -> PayloadEncoding {
        if self.files.is_empty() {
            PayloadEncoding::Json
        } else {
            PayloadEncoding::Multipart
        }
    }

    /// Flat JSON payload of the text fields (empty values are kept;
    /// the backend treats them as clears)
    pub fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        for (name, value) in &self.values {
            object.insert(name.clone(), Value::String(value.clone()));
        }
        Value::Object(object)
    }

    /// Flat multipart payload: text values and file parts merged.
    /// Consumes the draft, which releases every preview.
    pub fn into_multipart(self) -> Result<reqwest::multipart::Form, WebError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.values {
            form = form.text(name.clone(), value.clone());
        }
        for file in self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| WebError::invalid_multipart(e.to_string()))?;
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> FormSchema {
        FormSchema {
            entity: "course",
            fields: vec![
                FieldSpec::new("title", "Title", FieldKind::Text).required(),
                FieldSpec::new("category", "Category", FieldKind::Select),
                FieldSpec::new("price", "Price", FieldKind::Number),
                FieldSpec::new("thumbnail", "Thumbnail", FieldKind::File).accept("image/*"),
            ],
        }
    }

    #[test]
    fn seed_unwraps_populated_references() {
        let initial = json!({
            "title": "Polity Foundation",
            "category": {"_id": "cat-1", "name": "UPSC"},
            "price": 499,
            "thumbnailUrl": "https://cdn.example/thumb.png"
        });
        let draft = schema().seed(&initial);
        assert_eq!(draft.value("title"), Some("Polity Foundation"));
        assert_eq!(draft.value("category"), Some("cat-1"));
        assert_eq!(draft.value("price"), Some("499"));
        assert_eq!(
            draft.existing_preview("thumbnail"),
            Some("https://cdn.example/thumb.png")
        );
    }

    #[test]
    fn seed_defaults_missing_fields_to_empty() {
        let draft = schema().seed(&Value::Null);
        assert_eq!(draft.value("title"), Some(""));
        assert_eq!(draft.value("category"), Some(""));
        assert!(draft.existing_preview("thumbnail").is_none());
    }

    #[test]
    fn encoding_switches_to_multipart_with_a_file() {
        let mut draft = schema().seed(&Value::Null);
        draft.set_value("title", "New course");
        assert_eq!(draft.encoding(), PayloadEncoding::Json);

        draft
            .attach_file(
                "thumbnail",
                "thumb.png".to_string(),
                "image/png".to_string(),
                vec![1, 2, 3],
                None,
            )
            .unwrap();
        assert_eq!(draft.encoding(), PayloadEncoding::Multipart);
    }

    #[test]
    fn json_payload_is_a_flat_string_object() {
        let mut draft = schema().seed(&Value::Null);
        draft.set_value("title", "New course");
        draft.set_value("price", "499");
        let payload = draft.to_json();
        assert_eq!(payload["title"], "New course");
        assert_eq!(payload["price"], "499");
        // File fields never leak into the JSON path
        assert!(payload.get("thumbnail").is_none());
        assert!(payload.as_object().unwrap().values().all(Value::is_string));
    }

    #[test]
    fn required_validation_covers_text_and_file_fields() {
        let schema = FormSchema {
            entity: "ebook",
            fields: vec![
                FieldSpec::new("title", "Title", FieldKind::Text).required(),
                FieldSpec::new("book", "Book file", FieldKind::File)
                    .required()
                    .preview_key("fileUrl"),
            ],
        };
        let mut draft = schema.seed(&Value::Null);
        let errors = schema.validate(&draft).unwrap_err();
        assert_eq!(errors, vec!["Title is required", "Book file is required"]);

        draft.set_value("title", "Economy Notes");
        draft
            .attach_file(
                "book",
                "book.pdf".to_string(),
                "application/pdf".to_string(),
                vec![0],
                None,
            )
            .unwrap();
        assert!(schema.validate(&draft).is_ok());
    }

    #[test]
    fn existing_upload_satisfies_required_file() {
        let schema = FormSchema {
            entity: "ebook",
            fields: vec![FieldSpec::new("book", "Book file", FieldKind::File)
                .required()
                .preview_key("fileUrl")],
        };
        let draft = schema.seed(&json!({"fileUrl": "https://cdn.example/book.pdf"}));
        assert!(schema.validate(&draft).is_ok());
    }

    #[test]
    fn preview_is_removed_when_draft_drops() {
        let dir = tempfile::tempdir().unwrap();
        let preview_path;
        {
            let mut draft = schema().seed(&Value::Null);
            draft
                .attach_file(
                    "thumbnail",
                    "thumb.png".to_string(),
                    "image/png".to_string(),
                    vec![9, 9, 9],
                    Some(dir.path()),
                )
                .unwrap();
            preview_path = draft.previews[0].path().to_path_buf();
            assert!(preview_path.exists());
        }
        assert!(!preview_path.exists());
    }

    #[test]
    fn replacing_attachment_releases_previous_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut draft = schema().seed(&Value::Null);
        draft
            .attach_file(
                "thumbnail",
                "a.png".to_string(),
                "image/png".to_string(),
                vec![1],
                Some(dir.path()),
            )
            .unwrap();
        let first = draft.previews[0].path().to_path_buf();
        draft
            .attach_file(
                "thumbnail",
                "b.png".to_string(),
                "image/png".to_string(),
                vec![2],
                Some(dir.path()),
            )
            .unwrap();
        assert!(!first.exists());
        assert_eq!(draft.files().len(), 1);
        assert_eq!(draft.files()[0].file_name, "b.png");
    }
}
