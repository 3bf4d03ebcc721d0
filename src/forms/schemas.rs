//! Declarative field lists for every entity form
//!
//! The nine structurally similar admin modals collapse into these
//! schema constructors; entity-specific behavior lives in the handler
//! that submits the draft, not in bespoke form code. Select options
//! are left empty here; the schema endpoint fills them from the
//! sibling stores before serving a schema.

use super::{FieldKind, FieldSpec, FormSchema};

pub fn category() -> FormSchema {
    FormSchema {
        entity: "category",
        fields: vec![
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::File).accept("image/*"),
        ],
    }
}

pub fn sub_category() -> FormSchema {
    FormSchema {
        entity: "subcategory",
        fields: vec![
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("category", "Category", FieldKind::Select).required(),
        ],
    }
}

pub fn course() -> FormSchema {
    FormSchema {
        entity: "course",
        fields: vec![
            FieldSpec::new("title", "Title", FieldKind::Text).required(),
            FieldSpec::new("description", "Description", FieldKind::Textarea),
            FieldSpec::new("category", "Category", FieldKind::Select).required(),
            FieldSpec::new("subCategory", "Subcategory", FieldKind::Select),
            FieldSpec::new("language", "Language", FieldKind::Select),
            FieldSpec::new("validity", "Validity", FieldKind::Select),
            FieldSpec::new("price", "Price", FieldKind::Number),
            FieldSpec::new("accessType", "Access type", FieldKind::Select).required(),
            FieldSpec::new("startDate", "Start date", FieldKind::Date),
            FieldSpec::new("endDate", "End date", FieldKind::Date),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::File).accept("image/*"),
            FieldSpec::new("introVideo", "Intro video", FieldKind::File)
                .accept("video/*")
                .preview_key("introVideoUrl"),
        ],
    }
}

pub fn coupon() -> FormSchema {
    FormSchema {
        entity: "coupon",
        fields: vec![
            FieldSpec::new("code", "Code", FieldKind::Text).required(),
            FieldSpec::new("discountType", "Discount type", FieldKind::Select).required(),
            FieldSpec::new("discountValue", "Discount value", FieldKind::Number).required(),
            FieldSpec::new("maxUses", "Max uses", FieldKind::Number),
            FieldSpec::new("expiresAt", "Expires at", FieldKind::Date),
        ],
    }
}

pub fn current_affairs() -> FormSchema {
    FormSchema {
        entity: "current affairs",
        fields: vec![
            FieldSpec::new("title", "Title", FieldKind::Text).required(),
            FieldSpec::new("content", "Content", FieldKind::Textarea),
            FieldSpec::new("category", "Category", FieldKind::Select).required(),
            FieldSpec::new("date", "Date", FieldKind::Date).required(),
            FieldSpec::new("accessType", "Access type", FieldKind::Select).required(),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::File).accept("image/*"),
        ],
    }
}

pub fn daily_quiz() -> FormSchema {
    FormSchema {
        entity: "daily quiz",
        fields: vec![
            FieldSpec::new("title", "Title", FieldKind::Text).required(),
            FieldSpec::new("date", "Date", FieldKind::Date).required(),
            FieldSpec::new("accessType", "Access type", FieldKind::Select).required(),
        ],
    }
}

pub fn ebook() -> FormSchema {
    FormSchema {
        entity: "ebook",
        fields: vec![
            FieldSpec::new("title", "Title", FieldKind::Text).required(),
            FieldSpec::new("description", "Description", FieldKind::Textarea),
            FieldSpec::new("category", "Category", FieldKind::Select).required(),
            FieldSpec::new("subCategory", "Subcategory", FieldKind::Select),
            FieldSpec::new("language", "Language", FieldKind::Select),
            FieldSpec::new("price", "Price", FieldKind::Number),
            FieldSpec::new("accessType", "Access type", FieldKind::Select).required(),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::File).accept("image/*"),
            FieldSpec::new("book", "Book file", FieldKind::File)
                .accept("application/pdf")
                .preview_key("fileUrl"),
        ],
    }
}

pub fn live_class() -> FormSchema {
    FormSchema {
        entity: "live class",
        fields: vec![
            FieldSpec::new("title", "Title", FieldKind::Text).required(),
            FieldSpec::new("description", "Description", FieldKind::Textarea),
            FieldSpec::new("course", "Course", FieldKind::Select),
            FieldSpec::new("startTime", "Start time", FieldKind::Date).required(),
            FieldSpec::new("endTime", "End time", FieldKind::Date),
            FieldSpec::new("meetingUrl", "Meeting URL", FieldKind::Text),
            FieldSpec::new("accessType", "Access type", FieldKind::Select).required(),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::File).accept("image/*"),
        ],
    }
}

pub fn test_series() -> FormSchema {
    FormSchema {
        entity: "test series",
        fields: vec![
            FieldSpec::new("title", "Title", FieldKind::Text).required(),
            FieldSpec::new("description", "Description", FieldKind::Textarea),
            FieldSpec::new("category", "Category", FieldKind::Select).required(),
            FieldSpec::new("subCategory", "Subcategory", FieldKind::Select),
            FieldSpec::new("language", "Language", FieldKind::Select),
            FieldSpec::new("validity", "Validity", FieldKind::Select),
            FieldSpec::new("price", "Price", FieldKind::Number),
            FieldSpec::new("accessType", "Access type", FieldKind::Select).required(),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::File).accept("image/*"),
        ],
    }
}

pub fn order_details() -> FormSchema {
    FormSchema {
        entity: "order",
        fields: vec![FieldSpec::new("status", "Status", FieldKind::Select).required()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldKind;

    #[test]
    fn file_fields_carry_accept_patterns() {
        let schema = ebook();
        let book = schema.field("book").unwrap();
        assert_eq!(book.kind, FieldKind::File);
        assert_eq!(book.accept, Some("application/pdf"));
        assert_eq!(book.preview_key, Some("fileUrl"));
    }

    #[test]
    fn every_schema_has_at_least_one_required_field() {
        for schema in [
            category(),
            sub_category(),
            course(),
            coupon(),
            current_affairs(),
            daily_quiz(),
            ebook(),
            live_class(),
            test_series(),
            order_details(),
        ] {
            assert!(
                schema.fields.iter().any(|f| f.required),
                "{} schema has no required field",
                schema.entity
            );
        }
    }
}
