use anyhow::{bail, Context};
use serde_json::{Map, Value};

/// Which source key carried the display name. Remembered so list
/// projections echo the field under its original name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Title,
    FirstName,
}

impl NameField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::FirstName => "firstName",
        }
    }
}

/// One catalog record, normalized at load time. Source records come in two
/// shapes: flat `gmail` + `firstName`, or `title` with the email nested at
/// `meta.reviewerEmail`. Both resolve to the same lookup keys here; the full
/// record is kept verbatim for single-record responses.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub email: String,
    name_field: NameField,
    raw: Value,
}

impl Product {
    /// Resolve a raw JSON record into a `Product`. Any missing lookup field
    /// is an error here so that bad data fails at startup, not per request.
    pub fn from_record(record: Value) -> anyhow::Result<Self> {
        let obj = match record.as_object() {
            Some(obj) => obj,
            None => bail!("record is not a JSON object"),
        };

        let id = obj
            .get("id")
            .and_then(Value::as_i64)
            .context("record has no integer `id` field")?;

        let (name, name_field) = if let Some(title) = obj.get("title").and_then(Value::as_str) {
            (title.to_string(), NameField::Title)
        } else if let Some(first) = obj.get("firstName").and_then(Value::as_str) {
            (first.to_string(), NameField::FirstName)
        } else {
            bail!("record has neither `title` nor `firstName`");
        };

        // Flat `gmail` wins over the nested reviewer email when both exist.
        let email = obj
            .get("gmail")
            .and_then(Value::as_str)
            .or_else(|| record.pointer("/meta/reviewerEmail").and_then(Value::as_str))
            .context("record has neither `gmail` nor `meta.reviewerEmail`")?
            .to_string();

        Ok(Self {
            id,
            name,
            email,
            name_field,
            raw: record,
        })
    }

    /// The full source record, returned verbatim by single-record endpoints.
    pub fn record(&self) -> &Value {
        &self.raw
    }

    /// Reduced view for the contact listing: exactly `id`, the name field
    /// under its source key, and `gmail`.
    pub fn contact_card(&self) -> Value {
        let mut card = Map::new();
        card.insert("id".to_string(), Value::from(self.id));
        card.insert(
            self.name_field.key().to_string(),
            Value::from(self.name.clone()),
        );
        card.insert("gmail".to_string(), Value::from(self.email.clone()));
        Value::Object(card)
    }

    /// Case-insensitive substring match against the display name.
    /// `needle` must already be lowercased by the caller.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
