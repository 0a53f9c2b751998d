use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::models::Product;

/// The preloaded product collection. Built once at startup and never
/// mutated; handlers only ever read it. All queries are linear scans with
/// first-match semantics — source order is the only order.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Read and validate a JSON array of records from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let records: Vec<Value> = serde_json::from_str(&text)
            .with_context(|| format!("{} is not a JSON array of records", path.display()))?;
        Self::from_records(records)
    }

    /// Validate records in order; the first bad one fails the whole load.
    pub fn from_records(records: Vec<Value>) -> anyhow::Result<Self> {
        let products = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                Product::from_record(record).with_context(|| format!("invalid record at index {}", i))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First record with a matching id. Uniqueness is assumed, not enforced.
    pub fn find_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First record whose email equals `email` exactly (case-sensitive).
    pub fn find_by_email(&self, email: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.email == email)
    }

    /// Case-insensitive substring filter on the display name, then
    /// truncation. No needle means no filter; no limit means all matches.
    pub fn search(&self, needle: Option<&str>, limit: Option<usize>) -> Vec<&Product> {
        let mut matches: Vec<&Product> = match needle {
            Some(needle) => {
                let needle = needle.to_lowercase();
                self.products
                    .iter()
                    .filter(|p| p.name_contains(&needle))
                    .collect()
            }
            None => self.products.iter().collect(),
        };
        if let Some(limit) = limit {
            matches.truncate(limit);
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Catalog {
        Catalog::from_records(vec![
            json!({ "id": 1, "title": "Red Shoe", "gmail": "a@x.com" }),
            json!({ "id": 2, "title": "Blue Hat", "gmail": "b@x.com" }),
            json!({ "id": 3, "title": "Red Scarf", "gmail": "c@x.com" }),
            json!({ "id": 4, "title": "Green Shoe", "gmail": "d@x.com" }),
        ])
        .unwrap()
    }

    #[test]
    fn find_by_id_returns_matching_record() {
        let catalog = fixture();
        assert_eq!(catalog.find_by_id(2).unwrap().name, "Blue Hat");
        assert!(catalog.find_by_id(99).is_none());
    }

    #[test]
    fn find_by_id_takes_first_match_on_duplicates() {
        let catalog = Catalog::from_records(vec![
            json!({ "id": 1, "title": "First", "gmail": "f@x.com" }),
            json!({ "id": 1, "title": "Second", "gmail": "s@x.com" }),
        ])
        .unwrap();
        assert_eq!(catalog.find_by_id(1).unwrap().name, "First");
    }

    #[test]
    fn find_by_email_is_exact_and_case_sensitive() {
        let catalog = fixture();
        assert_eq!(catalog.find_by_email("c@x.com").unwrap().id, 3);
        assert!(catalog.find_by_email("C@X.COM").is_none());
        assert!(catalog.find_by_email("c@x").is_none());
    }

    #[test]
    fn search_without_needle_returns_everything_in_order() {
        let catalog = fixture();
        let all = catalog.search(None, None);
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_filters_case_insensitively() {
        let catalog = fixture();
        let hits = catalog.search(Some("RED"), None);
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn search_applies_limit_after_filter() {
        let catalog = fixture();
        let hits = catalog.search(Some("shoe"), Some(1));
        let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn search_limit_zero_is_empty() {
        let catalog = fixture();
        assert!(catalog.search(None, Some(0)).is_empty());
    }

    #[test]
    fn search_with_no_hits_is_empty_not_an_error() {
        let catalog = fixture();
        assert!(catalog.search(Some("zzz"), None).is_empty());
    }

    #[test]
    fn load_rejects_bad_records_with_index() {
        let err = Catalog::from_records(vec![
            json!({ "id": 1, "title": "Ok", "gmail": "ok@x.com" }),
            json!({ "title": "No id", "gmail": "bad@x.com" }),
        ])
        .unwrap_err();
        assert!(format!("{:#}", err).contains("index 1"));
    }
}
