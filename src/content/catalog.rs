// Embedded comparison content
//
// Content files are compiled into the binary and parsed once at startup.

use super::model::{ComparisonRecord, RecordFile, TypesDetail};
use crate::error::ContentError;
use crate::route::Category;
use std::collections::HashMap;

const TYPES_DETAIL: (&str, &str) = (
    "types_detail.toml",
    include_str!("../../content/types_detail.toml"),
);

fn source(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Types => ("types.toml", include_str!("../../content/types.toml")),
        Category::AdvancedTypes => (
            "advanced_types.toml",
            include_str!("../../content/advanced_types.toml"),
        ),
        Category::Oop => ("oop.toml", include_str!("../../content/oop.toml")),
        Category::Collections => (
            "collections.toml",
            include_str!("../../content/collections.toml"),
        ),
        Category::Async => ("async.toml", include_str!("../../content/async.toml")),
        Category::JavaSpecific => (
            "java_specific.toml",
            include_str!("../../content/java_specific.toml"),
        ),
        Category::Patterns => ("patterns.toml", include_str!("../../content/patterns.toml")),
        Category::Testing => ("testing.toml", include_str!("../../content/testing.toml")),
        Category::SpringBoot => (
            "springboot.toml",
            include_str!("../../content/springboot.toml"),
        ),
        Category::Challenges => (
            "challenges.toml",
            include_str!("../../content/challenges.toml"),
        ),
    }
}

pub struct Catalog {
    datasets: HashMap<Category, Vec<ComparisonRecord>>,
    types_detail: TypesDetail,
}

impl Catalog {
    pub fn load() -> Result<Self, ContentError> {
        let mut datasets = HashMap::new();
        for category in Category::ALL {
            let (name, text) = source(category);
            let file: RecordFile =
                toml::from_str(text).map_err(|source| ContentError::Parse { name, source })?;
            if file.records.is_empty() {
                return Err(ContentError::Empty { name });
            }
            datasets.insert(category, file.records);
        }

        let (name, text) = TYPES_DETAIL;
        let types_detail =
            toml::from_str(text).map_err(|source| ContentError::Parse { name, source })?;

        let catalog = Self {
            datasets,
            types_detail,
        };
        tracing::debug!(records = catalog.record_count(), "content loaded");
        Ok(catalog)
    }

    pub fn records(&self, category: Category) -> &[ComparisonRecord] {
        self.datasets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn types_detail(&self) -> &TypesDetail {
        &self.types_detail
    }

    pub fn record_count(&self) -> usize {
        self.datasets.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CodeExample, Language};

    #[test]
    fn all_embedded_content_parses() {
        let catalog = Catalog::load().expect("content should parse");
        for category in Category::ALL {
            assert!(!catalog.records(category).is_empty(), "{:?}", category);
        }
        assert_eq!(catalog.records(Category::SpringBoot).len(), 6);
    }

    #[test]
    fn records_carry_both_core_languages() {
        let catalog = Catalog::load().unwrap();
        for category in Category::ALL {
            for record in catalog.records(category) {
                assert_eq!(record.typescript.language, Language::Typescript, "{}", record.title);
                assert!(!record.java.code.is_empty(), "{}", record.title);
                assert!(!record.key_differences.is_empty(), "{}", record.title);
            }
        }
    }

    #[test]
    fn types_detail_has_every_section() {
        let catalog = Catalog::load().unwrap();
        let detail = catalog.types_detail();
        assert_eq!(detail.systems.len(), 3);
        assert!(!detail.types.is_empty());
        assert!(!detail.pitfalls.is_empty());
        assert!(!detail.practices.is_empty());
    }

    #[test]
    fn types_detail_filtering() {
        let catalog = Catalog::load().unwrap();
        let detail = catalog.types_detail();
        let categories = detail.categories();
        assert_eq!(categories.first(), Some(&"整數類型"));

        let all = detail.filtered(None).count();
        let per_category: usize = categories
            .iter()
            .map(|c| detail.filtered(Some(*c)).count())
            .sum();
        assert_eq!(all, per_category);
        assert_eq!(all, detail.types.len());
        assert_eq!(detail.filtered(Some("整數類型")).count(), 4);
    }

    #[test]
    fn kotlin_column_only_when_enabled() {
        let catalog = Catalog::load().unwrap();
        let record = &catalog.records(Category::Types)[0];
        let columns = record.columns(false);
        assert_eq!(columns[0].0, "TypeScript");
        assert_eq!(columns[1].0, "Java");
        assert!(columns.iter().all(|(label, _)| *label != "Kotlin"));
    }

    #[test]
    fn record_with_kotlin_gets_an_extra_column_when_enabled() {
        let catalog = Catalog::load().unwrap();
        let mut record = catalog.records(Category::Oop)[0].clone();
        record.kotlin = Some(CodeExample {
            language: Language::Kotlin,
            code: "data class User(val name: String)".into(),
            filename: None,
            explanation: String::new(),
            highlights: Vec::new(),
        });

        let hidden = record.columns(false);
        assert!(hidden.iter().all(|(label, _)| *label != "Kotlin"));

        let shown = record.columns(true);
        assert_eq!(shown.len(), hidden.len() + 1);
        let (label, example) = shown[shown.len() - 1];
        assert_eq!(label, "Kotlin");
        assert_eq!(example.language, Language::Kotlin);
    }
}
