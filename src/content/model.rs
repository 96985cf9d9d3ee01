use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Typescript,
    Java,
    Springboot,
    Kotlin,
}

impl Language {
    /// File extensions to try, in order, when looking up a syntect grammar.
    pub fn syntax_candidates(self) -> &'static [&'static str] {
        match self {
            Language::Typescript => &["ts", "js"],
            Language::Java | Language::Springboot => &["java"],
            Language::Kotlin => &["kt", "kts"],
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CodeExample {
    pub language: Language,
    pub code: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One side-by-side comparison. Route resolution only reads `title`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ComparisonRecord {
    pub title: String,
    pub typescript: CodeExample,
    pub java: CodeExample,
    #[serde(default)]
    pub springboot: Option<CodeExample>,
    /// Not present in the bundled content
    #[serde(default)]
    pub kotlin: Option<CodeExample>,
    pub key_differences: Vec<String>,
    #[serde(default)]
    pub similarities: Vec<String>,
}

impl ComparisonRecord {
    /// Code columns in display order.
    pub fn columns(&self, show_kotlin: bool) -> Vec<(&'static str, &CodeExample)> {
        let mut columns = vec![("TypeScript", &self.typescript), ("Java", &self.java)];
        if let Some(example) = &self.springboot {
            columns.push(("Spring Boot", example));
        }
        if show_kotlin {
            if let Some(example) = &self.kotlin {
                columns.push(("Kotlin", example));
            }
        }
        columns
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct RecordFile {
    pub records: Vec<ComparisonRecord>,
}

// --- /types-detail ---

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TypeSystemSummary {
    pub key: String,
    pub name: String,
    pub type_system: String,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TypeInfo {
    pub name: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    pub description: String,
    pub example: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TypeComparison {
    pub id: String,
    pub category: String,
    pub java: TypeInfo,
    pub js: TypeInfo,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub pitfalls: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Pitfall {
    pub title: String,
    pub java: String,
    pub javascript: String,
    pub solution: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Practice {
    pub title: String,
    pub recommendations: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TypesDetail {
    pub systems: Vec<TypeSystemSummary>,
    pub types: Vec<TypeComparison>,
    pub pitfalls: Vec<Pitfall>,
    pub practices: Vec<Practice>,
}

impl TypesDetail {
    /// Distinct type categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for ty in &self.types {
            if !categories.contains(&ty.category.as_str()) {
                categories.push(&ty.category);
            }
        }
        categories
    }

    /// Types in `category`, or all types when `None`.
    pub fn filtered<'a>(&'a self, category: Option<&'a str>) -> impl Iterator<Item = &'a TypeComparison> {
        self.types
            .iter()
            .filter(move |ty| category.map_or(true, |c| ty.category == c))
    }
}
