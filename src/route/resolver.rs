// Route resolution: location -> page
//
// Resolution is a pure lookup over the in-memory catalog. There is no loading
// phase; an unknown category is a normal `NotFound` result that the page
// controller turns into a redirect to the root.

use super::Location;
use crate::anchor::{AnchorEntry, AnchorTable, SPRING_BOOT_SECTIONS};
use crate::content::{Catalog, ComparisonRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Types,
    AdvancedTypes,
    Oop,
    Collections,
    Async,
    JavaSpecific,
    Patterns,
    Testing,
    SpringBoot,
    Challenges,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Types,
        Category::AdvancedTypes,
        Category::Oop,
        Category::Collections,
        Category::Async,
        Category::JavaSpecific,
        Category::Patterns,
        Category::Testing,
        Category::SpringBoot,
        Category::Challenges,
    ];

    /// Case-sensitive lookup of a URL token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            Category::Types => "types",
            Category::AdvancedTypes => "advanced-types",
            Category::Oop => "oop",
            Category::Collections => "collections",
            Category::Async => "async",
            Category::JavaSpecific => "java-specific",
            Category::Patterns => "patterns",
            Category::Testing => "testing",
            Category::SpringBoot => "springboot",
            Category::Challenges => "challenges",
        }
    }

    #[cfg(test)]
    pub fn path(self) -> String {
        format!("/comparison/{}", self.token())
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Types => "基本型別系統",
            Category::AdvancedTypes => "進階型別系統",
            Category::Oop => "物件導向程式設計",
            Category::Collections => "集合操作比較",
            Category::Async => "異步程式設計",
            Category::JavaSpecific => "Java 專屬特性",
            Category::Patterns => "設計模式實作",
            Category::Testing => "測試框架對照",
            Category::SpringBoot => "Spring Boot 框架概念",
            Category::Challenges => "⚠️ 常見陷阱與挑戰",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Types => "比較 TypeScript 和 Java 的基本型別宣告、函數定義",
            Category::AdvancedTypes => "深入探討泛型、介面、抽象類別、列舉等進階概念",
            Category::Oop => "比較類別、繼承、多型、封裝等 OOP 核心概念",
            Category::Collections => {
                "比較陣列、列表的操作方法,JavaScript Array 方法與 Java Stream API"
            }
            Category::Async => "比較 Promise/async-await 與 CompletableFuture、反應式程式設計",
            Category::JavaSpecific => {
                "Lambda、註解、反射、Stream API 進階等 TypeScript 沒有的 Java 特性"
            }
            Category::Patterns => {
                "比較 Singleton、Factory、Observer、Builder、Strategy 等常見設計模式"
            }
            Category::Testing => "比較 Jest/Vitest 與 JUnit 5,Mock、斷言、整合測試等",
            Category::SpringBoot => "依賴注入、REST API、JPA、AOP、事務管理、攔截器等",
            Category::Challenges => "從 TypeScript 轉換到 Java 會遇到的實際困難和需要注意的地方",
        }
    }

    pub fn warning(self) -> Option<&'static str> {
        match self {
            Category::AdvancedTypes => Some("⚠️ 這部分內容較複雜,建議先掌握基本型別後再學習"),
            Category::Async => {
                Some("❌ Java 沒有 async/await 關鍵字!需要使用 CompletableFuture 或 Virtual Threads")
            }
            Category::JavaSpecific => {
                Some("⚠️ 這些是 Java 獨有的概念,TypeScript 開發者需要額外學習")
            }
            Category::Challenges => Some("💡 這些是實際開發中最容易踩的坑,務必仔細閱讀!"),
            _ => None,
        }
    }

    /// In-page anchor table; empty for categories without one.
    pub fn anchors(self) -> &'static [AnchorEntry] {
        match self {
            Category::SpringBoot => &SPRING_BOOT_SECTIONS,
            _ => &[],
        }
    }
}

/// Shape of a location, before any catalog lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    /// `/comparison/{token}`; the token is empty for a bare `/comparison`
    Comparison(String),
    TypesDetail,
    Unknown,
}

impl Route {
    pub fn from_location(location: &Location) -> Self {
        let segments: Vec<&str> = location.segments().collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["comparison"] => Route::Comparison(String::new()),
            ["comparison", token] => Route::Comparison((*token).to_string()),
            ["types-detail"] => Route::TypesDetail,
            _ => Route::Unknown,
        }
    }
}

/// A resolved comparison dataset with its page metadata.
#[derive(Clone, Copy, Debug)]
pub struct ComparisonPage<'a> {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub warning: Option<&'static str>,
    pub records: &'a [ComparisonRecord],
}

impl<'a> ComparisonPage<'a> {
    pub fn anchor_table(&self) -> AnchorTable<'static> {
        AnchorTable::new(self.category.anchors())
    }

    /// Anchor id for each record, in record order.
    pub fn anchor_ids(&self) -> Vec<Option<&'static str>> {
        self.anchor_table()
            .assign(self.records.iter().map(|r| r.title.as_str()))
    }
}

#[derive(Clone, Copy, Debug)]
pub enum RouteResult<'a> {
    Found(ComparisonPage<'a>),
    NotFound,
}

#[cfg(test)]
impl RouteResult<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteResult::Found(_))
    }
}

/// Look up a category token. Pure; safe to call on every frame.
pub fn resolve<'a>(catalog: &'a Catalog, token: &str) -> RouteResult<'a> {
    match Category::from_token(token) {
        Some(category) => RouteResult::Found(ComparisonPage {
            category,
            title: category.title(),
            description: category.description(),
            warning: category.warning(),
            records: catalog.records(category),
        }),
        None => RouteResult::NotFound,
    }
}

/// What the central panel shows for a location.
#[derive(Clone, Debug)]
pub enum View<'a> {
    Home,
    TypesDetail,
    Comparison(ComparisonPage<'a>),
    Redirect(Location),
}

/// Page controller: unknown routes and categories redirect to the root.
pub fn resolve_view<'a>(catalog: &'a Catalog, location: &Location) -> View<'a> {
    match Route::from_location(location) {
        Route::Home => View::Home,
        Route::TypesDetail => View::TypesDetail,
        Route::Comparison(token) => match resolve(catalog, &token) {
            RouteResult::Found(page) => View::Comparison(page),
            RouteResult::NotFound => View::Redirect(Location::root()),
        },
        Route::Unknown => View::Redirect(Location::root()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded content parses")
    }

    #[test]
    fn every_known_token_resolves_to_a_non_empty_dataset() {
        let catalog = catalog();
        for category in Category::ALL {
            match resolve(&catalog, category.token()) {
                RouteResult::Found(page) => {
                    assert_eq!(page.category, category);
                    assert!(!page.records.is_empty(), "{} is empty", category.token());
                    assert!(!page.title.is_empty());
                }
                RouteResult::NotFound => panic!("{} did not resolve", category.token()),
            }
        }
    }

    #[test]
    fn unknown_tokens_are_not_found() {
        let catalog = catalog();
        for token in ["", "unknown-xyz", "Types", "SPRINGBOOT", "types ", "comparison"] {
            assert!(!resolve(&catalog, token).is_found(), "{token:?} resolved");
        }
    }

    #[test]
    fn resolution_is_repeatable() {
        let catalog = catalog();
        let first = resolve(&catalog, "oop");
        let second = resolve(&catalog, "oop");
        match (first, second) {
            (RouteResult::Found(a), RouteResult::Found(b)) => {
                assert_eq!(a.category, b.category);
                assert_eq!(a.records.len(), b.records.len());
            }
            _ => panic!("oop did not resolve"),
        }
    }

    #[test]
    fn metadata_comes_from_the_fixed_table() {
        let catalog = catalog();
        let RouteResult::Found(page) = resolve(&catalog, "testing") else {
            panic!("testing did not resolve");
        };
        assert_eq!(page.title, "測試框架對照");
        assert_eq!(page.warning, None);
        assert!(Category::Async.warning().is_some());
    }

    #[test]
    fn routes_from_locations() {
        let route = |s: &str| Route::from_location(&Location::parse(s).unwrap());
        assert_eq!(route("/"), Route::Home);
        assert_eq!(route("/types-detail"), Route::TypesDetail);
        assert_eq!(route("/comparison/oop#x"), Route::Comparison("oop".into()));
        assert_eq!(route("/comparison"), Route::Comparison(String::new()));
        assert_eq!(route("/comparison/oop/extra"), Route::Unknown);
        for category in Category::ALL {
            assert_eq!(
                route(category.path().as_str()),
                Route::Comparison(category.token().to_string())
            );
        }
        assert_eq!(route("/elsewhere"), Route::Unknown);
    }

    #[test]
    fn page_controller_redirects_unknown_locations_to_root() {
        let catalog = catalog();
        for target in ["/comparison/unknown-xyz", "/comparison", "/nowhere"] {
            let view = resolve_view(&catalog, &Location::parse(target).unwrap());
            assert!(
                matches!(view, View::Redirect(ref to) if *to == Location::root()),
                "{target} should redirect"
            );
        }
        assert!(matches!(
            resolve_view(&catalog, &Location::parse("/comparison/springboot#di").unwrap()),
            View::Comparison(_)
        ));
    }

    #[test]
    fn only_springboot_has_anchor_ids() {
        let catalog = catalog();
        for category in Category::ALL {
            let RouteResult::Found(page) = resolve(&catalog, category.token()) else {
                unreachable!()
            };
            let ids = page.anchor_ids();
            assert_eq!(ids.len(), page.records.len());
            if category == Category::SpringBoot {
                assert_eq!(
                    ids,
                    [
                        Some("di"),
                        Some("rest"),
                        Some("jpa"),
                        Some("aop"),
                        Some("transaction"),
                        Some("interceptor")
                    ]
                );
            } else {
                assert!(ids.iter().all(Option::is_none));
            }
        }
    }
}
