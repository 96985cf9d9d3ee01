// Static navigation tree

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    GitCompare,
    Layers,
}

impl NavIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Home => "🏠",
            NavIcon::GitCompare => "🔀",
            NavIcon::Layers => "📚",
        }
    }
}

/// A navigation entry: a branch with children, or a leaf with a target path.
#[derive(Clone, Debug, PartialEq)]
pub enum NavNode {
    Branch {
        id: &'static str,
        label: &'static str,
        icon: Option<NavIcon>,
        children: Vec<NavNode>,
    },
    Leaf {
        id: &'static str,
        label: &'static str,
        icon: Option<NavIcon>,
        path: &'static str,
    },
}

impl NavNode {
    fn leaf(id: &'static str, label: &'static str, path: &'static str) -> Self {
        NavNode::Leaf {
            id,
            label,
            icon: None,
            path,
        }
    }

    pub fn icon(&self) -> Option<NavIcon> {
        match self {
            NavNode::Branch { icon, .. } | NavNode::Leaf { icon, .. } => *icon,
        }
    }
}

#[cfg(test)]
impl NavNode {
    pub fn id(&self) -> &'static str {
        match self {
            NavNode::Branch { id, .. } | NavNode::Leaf { id, .. } => *id,
        }
    }

    pub fn path(&self) -> Option<&'static str> {
        match self {
            NavNode::Leaf { path, .. } => Some(*path),
            NavNode::Branch { .. } => None,
        }
    }

    pub fn children(&self) -> &[NavNode] {
        match self {
            NavNode::Branch { children, .. } => children,
            NavNode::Leaf { .. } => &[],
        }
    }

    /// Depth-first walk over this node and its descendants.
    pub fn walk(&self) -> Vec<&NavNode> {
        let mut nodes = vec![self];
        for child in self.children() {
            nodes.extend(child.walk());
        }
        nodes
    }
}

pub fn default_tree() -> Vec<NavNode> {
    vec![
        NavNode::Leaf {
            id: "home",
            label: "首頁",
            icon: Some(NavIcon::Home),
            path: "/",
        },
        NavNode::Branch {
            id: "comparison",
            label: "語法對照",
            icon: Some(NavIcon::GitCompare),
            children: vec![
                NavNode::leaf("types", "基本型別", "/comparison/types"),
                NavNode::leaf("types-detail", "📊 資料類型完整對比", "/types-detail"),
                NavNode::leaf(
                    "advanced-types",
                    "進階型別 (泛型、介面)",
                    "/comparison/advanced-types",
                ),
                NavNode::leaf("oop", "物件導向程式設計", "/comparison/oop"),
                NavNode::leaf("collections", "集合操作", "/comparison/collections"),
                NavNode::leaf("async", "異步程式設計", "/comparison/async"),
                NavNode::leaf("java-specific", "Java 專屬特性", "/comparison/java-specific"),
                NavNode::leaf("patterns", "設計模式", "/comparison/patterns"),
                NavNode::leaf("testing", "測試框架", "/comparison/testing"),
                NavNode::leaf("challenges", "⚠️ 常見陷阱與挑戰", "/comparison/challenges"),
            ],
        },
        NavNode::Branch {
            id: "springboot",
            label: "Spring Boot 框架",
            icon: Some(NavIcon::Layers),
            children: vec![
                NavNode::leaf("springboot-basics", "Spring Boot 核心", "/comparison/springboot"),
                NavNode::leaf("di", "依賴注入 (DI)", "/comparison/springboot#di"),
                NavNode::leaf("rest-api", "REST API 設計", "/comparison/springboot#rest"),
                NavNode::leaf("jpa", "資料持久化 (JPA)", "/comparison/springboot#jpa"),
                NavNode::leaf("aop", "AOP 面向切面", "/comparison/springboot#aop"),
                NavNode::leaf("transaction", "事務管理", "/comparison/springboot#transaction"),
                NavNode::leaf(
                    "interceptor",
                    "攔截器與過濾器",
                    "/comparison/springboot#interceptor",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::SPRING_BOOT_SECTIONS;
    use crate::route::resolver::Route;
    use crate::route::Location;
    use std::collections::HashSet;

    fn all_nodes(tree: &[NavNode]) -> Vec<&NavNode> {
        tree.iter().flat_map(NavNode::walk).collect()
    }

    #[test]
    fn ids_are_unique() {
        let tree = default_tree();
        let nodes = all_nodes(&tree);
        let ids: HashSet<_> = nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids.len(), nodes.len());
    }

    #[test]
    fn branches_have_children_and_leaves_have_paths() {
        for node in all_nodes(&default_tree()) {
            match node {
                NavNode::Branch { children, .. } => assert!(!children.is_empty()),
                NavNode::Leaf { path, .. } => assert!(path.starts_with('/')),
            }
        }
    }

    #[test]
    fn every_leaf_points_at_a_known_route() {
        for node in all_nodes(&default_tree()) {
            let Some(path) = node.path() else { continue };
            let location = Location::parse(path).unwrap();
            assert_ne!(Route::from_location(&location), Route::Unknown, "{path}");
        }
    }

    #[test]
    fn anchored_leaves_match_the_springboot_anchor_table() {
        let tree = default_tree();
        let fragments: Vec<&str> = all_nodes(&tree)
            .iter()
            .filter_map(|n| n.path())
            .filter_map(|p| p.split_once('#').map(|(_, f)| f))
            .collect();
        let anchors: Vec<&str> = SPRING_BOOT_SECTIONS.iter().map(|a| a.id).collect();
        assert_eq!(fragments, anchors);
    }
}
