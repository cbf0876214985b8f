//! Tech-stack token tables — the fixed vocabulary the inference rules key on.
//!
//! Matching is exact and case-sensitive: "react" is a custom token, not React.

/// One of the five fixed groupings used to lay out the Tech Stack section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Testing,
}

impl TechCategory {
    /// Output order of the Tech Stack section.
    pub const ALL: [TechCategory; 5] = [
        TechCategory::Frontend,
        TechCategory::Backend,
        TechCategory::Database,
        TechCategory::DevOps,
        TechCategory::Testing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::Database => "Database",
            TechCategory::DevOps => "DevOps & Deployment",
            TechCategory::Testing => "Testing",
        }
    }

    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            TechCategory::Frontend => FRONTEND_TOKENS,
            TechCategory::Backend => BACKEND_TOKENS,
            TechCategory::Database => DATABASE_TOKENS,
            TechCategory::DevOps => DEVOPS_TOKENS,
            TechCategory::Testing => TESTING_TOKENS,
        }
    }

    /// Selected tokens belonging to this category, in selection order.
    pub fn select<'a>(self, items: &'a [String]) -> Vec<&'a str> {
        let table = self.tokens();
        items
            .iter()
            .map(String::as_str)
            .filter(|item| table.iter().any(|token| token == item))
            .collect()
    }
}

const FRONTEND_TOKENS: &[&str] = &[
    "React",
    "Next.js",
    "Vue",
    "Angular",
    "Svelte",
    "Remix",
    "TypeScript",
    "Tailwind CSS",
    "Vite",
    "Webpack",
];

const BACKEND_TOKENS: &[&str] = &[
    "Node.js",
    "FastAPI",
    "Flask",
    "Django",
    "Go",
    "Rust",
    "Java/Spring",
    ".NET/C#",
    "Python",
    "PHP/Laravel",
];

const DATABASE_TOKENS: &[&str] = &[
    "MongoDB",
    "MySQL",
    "PostgreSQL",
    "SQLite",
    "Redis",
    "DynamoDB",
    "Firestore",
    "Elasticsearch",
];

const DEVOPS_TOKENS: &[&str] = &[
    "Docker",
    "Kubernetes",
    "AWS",
    "Google Cloud",
    "Azure",
    "Vercel",
    "Netlify",
    "Heroku",
    "GitHub Actions",
    "Jenkins",
];

const TESTING_TOKENS: &[&str] = &["Jest", "Pytest", "Cypress", "Postman"];

// Predicate groups used by the individual section rules.

pub const REACT_FAMILY: &[&str] = &["React", "Next.js"];
pub const PERSISTENCE_STORES: &[&str] = &["MongoDB", "PostgreSQL"];
pub const CI_SERVICES: &[&str] = &["GitHub Actions", "Jenkins"];
pub const NODE_ECOSYSTEM: &[&str] = &["React", "Next.js", "Vue", "Angular", "Node.js"];
/// Node ecosystem plus bundlers; drives the Node.js prerequisite only.
pub const NODE_TOOLCHAIN: &[&str] = &[
    "React", "Next.js", "Vue", "Angular", "Node.js", "Vite", "Webpack",
];
pub const PYTHON_ECOSYSTEM: &[&str] = &["FastAPI", "Flask", "Django", "Python"];
pub const PYTHON_WEB_FRAMEWORKS: &[&str] = &["FastAPI", "Flask", "Django"];
pub const FRONTEND_FRAMEWORKS: &[&str] = &["React", "Next.js", "Vue"];
pub const STATIC_HOSTS: &[&str] = &["Vercel", "Netlify"];
/// Checked in this order; the first one selected names the platform.
pub const CLOUD_PLATFORMS: &[&str] = &["AWS", "Google Cloud", "Azure"];

/// True when `token` was selected.
pub fn has(items: &[String], token: &str) -> bool {
    items.iter().any(|item| item == token)
}

/// True when any token of `group` was selected.
pub fn has_any(items: &[String], group: &[&str]) -> bool {
    group.iter().any(|token| has(items, token))
}

/// First token of `group` (in group order) that was selected.
pub fn first_present(items: &[String], group: &[&'static str]) -> Option<&'static str> {
    group.iter().copied().find(|token| has(items, token))
}
