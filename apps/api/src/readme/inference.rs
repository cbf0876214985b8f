//! Inference engine — turns sparse request facts into a complete set of README fields.
//!
//! Every rule is a pure function of the three inputs. Nothing here can fail:
//! absent data falls back to canned text so the template always has a value.

use serde::Serialize;

use crate::readme::stack::{
    first_present, has, has_any, TechCategory, CI_SERVICES, CLOUD_PLATFORMS, FRONTEND_FRAMEWORKS,
    NODE_ECOSYSTEM, NODE_TOOLCHAIN, PERSISTENCE_STORES, PYTHON_ECOSYSTEM, PYTHON_WEB_FRAMEWORKS,
    REACT_FAMILY, STATIC_HOSTS,
};

/// Characters of a user description kept in the rendered README.
pub const DESCRIPTION_KEEP_CHARS: usize = 300;

const DEFAULT_PROJECT_NAME: &str = "My Awesome Project";
const DEFAULT_PROJECT_SLUG: &str = "my-awesome-project";
const DEFAULT_CLONE_URL: &str = "https://github.com/username/repo.git";
const DEFAULT_DESCRIPTION: &str =
    "A modern, production-ready project built with the latest technologies.";

/// Validated request facts. At least one of `repo_url` / `description` is set.
#[derive(Debug, Clone, Default)]
pub struct GenerationInput {
    pub repo_url: Option<String>,
    pub description: Option<String>,
    pub tech_stack_items: Vec<String>,
}

/// Resolved value for every template placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    pub project_name: String,
    pub project_name_slug: String,
    pub description: String,
    pub features: String,
    pub tech_stack: String,
    pub clone_url: String,
    pub installation_steps: String,
    pub usage_instructions: String,
    pub detailed_usage: String,
    pub architecture: String,
    pub deployment_guide: String,
    pub badges: String,
    pub prerequisites: String,
}

impl FieldRecord {
    /// Placeholder names this record can fill.
    pub const KEYS: [&'static str; 13] = [
        "project_name",
        "project_name_slug",
        "description",
        "features",
        "tech_stack",
        "clone_url",
        "installation_steps",
        "usage_instructions",
        "detailed_usage",
        "architecture",
        "deployment_guide",
        "badges",
        "prerequisites",
    ];

    /// Looks up a field by its placeholder name.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "project_name" => &self.project_name,
            "project_name_slug" => &self.project_name_slug,
            "description" => &self.description,
            "features" => &self.features,
            "tech_stack" => &self.tech_stack,
            "clone_url" => &self.clone_url,
            "installation_steps" => &self.installation_steps,
            "usage_instructions" => &self.usage_instructions,
            "detailed_usage" => &self.detailed_usage,
            "architecture" => &self.architecture,
            "deployment_guide" => &self.deployment_guide,
            "badges" => &self.badges,
            "prerequisites" => &self.prerequisites,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Derives every README field from the request facts.
pub fn infer(input: &GenerationInput) -> FieldRecord {
    let repo_url = input.repo_url.as_deref().filter(|url| !url.is_empty());
    let description = input.description.as_deref().filter(|d| !d.is_empty());
    let items = input.tech_stack_items.as_slice();

    let identity = repo_url
        .and_then(RepoIdentity::from_url)
        .unwrap_or_else(RepoIdentity::placeholder);

    let short_description: String = match description {
        Some(text) => text.chars().take(DESCRIPTION_KEEP_CHARS).collect(),
        None => identity.fallback_description,
    };

    FieldRecord {
        project_name: identity.project_name,
        project_name_slug: identity.slug,
        description: short_description,
        features: infer_features(description, items),
        tech_stack: infer_tech_stack(items),
        clone_url: identity.clone_url,
        installation_steps: infer_installation(items),
        usage_instructions: infer_usage(items),
        detailed_usage: infer_detailed_usage(items),
        architecture: infer_architecture(items),
        deployment_guide: infer_deployment(items),
        badges: build_badges(),
        prerequisites: infer_prerequisites(items),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Project identity
// ────────────────────────────────────────────────────────────────────────────

struct RepoIdentity {
    project_name: String,
    slug: String,
    clone_url: String,
    fallback_description: String,
}

impl RepoIdentity {
    /// `None` when the URL has no path separator to take a name from.
    fn from_url(url: &str) -> Option<Self> {
        let trimmed = url.trim_end_matches('/');
        let (_, slug) = trimmed.rsplit_once('/')?;

        Some(RepoIdentity {
            project_name: title_case(&slug.replace('-', " ")),
            slug: slug.to_string(),
            clone_url: format!("{trimmed}.git"),
            fallback_description: format!("A comprehensive solution built for {slug}."),
        })
    }

    fn placeholder() -> Self {
        RepoIdentity {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            slug: DEFAULT_PROJECT_SLUG.to_string(),
            clone_url: DEFAULT_CLONE_URL.to_string(),
            fallback_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// Upper-cases the first letter of each word, lower-cases the rest.
/// A word starts at any cased letter not preceded by another cased letter;
/// uncased characters (digits, punctuation, CJK) end a word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_cased = false;
    for c in text.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if prev_is_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_cased = true;
        } else {
            out.push(c);
            prev_is_cased = false;
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Section rules
// ────────────────────────────────────────────────────────────────────────────

fn infer_features(description: Option<&str>, items: &[String]) -> String {
    let mut features: Vec<&str> = vec![
        "✅ Production-ready codebase",
        "⚡ High performance and scalability",
        "🎨 Beautiful, responsive design",
    ];

    if let Some(text) = description {
        let lower = text.to_lowercase();
        if lower.contains("api") {
            features.push("🔌 RESTful API with comprehensive documentation");
        }
        if lower.contains("real-time") || lower.contains("realtime") {
            features.push("🔄 Real-time updates and synchronization");
        }
        if lower.contains("mobile") {
            features.push("📱 Mobile-optimized interface");
        }
        if lower.contains("secure") {
            features.push("🔐 Security-first implementation");
        }
    }

    // Insertions run after the list is built; indices are absolute.
    if has_any(items, REACT_FAMILY) {
        features.insert(0, "⚛️ Modern React architecture with hooks");
    }
    if has_any(items, PERSISTENCE_STORES) {
        features.insert(1, "💾 Robust data persistence");
    }
    if has(items, "Docker") {
        features.push("🐳 Docker containerization support");
    }
    if has_any(items, CI_SERVICES) {
        features.push("🔄 Automated CI/CD pipeline");
    }

    features
        .iter()
        .map(|feature| format!("- {feature}"))
        .collect::<Vec<_>>()
        .join("\n")
}

const DEFAULT_TECH_STACK: &str = "**Frontend:**
React • Next.js • TypeScript • Tailwind CSS

**Backend:**
Node.js • FastAPI • Python

**Database:**
PostgreSQL • Redis

**DevOps:**
Docker • GitHub Actions

**Testing:**
Jest • Pytest";

fn infer_tech_stack(items: &[String]) -> String {
    let blocks: Vec<String> = TechCategory::ALL
        .iter()
        .filter_map(|category| {
            let matched = category.select(items);
            if matched.is_empty() {
                None
            } else {
                Some(format!("**{}:**\n{}", category.label(), matched.join(" • ")))
            }
        })
        .collect();

    if blocks.is_empty() {
        DEFAULT_TECH_STACK.to_string()
    } else {
        blocks.join("\n\n")
    }
}

fn infer_installation(items: &[String]) -> String {
    let node = has_any(items, NODE_ECOSYSTEM);
    let python = has_any(items, PYTHON_ECOSYSTEM);

    let mut steps = Vec::new();
    if node || !python {
        steps.push("npm install");
    }
    if python || !node {
        steps.push("pip install -r requirements.txt");
    }
    steps.join("\n")
}

fn infer_usage(items: &[String]) -> String {
    if has_any(items, PYTHON_WEB_FRAMEWORKS) {
        return "# Terminal 1: Start backend
python main.py

# Terminal 2: Start frontend
npm run dev"
            .to_string();
    }

    "# Start development server
npm run dev

# Open browser and navigate to
http://localhost:3000"
        .to_string()
}

fn infer_detailed_usage(items: &[String]) -> String {
    let mut usage = String::from(
        "### Basic Workflow

1. **Start the development server**
   ```bash
   npm run dev
   ```

2. **Open the application**
   Navigate to http://localhost:3000 in your browser

3. **Make changes**
   Edit files and see hot reload in action",
    );

    if has_any(items, REACT_FAMILY) {
        usage.push_str(
            "

### Component Development

- Components are located in `src/components/`
- Use functional components with hooks
- Follow the component naming conventions",
        );
    }

    if has_any(items, PYTHON_WEB_FRAMEWORKS) {
        usage.push_str(
            "

### API Development

- API routes are defined in the backend
- Use the provided endpoints via HTTP requests
- Document all endpoints with clear examples",
        );
    }

    usage
}

fn infer_architecture(items: &[String]) -> String {
    let mut architecture = String::from(
        "### Layer Structure

**Presentation Layer:** User interface components and views
**Business Logic Layer:** Core application logic
**Data Access Layer:** Database operations and queries
**API Layer:** RESTful endpoints and data serialization",
    );

    if has_any(items, FRONTEND_FRAMEWORKS) {
        architecture.push_str(
            "

### Frontend Architecture

- Component-based structure
- State management with hooks/store
- API integration layer
- Responsive design system",
        );
    }

    if has_any(items, PYTHON_WEB_FRAMEWORKS) {
        architecture.push_str(
            "

### Backend Architecture

- Modular endpoint definitions
- Request validation and serialization
- Database models and queries
- Authentication and authorization",
        );
    }

    architecture
}

const GENERIC_DEPLOYMENT: &str = "### Deployment Steps

1. **Prepare for production**
   - Set environment variables
   - Build optimized bundles
   - Run tests

2. **Deploy**
   - Choose deployment platform
   - Configure CI/CD pipeline
   - Monitor application

3. **Post-deployment**
   - Verify functionality
   - Set up monitoring
   - Enable error tracking";

fn infer_deployment(items: &[String]) -> String {
    let mut snippets: Vec<String> = Vec::new();

    if has_any(items, STATIC_HOSTS) {
        snippets.push(
            "**Vercel/Netlify:**\n1. Connect GitHub repository\n2. Configure build settings\n3. Deploy with one click"
                .to_string(),
        );
    }
    if has(items, "Heroku") {
        snippets.push(
            "**Heroku:**\n1. Create Procfile\n2. Add environment variables\n3. Deploy using Heroku CLI"
                .to_string(),
        );
    }
    if has(items, "Docker") {
        snippets.push(
            "**Docker:**\n```bash\ndocker build -t app .\ndocker run -p 3000:3000 app\n```"
                .to_string(),
        );
    }
    if let Some(platform) = first_present(items, CLOUD_PLATFORMS) {
        snippets.push(format!(
            "**Cloud Platform:**\nUse {platform} for scalable deployment"
        ));
    }

    if snippets.is_empty() {
        return GENERIC_DEPLOYMENT.to_string();
    }

    format!("### Deployment Options\n\n{}", snippets.join("\n\n"))
}

/// Shield badges for the footer. Content is fixed.
fn build_badges() -> String {
    "![Build Status](https://img.shields.io/badge/build-passing-brightgreen?style=flat-square)
![License](https://img.shields.io/badge/license-MIT-blue?style=flat-square)
![Version](https://img.shields.io/badge/version-1.0.0-orange?style=flat-square)
![Status](https://img.shields.io/badge/status-active-success?style=flat-square)"
        .to_string()
}

/// Database requirement by priority; at most one is emitted.
const DATABASE_REQUIREMENTS: &[(&str, &str)] = &[
    ("MongoDB", "MongoDB 4.0+"),
    ("MySQL", "MySQL 8.0+"),
    ("PostgreSQL", "PostgreSQL 12+"),
];

fn infer_prerequisites(items: &[String]) -> String {
    let mut prerequisites: Vec<&str> = Vec::new();

    if has_any(items, NODE_TOOLCHAIN) {
        prerequisites.push("Node.js 16.0+ and npm 8.0+");
    }
    if has_any(items, PYTHON_ECOSYSTEM) {
        prerequisites.push("Python 3.8+");
    }
    if let Some(&(_, requirement)) = DATABASE_REQUIREMENTS
        .iter()
        .find(|&&(token, _)| has(items, token))
    {
        prerequisites.push(requirement);
    }
    if has(items, "Docker") {
        prerequisites.push("Docker & Docker Compose");
    }

    if prerequisites.is_empty() {
        prerequisites = vec!["Node.js 16.0+", "Python 3.8+", "Git 2.0+"];
    }

    prerequisites.join(" | ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
