//! README template and placeholder substitution.
//!
//! Placeholders are `{name}` with `name` made of lowercase ASCII letters and
//! underscores. Anything else between braces is copied through untouched, and
//! substituted values are never scanned again.

use thiserror::Error;

use crate::readme::inference::{infer, FieldRecord, GenerationInput};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template placeholder '{{{0}}}' has no matching field")]
    MissingField(String),
}

/// A rendered README together with the fields that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedReadme {
    pub markdown: String,
    pub fields: FieldRecord,
}

/// Infers the fields for `input` and renders them into `README_TEMPLATE`.
pub fn build_readme(input: &GenerationInput) -> Result<GeneratedReadme, TemplateError> {
    let fields = infer(input);
    let markdown = render(README_TEMPLATE, &fields)?;
    Ok(GeneratedReadme { markdown, fields })
}

/// Substitutes every placeholder in `template` with its value from `fields`.
pub fn render(template: &str, fields: &FieldRecord) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match placeholder_at(after) {
            Some(name) => {
                let value = fields
                    .get(name)
                    .ok_or_else(|| TemplateError::MissingField(name.to_string()))?;
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Placeholder names in `template`, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match placeholder_at(after) {
            Some(name) => {
                if !names.contains(&name) {
                    names.push(name);
                }
                rest = &after[name.len() + 1..];
            }
            None => rest = after,
        }
    }
    names
}

/// Fails if `template` names a placeholder that `FieldRecord` cannot fill.
pub fn verify_template(template: &str) -> Result<(), TemplateError> {
    match placeholders(template)
        .into_iter()
        .find(|name| !FieldRecord::KEYS.iter().any(|key| key == name))
    {
        Some(name) => Err(TemplateError::MissingField(name.to_string())),
        None => Ok(()),
    }
}

/// Name of the placeholder starting right after a `{`, if the text forms one.
fn placeholder_at(text: &str) -> Option<&str> {
    let len = text
        .bytes()
        .take_while(|b| b.is_ascii_lowercase() || *b == b'_')
        .count();
    if len > 0 && text.as_bytes().get(len) == Some(&b'}') {
        Some(&text[..len])
    } else {
        None
    }
}

pub const README_TEMPLATE: &str = r##"# {project_name}

{description}

## ✨ Features

{features}

## 🏗️ Project Structure

```
.
├── frontend/          # React/Next.js application
├── backend/           # API server
├── docs/              # Documentation
└── README.md          # You are here
```

## 📚 Tech Stack

{tech_stack}

## 🚀 Getting Started

### Prerequisites

{prerequisites}

### Installation

```bash
# Clone the repository
git clone {clone_url}
cd {project_name_slug}

# Install dependencies
{installation_steps}
```

### Running Locally

```bash
{usage_instructions}
```

## 📖 Usage

{detailed_usage}

## 🔧 Configuration

Create a `.env` file in the project root with the following variables:

```env
# Add your environment variables here
NODE_ENV=development
DEBUG=true
```

## 📁 Project Architecture

{architecture}

## 🧪 Testing

```bash
npm run test          # Run tests
npm run test:watch    # Run tests in watch mode
npm run test:coverage # Generate coverage report
```

## 🐛 Troubleshooting

### Common Issues

**Issue:** Port already in use
```bash
# Kill the process using the port
lsof -ti:3000 | xargs kill -9
```

**Issue:** Dependencies not installing
```bash
# Clear cache and reinstall
rm -rf node_modules package-lock.json
npm install
```

## 🚀 Deployment

{deployment_guide}

## 📝 Contributing

1. Fork the repository
2. Create your feature branch (`git checkout -b feature/amazing-feature`)
3. Commit your changes (`git commit -m 'Add some amazing feature'`)
4. Push to the branch (`git push origin feature/amazing-feature`)
5. Open a Pull Request

## 📄 License

This project is licensed under the MIT License - see the [LICENSE](LICENSE) file for details.

## 🙏 Acknowledgments

- Built with passion and dedication
- Inspired by best practices in software development
- Thanks to all contributors

## 📞 Contact

For questions or feedback, please open an issue or reach out on GitHub.

---

<div align="center">

{badges}

Made with ❤️ by the development team

</div>"##;
