use crate::TemplateError;
use factsheet_idf::Document;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A read-only fact sheet blueprint.
///
/// The blueprint itself is never edited. [`instantiate`](Template::instantiate)
/// hands out independent deep copies to work on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default = "default_name")]
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) document: Document,
}

fn default_name() -> String {
    "custom".to_string()
}

impl Template {
    pub fn new(name: impl Into<String>, document: Document) -> Result<Self, TemplateError> {
        let template = Self {
            name: name.into(),
            document,
        };
        template.validate()?;
        Ok(template)
    }

    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let template: Template = serde_json::from_str(json)?;
        template.validate()?;
        Ok(template)
    }

    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let json = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let template = Self::from_json(&json)?;
        log::info!(
            "Loaded template '{}' from {} ({} pages)",
            template.name,
            path.display(),
            template.document.pages.len()
        );
        Ok(template)
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), TemplateError> {
        std::fs::write(path, self.to_json()?).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The blueprint, for inspection only.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// A fresh working copy sharing nothing with the blueprint.
    pub fn instantiate(&self) -> Document {
        self.document.clone()
    }

    fn validate(&self) -> Result<(), TemplateError> {
        if self.document.pages.is_empty() {
            return Err(TemplateError::Invalid(format!(
                "template '{}' has no pages",
                self.name
            )));
        }
        if let Some(page) = self
            .document
            .pages
            .iter()
            .find(|p| p.size.width <= 0.0 || p.size.height <= 0.0)
        {
            return Err(TemplateError::Invalid(format!(
                "template '{}' has a page of size {}x{}",
                self.name, page.size.width, page.size.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_template;

    #[test]
    fn test_instantiate_does_not_touch_blueprint() {
        let template = standard_template();
        let mut copy = template.instantiate();
        copy.pages[0].elements.clear();
        assert!(!template.document().pages[0].elements.is_empty());
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let template = standard_template();
        let file = tempfile::NamedTempFile::new().unwrap();
        template.save(file.path()).unwrap();
        let loaded = Template::load(file.path()).unwrap();
        assert_eq!(loaded, template);
    }

    #[test]
    fn test_rejects_empty_template() {
        assert!(matches!(
            Template::from_json(r#"{ "name": "empty", "pages": [] }"#),
            Err(TemplateError::Invalid(_))
        ));
        assert!(matches!(
            Template::from_json("{ not json"),
            Err(TemplateError::Parse(_))
        ));
    }

    #[test]
    fn test_minimal_json_template() {
        let json = r#"{
            "pages": [{
                "size": { "width": 960, "height": 540 },
                "elements": [{
                    "name": "title",
                    "frame": { "x": 10, "y": 10, "width": 300, "height": 30 },
                    "type": "TextFrame",
                    "paragraphs": [{ "runs": [{ "text": "[Vendor Name]", "font": { "size": 20, "weight": "bold" } }] }]
                }]
            }]
        }"#;
        let template = Template::from_json(json).unwrap();
        assert_eq!(template.name(), "custom");
        let frame = template.document().element("title").unwrap().as_text_frame().unwrap();
        assert_eq!(frame.text(), "[Vendor Name]");
        assert!(frame.paragraphs[0].runs[0].font.is_bold());
    }
}
