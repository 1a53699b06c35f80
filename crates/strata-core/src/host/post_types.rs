use std::fmt::Debug;

use serde_json::Value;

use crate::config::ConfigMap;
use crate::kernel::error::Result;

/// A custom post type declaration handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PostTypeDefinition {
    pub name: String,
    pub options: ConfigMap,
}

impl PostTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: ConfigMap::new(),
        }
    }
}

/// Host-side registration of custom post types.
pub trait PostTypeRegistrar: Debug + Send {
    fn register(&mut self, definitions: Vec<PostTypeDefinition>) -> Result<()>;
}

/// Coerce the `custom-post-types` value into definitions.
///
/// Accepted shapes:
/// - absent or null: nothing
/// - a string: one definition with that name
/// - a sequence of names or of mappings carrying a `name`
/// - a mapping of name to options
///
/// Entries of any other shape are dropped.
pub fn definitions_from(value: Option<&Value>) -> Vec<PostTypeDefinition> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(name)) => vec![PostTypeDefinition::new(name.as_str())],
        Some(Value::Array(entries)) => entries.iter().filter_map(definition_from_entry).collect(),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(name, options)| PostTypeDefinition {
                name: name.clone(),
                options: options.as_object().cloned().unwrap_or_default(),
            })
            .collect(),
        Some(other) => {
            log::debug!("Ignoring custom post types declared as {}", other);
            Vec::new()
        }
    }
}

fn definition_from_entry(entry: &Value) -> Option<PostTypeDefinition> {
    match entry {
        Value::String(name) => Some(PostTypeDefinition::new(name.as_str())),
        Value::Object(map) => {
            let name = map.get("name")?.as_str()?.to_string();
            let mut options = map.clone();
            options.remove("name");
            Some(PostTypeDefinition { name, options })
        }
        _ => None,
    }
}

/// Default registrar: keeps the latest definition for each name.
#[derive(Debug, Clone, Default)]
pub struct PostTypeRegistry {
    definitions: Vec<PostTypeDefinition>,
}

impl PostTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn definitions(&self) -> &[PostTypeDefinition] {
        &self.definitions
    }

    pub fn get(&self, name: &str) -> Option<&PostTypeDefinition> {
        self.definitions.iter().find(|definition| definition.name == name)
    }
}

impl PostTypeRegistrar for PostTypeRegistry {
    fn register(&mut self, definitions: Vec<PostTypeDefinition>) -> Result<()> {
        for definition in definitions {
            match self.definitions.iter_mut().find(|existing| existing.name == definition.name) {
                Some(existing) => *existing = definition,
                None => self.definitions.push(definition),
            }
        }
        Ok(())
    }
}
