//! The tool contract shared by every tool.
//!
//! A tool is a named, stateless operation with a declared input schema.
//! The registry and dispatcher only ever see tools through the [`Tool`]
//! trait, so adding a tool never touches the routing code.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{Content, JsonObject},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer, de::DeserializeOwned};
use serde_json::Value;

use super::error::{ToolError, ToolResult};

// ============================================================================
// Tool Trait
// ============================================================================

/// Capability set every tool must implement.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable, unique identifier used for routing.
    fn name(&self) -> &'static str;

    /// Human-readable summary shown to clients.
    fn description(&self) -> &'static str;

    /// Structural description of the accepted arguments.
    fn input_schema(&self) -> InputSchema;

    /// Run the tool.
    ///
    /// Implementations validate `arguments` against [`Tool::input_schema`]
    /// before computing (see [`InputSchema::decode`]) and return at least
    /// one content block on success.
    async fn execute(&self, arguments: &JsonObject) -> ToolResult<Vec<ContentBlock>>;

    /// Protocol-visible metadata for this tool.
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

// ============================================================================
// Descriptor
// ============================================================================

/// Static metadata describing a tool without invoking it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

impl From<ToolDescriptor> for rmcp::model::Tool {
    fn from(descriptor: ToolDescriptor) -> Self {
        rmcp::model::Tool {
            name: descriptor.name.into(),
            description: Some(descriptor.description.into()),
            input_schema: descriptor.input_schema.into_inner(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Input Schema
// ============================================================================

/// JSON Schema object describing a tool's arguments.
///
/// The schema is the single source of truth for validation: [`InputSchema::validate`]
/// reads `properties` and `required` from the same object that is published
/// to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSchema(Arc<JsonObject>);

impl InputSchema {
    /// Generate the schema from a typed parameter struct.
    pub fn for_type<T: JsonSchema + Any>() -> Self {
        Self(cached_schema_for_type::<T>())
    }

    /// Wrap an already-built schema object.
    pub fn from_object(object: JsonObject) -> Self {
        Self(Arc::new(object))
    }

    /// Consume the wrapper, returning the shared schema object.
    pub fn into_inner(self) -> Arc<JsonObject> {
        self.0
    }

    /// The top-level `type` tag, `"object"` for any well-formed tool schema.
    pub fn schema_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Declared property names.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties()
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Names of the properties that must be present.
    pub fn required(&self) -> Vec<&str> {
        self.0
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// JSON types accepted for a declared property.
    pub fn property_types(&self, name: &str) -> Vec<&str> {
        let Some(property) = self.properties().and_then(|props| props.get(name)) else {
            return Vec::new();
        };

        match property.get("type") {
            Some(Value::String(kind)) => vec![kind.as_str()],
            Some(Value::Array(kinds)) => kinds.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Check that the schema is usable for validation.
    pub fn check_well_formed(&self) -> ToolResult<()> {
        if self.schema_type() != Some("object") {
            return Err(ToolError::invalid_definition(
                "input schema must have type \"object\"",
            ));
        }

        let declared = self.property_names();
        if let Some(missing) = self.required().into_iter().find(|r| !declared.contains(r)) {
            return Err(ToolError::invalid_definition(format!(
                "required property '{}' is not declared in properties",
                missing
            )));
        }

        Ok(())
    }

    /// Validate untyped arguments against this schema.
    ///
    /// Required properties must be present and every declared property that
    /// is present must match its declared type. Undeclared properties are
    /// ignored.
    pub fn validate(&self, arguments: &JsonObject) -> ToolResult<()> {
        for field in self.required() {
            if !arguments.contains_key(field) {
                return Err(ToolError::invalid_input(field, "missing required field"));
            }
        }

        for field in self.property_names() {
            let Some(value) = arguments.get(field) else {
                continue;
            };

            let expected = self.property_types(field);
            if expected.is_empty() || expected.iter().any(|kind| matches_type(value, kind)) {
                continue;
            }

            return Err(ToolError::invalid_input(
                field,
                format!("expected {}, got {}", expected.join(" or "), json_type_name(value)),
            ));
        }

        Ok(())
    }

    /// Validate, then deserialize the arguments into the tool's parameter type.
    pub fn decode<T: DeserializeOwned>(&self, arguments: &JsonObject) -> ToolResult<T> {
        self.validate(arguments)?;

        serde_json::from_value(Value::Object(arguments.clone()))
            .map_err(|e| ToolError::invalid_input("arguments", e.to_string()))
    }

    fn properties(&self) -> Option<&JsonObject> {
        self.0.get("properties").and_then(Value::as_object)
    }
}

impl Serialize for InputSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

fn matches_type(value: &Value, kind: &str) -> bool {
    match kind {
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Content Blocks
// ============================================================================

/// A typed unit of output returned from a successful tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text.
    Text { text: String },
}

impl ContentBlock {
    /// Create a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The kind tag of this block.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
        }
    }

    /// The text payload, if this is a text block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
        }
    }
}

impl From<ContentBlock> for Content {
    fn from(block: ContentBlock) -> Self {
        match block {
            ContentBlock::Text { text } => Content::text(text),
        }
    }
}
