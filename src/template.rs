use std::collections::BTreeMap;

use tera::Value;

use crate::error::{Result, ThemecutError};

/// A resource name plus the variables it is rendered with.
///
/// The resource may be left empty; rendering or resolving such a template
/// fails with [`ThemecutError::ResourceNotSet`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    resource: String,
    theme: Option<String>,
    variables: BTreeMap<String, Value>,
}

impl Template {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Self::default()
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn set_resource(&mut self, resource: impl Into<String>) {
        self.resource = resource.into();
    }

    /// Theme requested for this template. `None` defers to the theme model's default.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Set the theme, rejecting an empty name.
    pub fn set_theme(&mut self, theme: Option<&str>) -> Result<()> {
        match theme {
            Some("") => Err(ThemecutError::InvalidConfiguration {
                reason: "could not set the theme: provided theme is empty".into(),
            }),
            other => {
                self.theme = other.map(str::to_string);
                Ok(())
            }
        }
    }

    pub fn with_theme(mut self, theme: &str) -> Result<Self> {
        self.set_theme(Some(theme))?;
        Ok(self)
    }

    pub fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_variable(name, value);
        self
    }

    pub fn set_variables(&mut self, variables: BTreeMap<String, Value>) {
        self.variables = variables;
    }
}
