//! Declarative configuration for toggle inputs.
//!
//! [`ToggleInputConfig`] is the serializable part of
//! [`ToggleInputProps`]: everything except the callback and icon content.
//! Unset keys stay unset, so `is_checked: false` in a manifest makes the
//! input controlled while a missing `is_checked` leaves it uncontrolled.
//!
//! ```
//! use tickmark_core::Controlled;
//! use tickmark_widgets::{ToggleInputConfig, ToggleProp};
//!
//! let config = ToggleInputConfig::from_yaml(
//!     "name: newsletter\nlabel: Send me news\nis_checked: false\n",
//! )
//! .expect("valid config");
//! let props = config.into_props();
//! assert!(props.is_controlled(ToggleProp::IsChecked));
//! assert_eq!(props.get_label(), Some("Send me news"));
//! ```

use crate::error::ConfigError;
use crate::toggle_input::ToggleInputProps;
use serde::{Deserialize, Serialize};

/// Serializable toggle input configuration.
///
/// [`from_yaml`](Self::from_yaml) and [`from_json`](Self::from_json) reject a
/// blank `name` with [`ConfigError::EmptyName`]. Props built directly with
/// [`ToggleInputProps::new`] are not validated and accept any name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToggleInputConfig {
    /// `name` of the underlying input
    pub name: String,
    /// Visible label text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Class on the wrapping `<label>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_class_name: Option<String>,
    /// Class on the icon `<span>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_class_name: Option<String>,
    /// Class on the label `<span>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_class_name: Option<String>,
    /// Starting memory in uncontrolled mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_is_checked: Option<bool>,
    /// Owner-supplied checked value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_checked: Option<bool>,
    /// Disabled flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl ToggleInputConfig {
    /// Parse from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Build props. Attach a callback or icon with the props builders.
    #[must_use]
    pub fn into_props(self) -> ToggleInputProps {
        let mut props = ToggleInputProps::new(self.name).is_checked_opt(self.is_checked);
        if let Some(label) = self.label {
            props = props.label(label);
        }
        if let Some(class) = self.container_class_name {
            props = props.container_class_name(class);
        }
        if let Some(class) = self.icon_class_name {
            props = props.icon_class_name(class);
        }
        if let Some(class) = self.label_class_name {
            props = props.label_class_name(class);
        }
        if let Some(checked) = self.default_is_checked {
            props = props.default_is_checked(checked);
        }
        if let Some(disabled) = self.disabled {
            props = props.disabled(disabled);
        }
        props
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Ok(self)
    }
}

impl From<ToggleInputConfig> for ToggleInputProps {
    fn from(config: ToggleInputConfig) -> Self {
        config.into_props()
    }
}

impl From<&ToggleInputProps> for ToggleInputConfig {
    fn from(props: &ToggleInputProps) -> Self {
        use crate::toggle_input::ToggleProp;
        use tickmark_core::Controlled;

        Self {
            name: props.get_name().to_string(),
            label: props.get_label().map(str::to_string),
            container_class_name: props.get_container_class_name().map(str::to_string),
            icon_class_name: props.get_icon_class_name().map(str::to_string),
            label_class_name: props.get_label_class_name().map(str::to_string),
            default_is_checked: props
                .is_controlled(ToggleProp::DefaultIsChecked)
                .then(|| props.get_default_is_checked()),
            is_checked: props.get_is_checked(),
            disabled: props
                .is_controlled(ToggleProp::Disabled)
                .then(|| props.is_disabled()),
        }
    }
}
