//! The casing registry.
//!
//! Every casing has a stable name that doubles as the marker tag, so
//! `{{#snakeCase}}userName{{/snakeCase}}` renders through [`Casing::Snake`].
//! Word splitting is delegated to `heck`; dot and path casing are derived
//! from its snake_case output since heck never keeps separators.

use std::fmt;
use std::str::FromStr;

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase, ToTrainCase,
    ToUpperCamelCase,
};
use serde::Deserialize;

use crate::TemplateError;

/// A lexical casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Casing {
    /// `firstName`
    Camel,
    /// `FirstName`
    Pascal,
    /// `First Name`
    Capital,
    /// `FIRST_NAME`
    Constant,
    /// `first.name`
    Dot,
    /// `First-Name`
    Header,
    /// `first-name`
    Param,
    /// `first/name`
    Path,
    /// `first_name`
    Snake,
}

impl Casing {
    /// All registered casings, in tagging priority order.
    pub const ALL: [Casing; 9] = [
        Casing::Camel,
        Casing::Pascal,
        Casing::Capital,
        Casing::Constant,
        Casing::Dot,
        Casing::Header,
        Casing::Param,
        Casing::Path,
        Casing::Snake,
    ];

    /// The stable name used as marker tag.
    pub fn name(self) -> &'static str {
        match self {
            Casing::Camel => "camelCase",
            Casing::Pascal => "pascalCase",
            Casing::Capital => "capitalCase",
            Casing::Constant => "constantCase",
            Casing::Dot => "dotCase",
            Casing::Header => "headerCase",
            Casing::Param => "paramCase",
            Casing::Path => "pathCase",
            Casing::Snake => "snakeCase",
        }
    }

    /// Look up a casing by its marker name.
    pub fn from_name(name: &str) -> Option<Casing> {
        Casing::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Render `input` in this casing.
    pub fn apply(self, input: &str) -> String {
        match self {
            Casing::Camel => input.to_lower_camel_case(),
            Casing::Pascal => input.to_upper_camel_case(),
            Casing::Capital => input.to_title_case(),
            Casing::Constant => input.to_shouty_snake_case(),
            Casing::Dot => input.to_snake_case().replace('_', "."),
            Casing::Header => input.to_train_case(),
            Casing::Param => input.to_kebab_case(),
            Casing::Path => input.to_snake_case().replace('_', "/"),
            Casing::Snake => input.to_snake_case(),
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Casing {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Casing::from_name(s).ok_or_else(|| TemplateError::UnknownCasing(s.to_string()))
    }
}

impl TryFrom<String> for Casing {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
