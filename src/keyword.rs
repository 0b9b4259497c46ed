//! The closed set of draft-4 keywords this validator recognizes.
//!
//! Any other schema key (`$schema`, `id`, `title`, `description`, `default`,
//! `definitions`, vendor extensions, ...) maps to `None` and is ignored.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Type,
    Properties,
    PatternProperties,
    AdditionalProperties,
    Items,
    AdditionalItems,
    Required,
    Dependencies,
    Minimum,
    Maximum,
    ExclusiveMinimum,
    ExclusiveMaximum,
    MinItems,
    MaxItems,
    UniqueItems,
    Pattern,
    MinLength,
    MaxLength,
    Enum,
    Format,
    MultipleOf,
}

impl Keyword {
    pub const ALL: [Keyword; 21] = [
        Keyword::Type,
        Keyword::Properties,
        Keyword::PatternProperties,
        Keyword::AdditionalProperties,
        Keyword::Items,
        Keyword::AdditionalItems,
        Keyword::Required,
        Keyword::Dependencies,
        Keyword::Minimum,
        Keyword::Maximum,
        Keyword::ExclusiveMinimum,
        Keyword::ExclusiveMaximum,
        Keyword::MinItems,
        Keyword::MaxItems,
        Keyword::UniqueItems,
        Keyword::Pattern,
        Keyword::MinLength,
        Keyword::MaxLength,
        Keyword::Enum,
        Keyword::Format,
        Keyword::MultipleOf,
    ];

    pub fn from_name(name: &str) -> Option<Keyword> {
        let keyword = match name {
            "type" => Keyword::Type,
            "properties" => Keyword::Properties,
            "patternProperties" => Keyword::PatternProperties,
            "additionalProperties" => Keyword::AdditionalProperties,
            "items" => Keyword::Items,
            "additionalItems" => Keyword::AdditionalItems,
            "required" => Keyword::Required,
            "dependencies" => Keyword::Dependencies,
            "minimum" => Keyword::Minimum,
            "maximum" => Keyword::Maximum,
            "exclusiveMinimum" => Keyword::ExclusiveMinimum,
            "exclusiveMaximum" => Keyword::ExclusiveMaximum,
            "minItems" => Keyword::MinItems,
            "maxItems" => Keyword::MaxItems,
            "uniqueItems" => Keyword::UniqueItems,
            "pattern" => Keyword::Pattern,
            "minLength" => Keyword::MinLength,
            "maxLength" => Keyword::MaxLength,
            "enum" => Keyword::Enum,
            "format" => Keyword::Format,
            "multipleOf" => Keyword::MultipleOf,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Type => "type",
            Keyword::Properties => "properties",
            Keyword::PatternProperties => "patternProperties",
            Keyword::AdditionalProperties => "additionalProperties",
            Keyword::Items => "items",
            Keyword::AdditionalItems => "additionalItems",
            Keyword::Required => "required",
            Keyword::Dependencies => "dependencies",
            Keyword::Minimum => "minimum",
            Keyword::Maximum => "maximum",
            Keyword::ExclusiveMinimum => "exclusiveMinimum",
            Keyword::ExclusiveMaximum => "exclusiveMaximum",
            Keyword::MinItems => "minItems",
            Keyword::MaxItems => "maxItems",
            Keyword::UniqueItems => "uniqueItems",
            Keyword::Pattern => "pattern",
            Keyword::MinLength => "minLength",
            Keyword::MaxLength => "maxLength",
            Keyword::Enum => "enum",
            Keyword::Format => "format",
            Keyword::MultipleOf => "multipleOf",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
