//! Sentence builder: canonical documentation sentences per declaration kind.
//!
//! Every template produces a single sentence ending in one period, with the
//! tokenized identifier words joined by spaces. Cross references to types are
//! rendered host-agnostically as `<ref>…</ref>` tokens, generic arguments in
//! curly braces.

use crate::access;
use crate::config::DocConfig;
use crate::model::{ConstructorDecl, FieldDecl, MethodDecl, ParameterDescriptor, PropertyDecl,
    TypeDecl, TypeDescriptor};
use crate::tokenizer::tokenize;
use crate::{Error, Result};

/// Builds documentation sentences from identifier names and structural
/// context. Holds the injected word-list configuration.
pub struct SentenceBuilder<'a> {
    config: &'a DocConfig,
}

impl<'a> SentenceBuilder<'a> {
    pub fn new(config: &'a DocConfig) -> Self {
        Self { config }
    }

    /// Summary for a class or interface: the tokenized type name.
    /// `ThisIsALongTypeName` → `this is a long type name.`
    pub fn class_summary(&self, declaration: &TypeDecl) -> String {
        let words = tokenize(&declaration.name, self.config);
        format!("{}.", words.join(" "))
    }

    /// Boilerplate summary for a constructor, referencing the enclosing type
    /// with its generic arity.
    pub fn constructor_summary(&self, constructor: &ConstructorDecl) -> String {
        let reference = type_reference(&constructor.enclosing_type, &constructor.type_params);
        format!("Initializes a new instance of the {} class.", reference)
    }

    /// Summary for a method: first word as the verb, remaining words as the
    /// object. Single-word methods borrow the first parameter name for the
    /// object; with no parameters the dangling clause is dropped.
    pub fn method_summary(&self, method: &MethodDecl) -> String {
        let words = tokenize(&method.name, self.config);
        let Some(first) = words.first() else {
            return ".".to_string();
        };
        if words.len() == 1 {
            let parameter_words = self.first_parameter_words(method);
            if parameter_words.is_empty() {
                return format!("{}.", first);
            }
            return format!("{} the {}.", first, parameter_words.join(" "));
        }
        format!("{} the {}.", first, words[1..].join(" "))
    }

    /// Description for a parameter, preferring whichever of the parameter
    /// name or its type name tokenizes into more words.
    pub fn parameter_text(&self, parameter: &ParameterDescriptor) -> String {
        let from_name = tokenize(&parameter.name, self.config);
        let from_type = parameter
            .ty
            .identifier_name()
            .map(|id| tokenize(id, self.config))
            .unwrap_or_default();
        let chosen = if from_type.len() > from_name.len() {
            from_type
        } else {
            from_name
        };
        format!("the {}.", chosen.join(" "))
    }

    /// Summary lead-in for a property: `Gets`, ` or sets` when the setter is
    /// effectively public, and the boolean wording for boolean properties.
    pub fn property_prefix(&self, property: &PropertyDecl) -> String {
        let setter = if access::is_setter_effectively_public(property) {
            " or sets"
        } else {
            ""
        };
        if access::is_boolean_property(property) {
            format!("Gets{} a value indicating whether", setter)
        } else {
            format!("Gets{} the", setter)
        }
    }

    /// Summary for an undocumented property: prefix plus tokenized name.
    pub fn property_summary(&self, property: &PropertyDecl) -> String {
        let words = tokenize(&property.name, self.config);
        format!("{} {}.", self.property_prefix(property), words.join(" "))
    }

    /// Correct an existing property summary: strip leading articles from the
    /// first line and re-prefix it; later lines pass through verbatim.
    pub fn property_summary_from_existing(
        &self,
        property: &PropertyDecl,
        lines: &[String],
    ) -> Vec<String> {
        let first = lines.first().map(String::as_str).unwrap_or("");
        let cleaned = self.remove_leading_articles(first);
        // An all-article first line leaves nothing to keep; describe the
        // property by its own name instead.
        let prefixed = if cleaned.is_empty() {
            self.property_summary(property)
        } else {
            format!("{} {}", self.property_prefix(property), cleaned)
                .trim_end()
                .to_string()
        };
        let mut result = vec![prefixed];
        result.extend(lines.iter().skip(1).cloned());
        result
    }

    /// Summary for a field, described by whichever of the field name or its
    /// declared type name tokenizes into more words (ties favor the type).
    pub fn field_summary(&self, field: &FieldDecl) -> Result<String> {
        let from_name = tokenize(&field.name, self.config);
        let from_type = field
            .value_type
            .identifier_name()
            .map(|id| tokenize(id, self.config))
            .unwrap_or_default();
        if from_name.is_empty() && from_type.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "field '{}' has no identifiable name or type",
                field.name
            )));
        }
        let chosen = if from_name.len() > from_type.len() {
            from_name
        } else {
            from_type
        };
        Ok(format!("the {}.", chosen.join(" ")))
    }

    /// Description for a non-void return value; `None` for void methods.
    pub fn return_text(&self, method: &MethodDecl) -> Option<String> {
        if method.return_type.is_void() {
            return None;
        }
        // A plain named return type is described by its own tokens.
        if let Some(id) = method.return_type.identifier_name() {
            let words = tokenize(id, self.config);
            return Some(format!("the {}.", words.join(" ")));
        }
        Some(self.simple_return_text(method))
    }

    /// Return text for primitives and generic constructions.
    fn simple_return_text(&self, method: &MethodDecl) -> String {
        let name_words = tokenize(&method.name, self.config);

        if method.return_type.is_bool() {
            let source = if name_words.len() == 1 {
                self.first_parameter_words(method)
            } else {
                name_words[1..].to_vec()
            };
            let description = self.strip_leading_articles(source);
            return format!("true if the {}, otherwise false.", description.join(" "));
        }

        let mut description = if name_words.len() == 1 {
            self.first_parameter_words(method)
        } else {
            name_words
        };
        description.push("result".to_string());

        let rendered = method.return_type.render();
        let display = match &method.return_type {
            TypeDescriptor::Named { args, .. } if !args.is_empty() => {
                format!("<ref>{}</ref>", rendered)
            }
            _ => rendered.clone(),
        };
        format!(
            "{} {} containing the {}.",
            a_or_an(&rendered),
            display,
            description.join(" ")
        )
    }

    /// Description for a generic type parameter. Single uppercase letters
    /// render braced verbatim; a single-letter prefix token is dropped
    /// (`TVogonType` → `a type of vogon type.`).
    pub fn type_param_text(&self, name: &str) -> String {
        let mut chars = name.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if letter.is_uppercase() {
                return format!("a type of {{{}}}.", letter);
            }
        }
        let mut words = tokenize(name, self.config);
        if words.first().is_some_and(|w| w.chars().count() == 1) {
            words.remove(0);
        }
        format!("a type of {}.", words.join(" "))
    }

    /// Drop leading article words from a word list.
    fn strip_leading_articles(&self, words: Vec<String>) -> Vec<String> {
        let skip = words
            .iter()
            .take_while(|w| self.config.is_article(w))
            .count();
        words[skip..].to_vec()
    }

    /// Drop leading article words from a free-form line.
    fn remove_leading_articles(&self, line: &str) -> String {
        let words: Vec<&str> = line.split_whitespace().collect();
        let skip = words
            .iter()
            .take_while(|w| self.config.is_article(w))
            .count();
        words[skip..].join(" ")
    }

    fn first_parameter_words(&self, method: &MethodDecl) -> Vec<String> {
        method
            .parameters
            .first()
            .map(|p| tokenize(&p.name, self.config))
            .unwrap_or_default()
    }
}

/// Render a cross-reference token for a type, with generic arity in braces:
/// `<ref>TypeName{T, U}</ref>`.
fn type_reference(name: &str, type_params: &[String]) -> String {
    if type_params.is_empty() {
        format!("<ref>{}</ref>", name)
    } else {
        format!("<ref>{}{{{}}}</ref>", name, type_params.join(", "))
    }
}

/// Choose the indefinite article by the first letter, treating `h` as a vowel.
fn a_or_an(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'h') => "an",
        _ => "a",
    }
}
