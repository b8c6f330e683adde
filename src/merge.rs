//! Comment generation with preservation. Synthesized text only fills gaps:
//! hand-written parameter and return documentation passes through verbatim,
//! and previously generated boilerplate is stripped before re-prepending it.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DocConfig;
use crate::model::{ConstructorDecl, Declaration, ExistingDocumentation, GeneratedComment,
    MethodDecl, ParameterDescriptor, PropertyDecl, Section, TypeDecl};
use crate::sentence::SentenceBuilder;
use crate::Result;

/// Lines carrying previously generated constructor boilerplate, recognized so
/// repeated fixes do not stack copies of it.
static RE_BOILERPLATE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)initializes a|class\.").unwrap());

/// Produces the replacement comment for a declaration, merging in whatever
/// usable text the existing documentation already carries.
pub struct CommentGenerator<'a> {
    sentences: SentenceBuilder<'a>,
}

impl<'a> CommentGenerator<'a> {
    pub fn new(config: &'a DocConfig) -> Self {
        Self {
            sentences: SentenceBuilder::new(config),
        }
    }

    /// Build the full replacement comment in canonical section order:
    /// summary, parameters in declaration order, returns, type parameters.
    pub fn generate(
        &self,
        declaration: &Declaration,
        existing: Option<&ExistingDocumentation>,
    ) -> Result<GeneratedComment> {
        let existing = existing.filter(|d| !d.is_empty());
        let mut sections = Vec::new();

        match declaration {
            Declaration::Class(decl) | Declaration::Interface(decl) => {
                self.push_type_sections(&mut sections, decl, existing);
            }
            Declaration::Constructor(decl) => {
                self.push_constructor_sections(&mut sections, decl, existing);
            }
            Declaration::Method(decl) => {
                self.push_method_sections(&mut sections, decl, existing);
            }
            Declaration::Property(decl) => {
                sections.push(Section::Summary(self.property_summary(decl, existing)));
            }
            Declaration::Field(decl) => {
                sections.push(Section::Summary(vec![self.sentences.field_summary(decl)?]));
            }
        }

        Ok(GeneratedComment { sections })
    }

    fn push_type_sections(
        &self,
        sections: &mut Vec<Section>,
        declaration: &TypeDecl,
        existing: Option<&ExistingDocumentation>,
    ) {
        let summary = match existing.filter(|d| d.has_summary_text()) {
            Some(doc) => doc.summary.clone(),
            None => vec![self.sentences.class_summary(declaration)],
        };
        sections.push(Section::Summary(summary));
        self.push_type_params(sections, &declaration.type_params, existing);
    }

    fn push_constructor_sections(
        &self,
        sections: &mut Vec<Section>,
        constructor: &ConstructorDecl,
        existing: Option<&ExistingDocumentation>,
    ) {
        // Re-prepend the canonical boilerplate; keep hand-written lines only.
        let mut summary = vec![self.sentences.constructor_summary(constructor)];
        if let Some(doc) = existing {
            summary.extend(
                doc.summary
                    .iter()
                    .filter(|line| !RE_BOILERPLATE_LINE.is_match(line))
                    .cloned(),
            );
        }
        sections.push(Section::Summary(summary));
        self.push_parameters(sections, &constructor.parameters, existing);
    }

    fn push_method_sections(
        &self,
        sections: &mut Vec<Section>,
        method: &MethodDecl,
        existing: Option<&ExistingDocumentation>,
    ) {
        let summary = match existing.filter(|d| d.has_summary_text()) {
            Some(doc) => doc.summary.clone(),
            None => vec![self.sentences.method_summary(method)],
        };
        sections.push(Section::Summary(summary));
        self.push_parameters(sections, &method.parameters, existing);

        if let Some(lines) = existing.and_then(|d| d.returns.clone()) {
            sections.push(Section::Returns(lines));
        } else if let Some(text) = self.sentences.return_text(method) {
            sections.push(Section::Returns(vec![text]));
        }

        self.push_type_params(sections, &method.type_params, existing);
    }

    /// Parameters in declaration order; documented entries pass through
    /// verbatim, gaps are synthesized.
    fn push_parameters(
        &self,
        sections: &mut Vec<Section>,
        parameters: &[ParameterDescriptor],
        existing: Option<&ExistingDocumentation>,
    ) {
        for parameter in parameters {
            let lines = match existing.and_then(|d| d.param_text(&parameter.name)) {
                Some(lines) => lines.to_vec(),
                None => vec![self.sentences.parameter_text(parameter)],
            };
            sections.push(Section::Parameter {
                name: parameter.name.clone(),
                lines,
            });
        }
    }

    fn push_type_params(
        &self,
        sections: &mut Vec<Section>,
        type_params: &[String],
        existing: Option<&ExistingDocumentation>,
    ) {
        for name in type_params {
            let lines = match existing.and_then(|d| d.type_param_text(name)) {
                Some(lines) => lines.to_vec(),
                None => vec![self.sentences.type_param_text(name)],
            };
            sections.push(Section::TypeParameter {
                name: name.clone(),
                lines,
            });
        }
    }

    fn property_summary(
        &self,
        property: &PropertyDecl,
        existing: Option<&ExistingDocumentation>,
    ) -> Vec<String> {
        match existing.filter(|d| d.has_summary_text()) {
            Some(doc) => self
                .sentences
                .property_summary_from_existing(property, &doc.summary),
            None => vec![self.sentences.property_summary(property)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AccessLevel;
    use crate::model::{AccessorDescriptor, DocEntry, FieldDecl, Modifier, Primitive,
        TypeDescriptor};
    use pretty_assertions::assert_eq;

    fn generate(
        declaration: &Declaration,
        existing: Option<&ExistingDocumentation>,
    ) -> GeneratedComment {
        let config = DocConfig::default();
        CommentGenerator::new(&config)
            .generate(declaration, existing)
            .unwrap()
    }

    fn constructor(parameters: Vec<ParameterDescriptor>) -> Declaration {
        Declaration::Constructor(ConstructorDecl {
            enclosing_type: "TypeName".to_string(),
            type_params: vec![],
            parameters,
            modifiers: vec![Modifier::Public],
            enclosing_is_struct: false,
        })
    }

    #[test]
    fn class_summary_is_synthesized_from_the_name() {
        let decl = Declaration::Class(TypeDecl {
            name: "ThisIsALongTypeName".to_string(),
            type_params: vec![],
            modifiers: vec![Modifier::Public],
        });
        let comment = generate(&decl, None);
        assert_eq!(
            comment.summary(),
            Some(&["this is a long type name.".to_string()][..])
        );
    }

    #[test]
    fn generic_class_fills_only_undocumented_type_params() {
        let decl = Declaration::Class(TypeDecl {
            name: "Container".to_string(),
            type_params: vec!["TVogonType".to_string(), "T".to_string()],
            modifiers: vec![Modifier::Public],
        });
        let existing = ExistingDocumentation {
            summary: vec!["container.".to_string()],
            type_params: vec![DocEntry::new(
                "TVogonType",
                vec!["the hand-written vogon type.".to_string()],
            )],
            ..Default::default()
        };
        let comment = generate(&decl, Some(&existing));
        assert_eq!(
            comment.type_parameter("TVogonType"),
            Some(&["the hand-written vogon type.".to_string()][..])
        );
        assert_eq!(
            comment.type_parameter("T"),
            Some(&["a type of {T}.".to_string()][..])
        );
    }

    #[test]
    fn constructor_comment_covers_every_parameter() {
        let decl = constructor(vec![
            ParameterDescriptor::new("parameterOne", TypeDescriptor::Primitive(Primitive::String)),
            ParameterDescriptor::new("parameterItemTwo", TypeDescriptor::Primitive(Primitive::Int)),
            ParameterDescriptor::new("parameterThree", TypeDescriptor::Primitive(Primitive::String)),
        ]);
        let comment = generate(&decl, None);
        assert_eq!(
            comment.summary(),
            Some(&["Initializes a new instance of the <ref>TypeName</ref> class.".to_string()][..])
        );
        assert_eq!(
            comment.parameter_names(),
            vec!["parameterOne", "parameterItemTwo", "parameterThree"]
        );
        assert_eq!(
            comment.parameter("parameterItemTwo"),
            Some(&["the parameter item two.".to_string()][..])
        );
    }

    #[test]
    fn stale_boilerplate_is_stripped_before_reprepending() {
        let decl = constructor(vec![]);
        let existing = ExistingDocumentation {
            summary: vec![
                "Initializes a new instance of the TypeName class.".to_string(),
                "Keeps a hand-written note about construction.".to_string(),
            ],
            ..Default::default()
        };
        let comment = generate(&decl, Some(&existing));
        assert_eq!(
            comment.summary(),
            Some(
                &[
                    "Initializes a new instance of the <ref>TypeName</ref> class.".to_string(),
                    "Keeps a hand-written note about construction.".to_string(),
                ][..]
            )
        );
    }

    #[test]
    fn documented_parameters_are_preserved_verbatim() {
        let decl = Declaration::Method(MethodDecl {
            name: "BuildVogonConstructorFleet".to_string(),
            parameters: vec![
                ParameterDescriptor::new("parameterOne", TypeDescriptor::Primitive(Primitive::String)),
                ParameterDescriptor::new("parameterItemTwo", TypeDescriptor::Primitive(Primitive::Int)),
            ],
            return_type: TypeDescriptor::Primitive(Primitive::Void),
            type_params: vec![],
            modifiers: vec![Modifier::Public],
        });
        let existing = ExistingDocumentation {
            summary: vec!["build the vogon constructor fleet.".to_string()],
            params: vec![DocEntry::new(
                "parameterOne",
                vec!["a hand-written parameter description.".to_string()],
            )],
            ..Default::default()
        };
        let comment = generate(&decl, Some(&existing));
        assert_eq!(
            comment.parameter("parameterOne"),
            Some(&["a hand-written parameter description.".to_string()][..])
        );
        assert_eq!(
            comment.parameter("parameterItemTwo"),
            Some(&["the parameter item two.".to_string()][..])
        );
        // Declaration order wins over comment order.
        assert_eq!(
            comment.parameter_names(),
            vec!["parameterOne", "parameterItemTwo"]
        );
    }

    #[test]
    fn method_summary_and_returns_are_preserved_when_present() {
        let decl = Declaration::Method(MethodDecl {
            name: "IsTheFugglyThingUgly".to_string(),
            parameters: vec![],
            return_type: TypeDescriptor::Primitive(Primitive::Bool),
            type_params: vec![],
            modifiers: vec![Modifier::Public],
        });
        let existing = ExistingDocumentation {
            summary: vec!["Checks the fuggly thing for ugliness.".to_string()],
            returns: Some(vec!["a hand-written return description.".to_string()]),
            ..Default::default()
        };
        let comment = generate(&decl, Some(&existing));
        assert_eq!(
            comment.summary(),
            Some(&["Checks the fuggly thing for ugliness.".to_string()][..])
        );
        assert_eq!(
            comment.returns(),
            Some(&["a hand-written return description.".to_string()][..])
        );
    }

    #[test]
    fn missing_returns_are_synthesized() {
        let decl = Declaration::Method(MethodDecl {
            name: "IsTheFugglyThingUgly".to_string(),
            parameters: vec![],
            return_type: TypeDescriptor::Primitive(Primitive::Bool),
            type_params: vec![],
            modifiers: vec![Modifier::Public],
        });
        let existing = ExistingDocumentation {
            summary: vec!["Checks the fuggly thing for ugliness.".to_string()],
            ..Default::default()
        };
        let comment = generate(&decl, Some(&existing));
        assert_eq!(
            comment.returns(),
            Some(&["true if the fuggly thing ugly, otherwise false.".to_string()][..])
        );
    }

    #[test]
    fn void_methods_get_no_returns_section() {
        let decl = Declaration::Method(MethodDecl {
            name: "Observe".to_string(),
            parameters: vec![],
            return_type: TypeDescriptor::Primitive(Primitive::Void),
            type_params: vec![],
            modifiers: vec![Modifier::Public],
        });
        assert_eq!(generate(&decl, None).returns(), None);
    }

    #[test]
    fn property_summary_is_corrected_in_place() {
        let decl = Declaration::Property(PropertyDecl {
            name: "TestProperty".to_string(),
            value_type: TypeDescriptor::Primitive(Primitive::Bool),
            modifiers: vec![Modifier::Public],
            accessors: Some(AccessorDescriptor {
                has_getter: true,
                has_setter: true,
                setter_access: AccessLevel::NotSpecified,
            }),
        });
        let existing = ExistingDocumentation {
            summary: vec!["returns the test property.".to_string()],
            ..Default::default()
        };
        let comment = generate(&decl, Some(&existing));
        assert_eq!(
            comment.summary(),
            Some(&["Gets or sets a value indicating whether test property.".to_string()][..])
        );
    }

    #[test]
    fn field_summary_is_synthesized() {
        let decl = Declaration::Field(FieldDecl {
            name: "_vogonFleetCount".to_string(),
            value_type: TypeDescriptor::Primitive(Primitive::Int),
            modifiers: vec![Modifier::Private],
        });
        let comment = generate(&decl, None);
        assert_eq!(
            comment.summary(),
            Some(&["the vogon fleet count.".to_string()][..])
        );
    }
}
