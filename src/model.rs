//! Data model for declarations, existing documentation and engine output:
//! host-agnostic views over whatever syntax tree the caller maintains.

use crate::access::AccessLevel;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A declaration eligible for documentation analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    Class(TypeDecl),
    Interface(TypeDecl),
    Constructor(ConstructorDecl),
    Method(MethodDecl),
    Property(PropertyDecl),
    Field(FieldDecl),
}

/// The kind of a declaration, used when formatting diagnostic messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    Class,
    Interface,
    Constructor,
    Method,
    Property,
    Field,
}

impl DeclarationKind {
    /// Lower-case name used in diagnostic text. Fields report as "member",
    /// matching the member-variable terminology of the diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Constructor => "constructor",
            DeclarationKind::Method => "method",
            DeclarationKind::Property => "property",
            DeclarationKind::Field => "member",
        }
    }
}

/// Access and shape modifiers attached to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Static,
    Abstract,
}

/// A class or interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    /// Generic parameter names in declaration order.
    pub type_params: Vec<String>,
    pub modifiers: Vec<Modifier>,
}

/// An instance or static constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    /// Name of the enclosing type, referenced in the boilerplate summary.
    pub enclosing_type: String,
    /// Generic parameter names of the enclosing type.
    pub type_params: Vec<String>,
    pub parameters: Vec<ParameterDescriptor>,
    pub modifiers: Vec<Modifier>,
    /// Struct constructors are exempt from the compliance rules.
    pub enclosing_is_struct: bool,
}

impl ConstructorDecl {
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }

    /// Static constructors and struct constructors are never analyzed.
    pub fn is_exempt(&self) -> bool {
        self.is_static() || self.enclosing_is_struct
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type: TypeDescriptor,
    /// Generic parameter names in declaration order.
    pub type_params: Vec<String>,
    pub modifiers: Vec<Modifier>,
}

/// A property declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub value_type: TypeDescriptor,
    pub modifiers: Vec<Modifier>,
    /// `None` for expression-bodied (computed) properties with no accessor list.
    pub accessors: Option<AccessorDescriptor>,
}

/// Accessor shape of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorDescriptor {
    pub has_getter: bool,
    pub has_setter: bool,
    /// Access level of the setter; `NotSpecified` inherits the property's own.
    pub setter_access: AccessLevel,
}

/// A field (member variable) declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub value_type: TypeDescriptor,
    pub modifiers: Vec<Modifier>,
}

/// A single parameter: positional identity, name unique within one declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub ty: TypeDescriptor,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A type reference: a language primitive, or a named type with optional
/// generic arguments. Primitives never carry generic arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    Primitive(Primitive),
    Named {
        name: String,
        args: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Named {
            name: name.into(),
            args,
        }
    }

    /// The simple identifier of a plain named type. Primitives, arrays and
    /// generic constructions have no identifiable simple name.
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Named { name, args } if args.is_empty() => Some(name),
            _ => None,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(Primitive::Void))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(Primitive::Bool))
    }

    /// Display text: primitive aliases render as-is, generic arguments render
    /// in curly braces (`List{Function}`).
    pub fn render(&self) -> String {
        match self {
            TypeDescriptor::Primitive(p) => p.as_str().to_string(),
            TypeDescriptor::Named { name, args } => {
                if args.is_empty() {
                    name.clone()
                } else {
                    let inner: Vec<String> = args.iter().map(|a| a.render()).collect();
                    format!("{}{{{}}}", name, inner.join(", "))
                }
            }
        }
    }
}

/// Built-in primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    Bool,
    Byte,
    Char,
    Int,
    Long,
    Float,
    Double,
    String,
    Object,
    Void,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::String => "string",
            Primitive::Object => "object",
            Primitive::Void => "void",
        }
    }
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Class(_) => DeclarationKind::Class,
            Declaration::Interface(_) => DeclarationKind::Interface,
            Declaration::Constructor(_) => DeclarationKind::Constructor,
            Declaration::Method(_) => DeclarationKind::Method,
            Declaration::Property(_) => DeclarationKind::Property,
            Declaration::Field(_) => DeclarationKind::Field,
        }
    }

    /// Enforce the caller contract: parameter names must be unique within one
    /// declaration. Violations are caller bugs, surfaced immediately.
    pub fn validate(&self) -> Result<()> {
        let parameters = match self {
            Declaration::Constructor(c) => &c.parameters[..],
            Declaration::Method(m) => &m.parameters[..],
            _ => return Ok(()),
        };
        for (index, parameter) in parameters.iter().enumerate() {
            if parameters[..index].iter().any(|p| p.name == parameter.name) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate parameter name '{}'",
                    parameter.name
                )));
            }
        }
        Ok(())
    }
}

// -- Existing documentation ---------------------------------------------------

/// Documentation already attached to a declaration, as extracted by the host.
/// Lines are pre-trimmed with blank lines removed; an entirely blank comment
/// block must be passed as `None`, not as an empty structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingDocumentation {
    pub summary: Vec<String>,
    /// `<param>` entries in the order they appeared in the comment.
    pub params: Vec<DocEntry>,
    pub returns: Option<Vec<String>>,
    pub type_params: Vec<DocEntry>,
}

/// A named documentation entry (parameter or type parameter) with its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocEntry {
    pub name: String,
    pub lines: Vec<String>,
}

impl DocEntry {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    pub fn has_text(&self) -> bool {
        self.lines.iter().any(|l| !l.trim().is_empty())
    }
}

impl ExistingDocumentation {
    /// A comment that carries no text in any section counts as absent.
    pub fn is_empty(&self) -> bool {
        self.summary.iter().all(|l| l.trim().is_empty())
            && !self.params.iter().any(|p| p.has_text())
            && self.returns.is_none()
            && !self.type_params.iter().any(|p| p.has_text())
    }

    /// Lines of the `<param>` entry with the given name, when it has text.
    pub fn param_text(&self, name: &str) -> Option<&[String]> {
        self.params
            .iter()
            .find(|p| p.name == name && p.has_text())
            .map(|p| p.lines.as_slice())
    }

    /// Lines of the `<typeparam>` entry with the given name, when it has text.
    pub fn type_param_text(&self, name: &str) -> Option<&[String]> {
        self.type_params
            .iter()
            .find(|p| p.name == name && p.has_text())
            .map(|p| p.lines.as_slice())
    }

    /// Names of parameters documented with non-empty text, in comment order.
    pub fn documented_param_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.has_text())
            .map(|p| p.name.as_str())
            .collect()
    }

    /// First non-blank summary line, if any.
    pub fn first_summary_line(&self) -> Option<&str> {
        self.summary
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty())
    }

    pub fn has_summary_text(&self) -> bool {
        self.first_summary_line().is_some()
    }
}

// -- Engine output ------------------------------------------------------------

/// Outcome of the compliance check for one declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComplianceVerdict {
    Compliant,
    NonCompliant(Violation),
}

/// The specific rule an existing comment failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    /// No documentation attached, or only whitespace.
    NoDocumentation,
    /// A comment exists but its summary carries no text.
    NoSummary,
    /// Parameters present in the signature but undocumented.
    MissingParameters(Vec<String>),
    /// Documented parameters absent from the signature.
    AdditionalParameters(Vec<String>),
    MissingReturnDocumentation,
    /// The summary does not begin with the expected lead-in text.
    WrongPrefix(String),
    /// Structurally non-compliant in a way not covered above (e.g. the
    /// documented parameters are reordered).
    Invalid,
}

impl ComplianceVerdict {
    pub fn is_compliant(&self) -> bool {
        matches!(self, ComplianceVerdict::Compliant)
    }

    /// Diagnostic message for a failed check, e.g.
    /// `method documentation: missing 'parameterItemTwo'.`. Compliant
    /// declarations produce no diagnostic.
    pub fn describe(&self, kind: DeclarationKind) -> Option<String> {
        match self {
            ComplianceVerdict::Compliant => None,
            ComplianceVerdict::NonCompliant(violation) => Some(violation.describe(kind)),
        }
    }
}

impl Violation {
    /// Diagnostic message for this violation against the given kind.
    pub fn describe(&self, kind: DeclarationKind) -> String {
        let detail = match self {
            Violation::NoDocumentation | Violation::NoSummary => "no documentation".to_string(),
            Violation::MissingParameters(names) => {
                format!("missing {}", quote_list(names))
            }
            Violation::AdditionalParameters(names) => {
                format!("additional {}", quote_list(names))
            }
            Violation::MissingReturnDocumentation => {
                "missing return value documentation".to_string()
            }
            Violation::WrongPrefix(expected) => {
                format!("does not start with '{}'", expected)
            }
            Violation::Invalid => "invalid".to_string(),
        };
        format!("{} documentation: {}.", kind.as_str(), detail)
    }
}

fn quote_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    quoted.join(", ")
}

/// A freshly generated comment, in canonical section order: summary,
/// parameters in declaration order, returns, type parameters in declaration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedComment {
    pub sections: Vec<Section>,
}

/// One section of a generated comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Section {
    Summary(Vec<String>),
    Parameter { name: String, lines: Vec<String> },
    Returns(Vec<String>),
    TypeParameter { name: String, lines: Vec<String> },
}

impl GeneratedComment {
    pub fn summary(&self) -> Option<&[String]> {
        self.sections.iter().find_map(|s| match s {
            Section::Summary(lines) => Some(lines.as_slice()),
            _ => None,
        })
    }

    pub fn parameter(&self, name: &str) -> Option<&[String]> {
        self.sections.iter().find_map(|s| match s {
            Section::Parameter { name: n, lines } if n == name => Some(lines.as_slice()),
            _ => None,
        })
    }

    pub fn returns(&self) -> Option<&[String]> {
        self.sections.iter().find_map(|s| match s {
            Section::Returns(lines) => Some(lines.as_slice()),
            _ => None,
        })
    }

    pub fn type_parameter(&self, name: &str) -> Option<&[String]> {
        self.sections.iter().find_map(|s| match s {
            Section::TypeParameter { name: n, lines } if n == name => Some(lines.as_slice()),
            _ => None,
        })
    }

    /// Parameter names in the order their sections appear.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| match s {
                Section::Parameter { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// A generated comment is itself valid input documentation; this conversion
/// lets callers re-check the generator's own output.
impl From<&GeneratedComment> for ExistingDocumentation {
    fn from(comment: &GeneratedComment) -> Self {
        let mut doc = ExistingDocumentation::default();
        for section in &comment.sections {
            match section {
                Section::Summary(lines) => doc.summary.extend(lines.iter().cloned()),
                Section::Parameter { name, lines } => {
                    doc.params.push(DocEntry::new(name.clone(), lines.clone()));
                }
                Section::Returns(lines) => doc.returns = Some(lines.clone()),
                Section::TypeParameter { name, lines } => {
                    doc.type_params
                        .push(DocEntry::new(name.clone(), lines.clone()));
                }
            }
        }
        doc
    }
}
