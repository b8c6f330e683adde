//! Compliance checking: decides per declaration kind whether existing
//! documentation satisfies the generation rules, and which rule it failed.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DocConfig;
use crate::model::{ComplianceVerdict, Declaration, ExistingDocumentation, ParameterDescriptor,
    Violation};
use crate::sentence::SentenceBuilder;

/// Constructor summaries must carry the boilerplate phrase somewhere in their
/// text, in any case.
static RE_CONSTRUCTOR_BOILERPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)initializes a new instance of the").unwrap());

/// Checks existing documentation against the canonical rules.
pub struct ComplianceChecker<'a> {
    sentences: SentenceBuilder<'a>,
}

impl<'a> ComplianceChecker<'a> {
    pub fn new(config: &'a DocConfig) -> Self {
        Self {
            sentences: SentenceBuilder::new(config),
        }
    }

    /// Classify a declaration's documentation. An attached comment whose
    /// sections are all blank counts as absent.
    pub fn check(
        &self,
        declaration: &Declaration,
        documentation: Option<&ExistingDocumentation>,
    ) -> ComplianceVerdict {
        let documentation = documentation.filter(|d| !d.is_empty());

        match declaration {
            Declaration::Class(_) | Declaration::Interface(_) => {
                self.check_type(documentation)
            }
            Declaration::Constructor(constructor) => {
                if constructor.is_exempt() {
                    return ComplianceVerdict::Compliant;
                }
                self.check_constructor(&constructor.parameters, documentation)
            }
            Declaration::Method(method) => {
                let Some(doc) = documentation else {
                    return non_compliant(Violation::NoDocumentation);
                };
                if let Some(violation) =
                    check_parameters(&method.parameters, &method.type_params, doc)
                {
                    return non_compliant(violation);
                }
                if !method.return_type.is_void() && doc.returns.is_none() {
                    return non_compliant(Violation::MissingReturnDocumentation);
                }
                ComplianceVerdict::Compliant
            }
            Declaration::Property(property) => {
                let Some(doc) = documentation else {
                    return non_compliant(Violation::NoDocumentation);
                };
                let Some(first) = doc.first_summary_line() else {
                    return non_compliant(Violation::NoSummary);
                };
                // Exact-case prefix match; regeneration strips articles
                // case-insensitively, the check itself does not.
                let expected = self.sentences.property_prefix(property);
                if !first.starts_with(&expected) {
                    return non_compliant(Violation::WrongPrefix(expected));
                }
                ComplianceVerdict::Compliant
            }
            Declaration::Field(_) => match documentation {
                None => non_compliant(Violation::NoDocumentation),
                Some(_) => ComplianceVerdict::Compliant,
            },
        }
    }

    /// Classes and interfaces only need a non-blank summary.
    fn check_type(&self, documentation: Option<&ExistingDocumentation>) -> ComplianceVerdict {
        match documentation {
            None => non_compliant(Violation::NoDocumentation),
            Some(doc) if !doc.has_summary_text() => non_compliant(Violation::NoSummary),
            Some(_) => ComplianceVerdict::Compliant,
        }
    }

    fn check_constructor(
        &self,
        parameters: &[ParameterDescriptor],
        documentation: Option<&ExistingDocumentation>,
    ) -> ComplianceVerdict {
        let Some(doc) = documentation else {
            return non_compliant(Violation::NoDocumentation);
        };
        let has_boilerplate = doc
            .summary
            .iter()
            .any(|line| RE_CONSTRUCTOR_BOILERPLATE.is_match(line));
        if !has_boilerplate {
            return non_compliant(Violation::Invalid);
        }
        match check_parameters(parameters, &[], doc) {
            Some(violation) => non_compliant(violation),
            None => ComplianceVerdict::Compliant,
        }
    }
}

/// Compare the declared parameter names, in order, against the parameters
/// documented with non-blank text, and collect generic parameters with no
/// `<typeparam>` text. Undocumented names report as missing (value
/// parameters first, then type parameters), documented-but-undeclared names
/// as additional, with missing taking precedence; a pure reorder of the same
/// names is invalid.
fn check_parameters(
    parameters: &[ParameterDescriptor],
    type_params: &[String],
    documentation: &ExistingDocumentation,
) -> Option<Violation> {
    let declared: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    let documented = documentation.documented_param_names();

    let mut missing: Vec<String> = declared
        .iter()
        .filter(|name| !documented.contains(name))
        .map(|name| name.to_string())
        .collect();
    missing.extend(
        type_params
            .iter()
            .filter(|name| documentation.type_param_text(name.as_str()).is_none())
            .cloned(),
    );
    if !missing.is_empty() {
        return Some(Violation::MissingParameters(missing));
    }
    if declared == documented {
        return None;
    }

    let additional: Vec<String> = documented
        .iter()
        .filter(|name| !declared.contains(name))
        .map(|name| name.to_string())
        .collect();
    if !additional.is_empty() {
        return Some(Violation::AdditionalParameters(additional));
    }

    Some(Violation::Invalid)
}

fn non_compliant(violation: Violation) -> ComplianceVerdict {
    ComplianceVerdict::NonCompliant(violation)
}
