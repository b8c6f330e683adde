//! Documentation compliance and comment synthesis for declaration trees.
//!
//! The host hands over a [`model::Declaration`] view of a class, interface,
//! constructor, method, property or field, plus whatever documentation is
//! already attached. The engine decides whether that documentation satisfies
//! the canonical rules and, when it does not, synthesizes the replacement
//! comment from identifier names and structural context. Hand-written
//! fragments survive regeneration; only gaps are filled.
//!
//! ```
//! use doclint::model::{Declaration, Modifier, TypeDecl};
//! use doclint::Engine;
//!
//! let engine = Engine::default();
//! let class = Declaration::Class(TypeDecl {
//!     name: "ThisIsALongTypeName".to_string(),
//!     type_params: vec![],
//!     modifiers: vec![Modifier::Public],
//! });
//!
//! let (verdict, comment) = engine.analyze(&class, None).unwrap();
//! assert!(!verdict.is_compliant());
//! let comment = comment.unwrap();
//! assert_eq!(
//!     comment.summary(),
//!     Some(&["this is a long type name.".to_string()][..])
//! );
//! ```

pub mod access;
pub mod checker;
pub mod config;
pub mod merge;
pub mod model;
pub mod sentence;
pub mod tokenizer;

pub use checker::ComplianceChecker;
pub use config::DocConfig;
pub use merge::CommentGenerator;
pub use model::{ComplianceVerdict, Declaration, ExistingDocumentation, GeneratedComment, Section,
    Violation};

/// Contract violations by the caller. Everything else degrades to a defined
/// fallback instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The analysis entry point. Pure and stateless across invocations:
/// declarations may be analyzed sequentially or in parallel, nothing is
/// shared between calls.
pub struct Engine {
    config: DocConfig,
}

impl Engine {
    pub fn new(config: DocConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// Check a declaration's documentation against the canonical rules.
    pub fn check(
        &self,
        declaration: &Declaration,
        documentation: Option<&ExistingDocumentation>,
    ) -> Result<ComplianceVerdict> {
        declaration.validate()?;
        Ok(ComplianceChecker::new(&self.config).check(declaration, documentation))
    }

    /// Build the replacement comment, preserving usable existing text.
    pub fn generate(
        &self,
        declaration: &Declaration,
        documentation: Option<&ExistingDocumentation>,
    ) -> Result<GeneratedComment> {
        declaration.validate()?;
        CommentGenerator::new(&self.config).generate(declaration, documentation)
    }

    /// Check, and synthesize a replacement comment only when the check fails.
    pub fn analyze(
        &self,
        declaration: &Declaration,
        documentation: Option<&ExistingDocumentation>,
    ) -> Result<(ComplianceVerdict, Option<GeneratedComment>)> {
        let verdict = self.check(declaration, documentation)?;
        if verdict.is_compliant() {
            return Ok((verdict, None));
        }
        let comment = self.generate(declaration, documentation)?;
        Ok((verdict, Some(comment)))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DocConfig::default())
    }
}
