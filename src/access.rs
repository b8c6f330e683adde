//! Access-level classification and property shape checks.

use crate::model::{Modifier, PropertyDecl};
use serde::{Deserialize, Serialize};

/// Effective access level derived from a modifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    Public,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    NotSpecified,
}

/// Determine the access level for a modifier list.
///
/// `public` and `private` win immediately wherever they appear; `protected`
/// and `internal` combine into `ProtectedInternal` when both are present.
pub fn classify(modifiers: &[Modifier]) -> AccessLevel {
    let mut is_protected = false;
    let mut is_internal = false;

    for modifier in modifiers {
        match modifier {
            Modifier::Public => return AccessLevel::Public,
            Modifier::Private => return AccessLevel::Private,
            Modifier::Internal => {
                if is_protected {
                    return AccessLevel::ProtectedInternal;
                }
                is_internal = true;
            }
            Modifier::Protected => {
                if is_internal {
                    return AccessLevel::ProtectedInternal;
                }
                is_protected = true;
            }
            Modifier::Static | Modifier::Abstract => {}
        }
    }

    if is_protected {
        AccessLevel::Protected
    } else if is_internal {
        AccessLevel::Internal
    } else {
        AccessLevel::NotSpecified
    }
}

/// True when the property has a setter that is effectively public.
///
/// Properties with no accessor list (computed / expression-bodied) are pure
/// getters and report `false`. An unspecified setter access level inherits the
/// property's own, which counts as public for summary-prefix purposes.
pub fn is_setter_effectively_public(property: &PropertyDecl) -> bool {
    match &property.accessors {
        None => false,
        Some(accessors) => {
            accessors.has_setter
                && matches!(
                    accessors.setter_access,
                    AccessLevel::Public | AccessLevel::NotSpecified
                )
        }
    }
}

/// True when the property's value type is the boolean primitive.
pub fn is_boolean_property(property: &PropertyDecl) -> bool {
    property.value_type.is_bool()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessorDescriptor, Primitive, TypeDescriptor};

    fn property(accessors: Option<AccessorDescriptor>, ty: TypeDescriptor) -> PropertyDecl {
        PropertyDecl {
            name: "TestProperty".to_string(),
            value_type: ty,
            modifiers: vec![Modifier::Public],
            accessors,
        }
    }

    #[test]
    fn public_and_private_win_immediately() {
        assert_eq!(classify(&[Modifier::Public]), AccessLevel::Public);
        assert_eq!(classify(&[Modifier::Static, Modifier::Private]), AccessLevel::Private);
        assert_eq!(
            classify(&[Modifier::Internal, Modifier::Public]),
            AccessLevel::Public
        );
    }

    #[test]
    fn protected_and_internal_combine() {
        assert_eq!(
            classify(&[Modifier::Protected, Modifier::Internal]),
            AccessLevel::ProtectedInternal
        );
        assert_eq!(
            classify(&[Modifier::Internal, Modifier::Protected]),
            AccessLevel::ProtectedInternal
        );
        assert_eq!(classify(&[Modifier::Protected]), AccessLevel::Protected);
        assert_eq!(classify(&[Modifier::Internal]), AccessLevel::Internal);
    }

    #[test]
    fn no_access_modifier_is_not_specified() {
        assert_eq!(classify(&[]), AccessLevel::NotSpecified);
        assert_eq!(classify(&[Modifier::Static]), AccessLevel::NotSpecified);
    }

    #[test]
    fn expression_bodied_property_has_no_public_setter() {
        let prop = property(None, TypeDescriptor::Primitive(Primitive::String));
        assert!(!is_setter_effectively_public(&prop));
    }

    #[test]
    fn missing_setter_is_not_public() {
        let prop = property(
            Some(AccessorDescriptor {
                has_getter: true,
                has_setter: false,
                setter_access: AccessLevel::NotSpecified,
            }),
            TypeDescriptor::Primitive(Primitive::String),
        );
        assert!(!is_setter_effectively_public(&prop));
    }

    #[test]
    fn unspecified_setter_access_counts_as_public() {
        let prop = property(
            Some(AccessorDescriptor {
                has_getter: true,
                has_setter: true,
                setter_access: AccessLevel::NotSpecified,
            }),
            TypeDescriptor::Primitive(Primitive::String),
        );
        assert!(is_setter_effectively_public(&prop));
    }

    #[test]
    fn private_setter_is_not_public() {
        let prop = property(
            Some(AccessorDescriptor {
                has_getter: true,
                has_setter: true,
                setter_access: AccessLevel::Private,
            }),
            TypeDescriptor::Primitive(Primitive::String),
        );
        assert!(!is_setter_effectively_public(&prop));
    }

    #[test]
    fn boolean_detection_requires_the_primitive() {
        let boolean = property(None, TypeDescriptor::Primitive(Primitive::Bool));
        assert!(is_boolean_property(&boolean));

        // A named type called "Boolean" is not the primitive.
        let named = property(None, TypeDescriptor::named("Boolean"));
        assert!(!is_boolean_property(&named));
    }
}
