#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiErrorKind {
    /// A style key outside the axis domain.
    UnknownKey,
    /// A required id/target association was blank.
    MissingAssociation,
    /// A pass-through attribute outside the allow-list.
    DisallowedAttribute,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiError {
    pub kind: UiErrorKind,
    pub message: String,
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UiError {}

impl UiError {
    pub(crate) fn unknown_key(axis: &str, key: &str, domain: &[&str]) -> Self {
        Self {
            kind: UiErrorKind::UnknownKey,
            message: format!(
                "unknown {axis} key {key:?} (expected one of: {})",
                domain.join(", ")
            ),
        }
    }

    pub(crate) fn missing_association(component: &str, attribute: &str) -> Self {
        Self {
            kind: UiErrorKind::MissingAssociation,
            message: format!("{component} requires a non-empty `{attribute}`"),
        }
    }

    pub(crate) fn disallowed_attribute(name: &str) -> Self {
        Self {
            kind: UiErrorKind::DisallowedAttribute,
            message: format!("attribute `{name}` cannot be passed through"),
        }
    }
}

pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_message_lists_domain() {
        let err = UiError::unknown_key("size", "huge", &["sm", "md"]);
        assert_eq!(err.kind, UiErrorKind::UnknownKey);
        assert_eq!(
            err.to_string(),
            r#"unknown size key "huge" (expected one of: sm, md)"#
        );
    }

    #[test]
    fn test_missing_association_names_attribute() {
        let err = UiError::missing_association("Label", "html_for");
        assert_eq!(err.kind, UiErrorKind::MissingAssociation);
        assert!(err.to_string().contains("`html_for`"));
    }
}
