//! Action Registry Error Types

use crate::core::error_handling::ContextualError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionRegistryError {
    /// Registration attempted after the registry was sealed at start
    #[error("Registry is sealed; cannot register action type '{action_type}' after start")]
    RegistrySealed { action_type: String },

    /// Action type already registered by another plugin
    #[error("Action type '{action_type}' is already registered")]
    DuplicateActionType { action_type: String },
}

/// Result type for action registry operations
pub type ActionRegistryResult<T> = Result<T, ActionRegistryError>;

impl ContextualError for ActionRegistryError {
    fn is_user_actionable(&self) -> bool {
        match self {
            // A duplicate type is fixable by the registering plugin's author
            ActionRegistryError::DuplicateActionType { .. } => true,
            // Registering after seal is an ordering bug in the caller, not
            // something a user can act on
            ActionRegistryError::RegistrySealed { .. } => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            ActionRegistryError::DuplicateActionType { action_type } => Some(format!(
                "Action type '{}' is already registered; pick a unique identifier",
                action_type
            )),
            ActionRegistryError::RegistrySealed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let sealed = ActionRegistryError::RegistrySealed {
            action_type: "rollover".to_string(),
        };
        assert!(sealed.to_string().contains("sealed"));
        assert!(sealed.to_string().contains("rollover"));

        let duplicate = ActionRegistryError::DuplicateActionType {
            action_type: "close".to_string(),
        };
        assert!(duplicate.to_string().contains("already registered"));
        assert!(duplicate.to_string().contains("close"));
    }

    #[test]
    fn test_contextual_error_classification() {
        let sealed = ActionRegistryError::RegistrySealed {
            action_type: "rollover".to_string(),
        };
        assert!(!sealed.is_user_actionable());
        assert_eq!(sealed.user_message(), None);

        let duplicate = ActionRegistryError::DuplicateActionType {
            action_type: "close".to_string(),
        };
        assert!(duplicate.is_user_actionable());
        assert!(duplicate.user_message().unwrap().contains("close"));
    }
}
