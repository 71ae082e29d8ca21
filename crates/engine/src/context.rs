//! Explicit session context.
//!
//! Identity is passed into every call that needs it rather than read from
//! ambient/global storage, so the same engine code serves interactive
//! sessions and server-side validation alike.

use sheetkeeper_domain::UserId;

/// Who is driving this sheet-editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user_id: UserId,
    /// Free-form label for logs (client name, request id, ...).
    label: Option<String>,
}

impl SessionContext {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_carries_identity_and_label() {
        let user_id = UserId::new();
        let ctx = SessionContext::new(user_id).with_label("wizard-session");
        assert_eq!(ctx.user_id(), user_id);
        assert_eq!(ctx.label(), Some("wizard-session"));
    }
}
