//! Request-scoped context passed from the page layer to the loader and provider

use parking_lot::Mutex;
use uuid::Uuid;

/// Declares that the current response depends on a tag, so the hosting layer
/// can refresh it when the tag is invalidated.
pub trait DependencyRegistrar {
    fn register_dependency(&self, tag: &str);
}

/// Per-request context: caller identity plus the dependency tags registered
/// while the request is served
#[derive(Debug)]
pub struct RequestContext {
    request_id: Uuid,
    user_id: Option<Uuid>,
    dependencies: Mutex<Vec<String>>,
}

impl RequestContext {
    /// Create a context for the given user (`None` for anonymous callers)
    pub fn new(user_id: Option<Uuid>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            user_id,
            dependencies: Mutex::new(Vec::new()),
        }
    }

    /// Create a context for an authenticated user
    pub fn for_user(user_id: Uuid) -> Self {
        Self::new(Some(user_id))
    }

    /// Create a context without a user
    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    /// Tags registered so far, in registration order (duplicates kept)
    pub fn dependencies(&self) -> Vec<String> {
        self.dependencies.lock().clone()
    }
}

impl DependencyRegistrar for RequestContext {
    fn register_dependency(&self, tag: &str) {
        self.dependencies.lock().push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_has_no_dependencies() {
        let ctx = RequestContext::anonymous();
        assert!(ctx.user_id().is_none());
        assert!(ctx.dependencies().is_empty());
    }

    #[test]
    fn test_register_dependency_keeps_order_and_duplicates() {
        let user_id = Uuid::new_v4();
        let ctx = RequestContext::for_user(user_id);
        ctx.register_dependency("settings:userSettings");
        ctx.register_dependency("quotes:list");
        ctx.register_dependency("settings:userSettings");

        assert_eq!(ctx.user_id(), Some(user_id));
        assert_eq!(
            ctx.dependencies(),
            vec!["settings:userSettings", "quotes:list", "settings:userSettings"]
        );
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(
            RequestContext::anonymous().request_id(),
            RequestContext::anonymous().request_id()
        );
    }
}
