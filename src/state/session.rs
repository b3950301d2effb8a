//! Session Gate
//!
//! Simulates login state using local storage. Two keys are persisted:
//! `userType` ("admin" | "customer") and `userId` (the customer id, present
//! only for customers). There is no expiry and no server-side validation;
//! the stored flags are a client-side marker only.

/// Storage key for the actor type.
pub const TYPE_KEY: &str = "userType";
/// Storage key for the customer id.
pub const ID_KEY: &str = "userId";

/// Route shown to unauthenticated visitors.
pub const LOGIN_ROUTE: &str = "/login";
/// Landing page after admin login.
pub const ADMIN_HOME: &str = "/admin/dashboard";
/// Landing page after customer login.
pub const CUSTOMER_HOME: &str = "/customer/dashboard";

/// The current actor, decoded from the persisted flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    Admin,
    Customer(String),
    Anonymous,
}

impl Session {
    /// Decode a session from the raw stored values.
    ///
    /// A customer marker without an id is treated as not logged in.
    pub fn from_parts(user_type: Option<&str>, user_id: Option<&str>) -> Self {
        match (user_type, user_id) {
            (Some("admin"), _) => Session::Admin,
            (Some("customer"), Some(id)) if !id.is_empty() => {
                Session::Customer(id.to_string())
            }
            _ => Session::Anonymous,
        }
    }

    /// Load the session from local storage.
    pub fn load() -> Self {
        let user_type = storage_get(TYPE_KEY);
        let user_id = storage_get(ID_KEY);
        Session::from_parts(user_type.as_deref(), user_id.as_deref())
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Session::Admin)
    }

    pub fn customer_id(&self) -> Option<&str> {
        match self {
            Session::Customer(id) => Some(id),
            _ => None,
        }
    }
}

/// Mark the actor as admin and navigate to the admin dashboard.
pub fn login_admin() {
    storage_set(TYPE_KEY, "admin");
    storage_remove(ID_KEY);
    redirect(ADMIN_HOME);
}

/// Mark the actor as the given customer and navigate to their dashboard.
pub fn login_customer(customer_id: &str) {
    storage_set(TYPE_KEY, "customer");
    storage_set(ID_KEY, customer_id);
    redirect(CUSTOMER_HOME);
}

/// Clear the entire persisted store and return to the login page.
///
/// This wipes all of local storage, not just the session keys, matching the
/// portal's long-standing logout behavior (the API URL override goes with it).
pub fn logout() {
    if let Some(storage) = local_storage() {
        let _ = storage.clear();
    }
    redirect(LOGIN_ROUTE);
}

/// Redirect to login unless the stored actor is an admin. No-op otherwise.
pub fn require_admin() {
    if !Session::load().is_admin() {
        redirect(LOGIN_ROUTE);
    }
}

/// Redirect to login unless the stored actor is a customer with an id.
///
/// Returns the customer id when the gate passes; pages should bail out of
/// data loading on `None` since a redirect is already underway.
pub fn require_customer() -> Option<String> {
    match Session::load() {
        Session::Customer(id) => Some(id),
        _ => {
            redirect(LOGIN_ROUTE);
            None
        }
    }
}

/// Navigate the browser to the given route.
pub fn redirect(route: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(route);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn storage_get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_session() {
        let session = Session::from_parts(Some("admin"), None);
        assert!(session.is_admin());
        assert_eq!(session.customer_id(), None);
    }

    #[test]
    fn test_customer_session_requires_id() {
        let session = Session::from_parts(Some("customer"), Some("CUST-001"));
        assert_eq!(session.customer_id(), Some("CUST-001"));

        // Customer marker without an id is not logged in
        assert_eq!(Session::from_parts(Some("customer"), None), Session::Anonymous);
        assert_eq!(
            Session::from_parts(Some("customer"), Some("")),
            Session::Anonymous
        );
    }

    #[test]
    fn test_unknown_or_absent_type_is_anonymous() {
        assert_eq!(Session::from_parts(None, None), Session::Anonymous);
        assert_eq!(Session::from_parts(None, Some("CUST-001")), Session::Anonymous);
        assert_eq!(Session::from_parts(Some(""), None), Session::Anonymous);
        assert_eq!(
            Session::from_parts(Some("superuser"), Some("CUST-001")),
            Session::Anonymous
        );
    }
}
