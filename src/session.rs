use std::fmt;

use serde::{Deserialize, Serialize};

/// The three account roles. Wire strings are uppercase, as the backend
/// stores them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Customer,
    Retailer,
    Wholesaler,
}

impl Role {
    /// The dashboard route a freshly logged-in user of this role lands on.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Customer => "/customer/dashboard",
            Role::Retailer => "/retailer/dashboard",
            Role::Wholesaler => "/wholesaler/dashboard",
        }
    }
}

/// A backend user record, as returned by login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Password login payload.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload. Shop name and location only apply to retailers
/// and wholesalers.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    NotLoggedIn,
    /// Logged in, but the current role is not among the allowed ones.
    Forbidden {
        role: Role,
    },
}

impl AuthError {
    /// Where the route guard sends the user on this failure.
    pub fn redirect_path(&self) -> &'static str {
        match self {
            AuthError::NotLoggedIn => "/login",
            AuthError::Forbidden { .. } => "/",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotLoggedIn => write!(f, "not logged in"),
            AuthError::Forbidden { role } => {
                write!(f, "role {:?} is not allowed here", role)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Process-local authentication state: the current user plus an optional
/// bearer token. Nothing here is persisted by the crate; the embedding app
/// decides whether and where to stash it.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Stores the bearer token attached to backend requests, once the
    /// backend starts issuing them.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Route-guard check: the current user must exist and hold one of the
    /// allowed roles.
    pub fn authorize(&self, allowed: &[Role]) -> Result<&User, AuthError> {
        let user = self.user.as_ref().ok_or(AuthError::NotLoggedIn)?;
        if allowed.contains(&user.role) {
            Ok(user)
        } else {
            Err(AuthError::Forbidden { role: user.role })
        }
    }

    /// Where an unauthenticated visit lands: the role dashboard when logged
    /// in, the login page otherwise.
    pub fn landing_path(&self) -> &'static str {
        match &self.user {
            Some(user) => user.role.dashboard_path(),
            None => "/login",
        }
    }
}
