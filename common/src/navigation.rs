//! Navigation shell state: current page and the mock login

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Login,
    Upload,
    Technology,
    Dashboard,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Login,
        Page::Upload,
        Page::Technology,
        Page::Dashboard,
        Page::About,
        Page::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Upload => "upload",
            Page::Technology => "technology",
            Page::Dashboard => "dashboard",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    /// Unknown identifiers fall back to the home page
    pub fn resolve(id: &str) -> Page {
        id.parse().unwrap_or_default()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}

/// A header or footer link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub fn page(&self) -> Page {
        Page::resolve(self.target)
    }
}

pub const HEADER_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", target: "home" },
    NavLink { label: "Upload", target: "upload" },
    NavLink { label: "Technology", target: "technology" },
    NavLink { label: "About", target: "about" },
    NavLink { label: "Contact", target: "contact" },
];

pub const FOOTER_QUICK_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", target: "home" },
    NavLink { label: "Upload & Grade", target: "upload" },
    NavLink { label: "Technology", target: "technology" },
    NavLink { label: "Dashboard", target: "dashboard" },
];

// "support" has no page of its own and lands on home
pub const FOOTER_RESOURCES: [NavLink; 3] = [
    NavLink { label: "About Us", target: "about" },
    NavLink { label: "Contact", target: "contact" },
    NavLink { label: "Support", target: "support" },
];

/// Account type picked on the login page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Merchant,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Farmer, Role::Merchant, Role::Admin];

    pub fn id(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Merchant => "merchant",
            Role::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
            Role::Merchant => "Merchant",
            Role::Admin => "Admin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Farmer => "Upload rubber sheets and get instant grading",
            Role::Merchant => "Access market prices and bulk grading",
            Role::Admin => "Manage system and user accounts",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.id() == lowered)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

/// Logged-in identity. Nothing is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

/// Login page form. Email and password are collected but never checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub role: Option<Role>,
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl LoginForm {
    /// Identity to log in with; `None` until a role tile and a name are set
    pub fn submit(&self) -> Option<User> {
        let role = self.role?;
        if self.name.is_empty() {
            return None;
        }
        Some(User {
            name: self.name.clone(),
            role,
        })
    }
}

/// Navigation shell state. Lives for one page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub current_page: Page,
    pub user: Option<User>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
    }

    pub fn navigate_to_id(&mut self, id: &str) {
        self.navigate(Page::resolve(id));
    }

    /// Logs in and opens the dashboard. An incomplete form is a no-op.
    pub fn login(&mut self, form: &LoginForm) -> Option<&User> {
        let user = form.submit()?;
        self.user = Some(user);
        self.current_page = Page::Dashboard;
        self.user.as_ref()
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.current_page = Page::Home;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn dashboard_heading(&self) -> String {
        let role = self
            .user
            .as_ref()
            .map(|u| u.role.display_name())
            .unwrap_or(Role::Farmer.display_name());
        format!("{} Dashboard", role)
    }

    pub fn dashboard_greeting(&self) -> String {
        match &self.user {
            Some(user) => format!("Welcome back, {}!", user.name),
            None => "Track your rubber sheet grading history".to_string(),
        }
    }
}
