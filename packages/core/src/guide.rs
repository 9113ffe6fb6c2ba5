//! Guide content and branch selection
//!
//! The guide is an introductory block followed by exactly one of two
//! instruction blocks, chosen from the operator's single response.

use std::fmt;

use crate::profile::AdminProfile;

/// Response that selects the console instructions (compared case-insensitively)
pub const AFFIRMATIVE_TOKEN: &str = "y";

/// One printed line of the guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideLine {
    /// Empty separator line
    Blank,
    /// Plain informational text
    Text(String),
    /// Section title
    Heading(String),
    /// Numbered instruction, rendered as `N. text`
    Step { number: usize, text: String },
}

impl GuideLine {
    fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }
}

impl fmt::Display for GuideLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideLine::Blank => Ok(()),
            GuideLine::Text(text) | GuideLine::Heading(text) => f.write_str(text),
            GuideLine::Step { number, text } => write!(f, "{number}. {text}"),
        }
    }
}

/// Instruction set selected by the operator's response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Manual steps in the Firebase console
    Console,
    /// Summary of the Admin SDK setup
    Sdk,
}

impl Branch {
    /// Pick the branch for a captured response
    ///
    /// `response` is the line without its terminator; `None` means the input
    /// closed before a line arrived. Whitespace is significant.
    pub fn from_response(response: Option<&str>) -> Self {
        let Some(line) = response else {
            tracing::debug!("no response before end of input");
            return Branch::Sdk;
        };

        let branch = if line.to_lowercase() == AFFIRMATIVE_TOKEN {
            Branch::Console
        } else {
            Branch::Sdk
        };
        tracing::debug!(response = line, %branch, "response selected branch");
        branch
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Console => "console",
            Branch::Sdk => "sdk",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the guide blocks for an admin profile
#[derive(Debug, Clone, Default)]
pub struct Guide {
    profile: AdminProfile,
}

impl Guide {
    pub fn new(profile: AdminProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &AdminProfile {
        &self.profile
    }

    /// Block printed before the prompt, regardless of the response
    pub fn intro(&self) -> Vec<GuideLine> {
        let p = &self.profile;
        vec![
            GuideLine::text("To create a user via terminal, you need Firebase Admin SDK."),
            GuideLine::Blank,
            GuideLine::heading("Option 1: Use Firebase Console (Easier)"),
            GuideLine::text(format!("Go to: {}", p.console_url)),
            GuideLine::text(format!("Project: {}", p.project_id)),
            GuideLine::text("Authentication > Users > Add user"),
            GuideLine::Blank,
            GuideLine::heading("Option 2: Use Firebase CLI with Admin SDK setup"),
            GuideLine::Blank,
            GuideLine::text("This script requires Firebase Admin SDK setup with service account."),
            GuideLine::text(
                "Would you like instructions for Firebase Console method instead? (y/n)",
            ),
        ]
    }

    /// Block printed after the response for the given branch
    pub fn block(&self, branch: Branch) -> Vec<GuideLine> {
        match branch {
            Branch::Console => self.console_block(),
            Branch::Sdk => self.sdk_block(),
        }
    }

    fn console_steps(&self) -> Vec<String> {
        let p = &self.profile;
        vec![
            format!("Go to: {}", p.console_url),
            format!("Select project: {}", p.project_id),
            "Click: Authentication > Users".to_string(),
            "Click: Add user".to_string(),
            format!("Email: {}", p.email),
            format!("Password: {}", p.password),
            "Copy the User UID".to_string(),
            "Go to: Firestore Database".to_string(),
            format!("Create collection: {}", p.collection),
            format!("Document ID: {}", p.document_id),
            format!("Add field: {}", p.role_assignment()),
        ]
    }

    fn console_block(&self) -> Vec<GuideLine> {
        let mut lines = vec![
            GuideLine::Blank,
            GuideLine::heading("=== FIREBASE CONSOLE METHOD (RECOMMENDED) ==="),
            GuideLine::Blank,
        ];
        lines.extend(numbered(self.console_steps()));
        lines.push(GuideLine::Blank);
        lines.push(GuideLine::text(format!(
            "Then login with: {}",
            self.profile.login_credentials()
        )));
        lines
    }

    fn sdk_block(&self) -> Vec<GuideLine> {
        let mut lines = vec![
            GuideLine::Blank,
            GuideLine::heading("To use Admin SDK, you need:"),
        ];
        lines.extend(numbered(sdk_steps()));
        lines.push(GuideLine::Blank);
        lines.push(GuideLine::text(
            "The Firebase Console method is much simpler for creating one user.",
        ));
        lines
    }
}

fn sdk_steps() -> Vec<String> {
    vec![
        "Download service account key from Firebase Console".to_string(),
        "Install: npm install firebase-admin".to_string(),
        "Use the service account key to initialize admin".to_string(),
    ]
}

fn numbered(steps: Vec<String>) -> impl Iterator<Item = GuideLine> {
    steps
        .into_iter()
        .enumerate()
        .map(|(i, text)| GuideLine::Step { number: i + 1, text })
}
