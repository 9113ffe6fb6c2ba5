//! Admin account profile
//!
//! Literal values the operator is told to enter in the Firebase console.

/// Values printed by the guide for the admin account and its Firestore role record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminProfile {
    /// Firebase console URL the operator opens manually
    pub console_url: String,

    /// Firebase project identifier
    pub project_id: String,

    /// Example admin email address
    pub email: String,

    /// Example admin password
    pub password: String,

    /// Firestore collection holding user role documents
    pub collection: String,

    /// Placeholder shown for the document id (the operator pastes the UID)
    pub document_id: String,

    /// Field storing the role (default: "role")
    pub role_field: String,

    /// Role value granting admin access (default: "admin")
    pub role_value: String,
}

fn default_console_url() -> String {
    "https://console.firebase.google.com/".to_string()
}

fn default_project_id() -> String {
    "irta-forms-app".to_string()
}

fn default_email() -> String {
    "admin@irta.local".to_string()
}

fn default_password() -> String {
    "Admin123!".to_string()
}

fn default_collection() -> String {
    "users".to_string()
}

fn default_document_id() -> String {
    "[paste UID]".to_string()
}

fn default_role_field() -> String {
    "role".to_string()
}

fn default_role_value() -> String {
    "admin".to_string()
}

impl Default for AdminProfile {
    fn default() -> Self {
        Self {
            console_url: default_console_url(),
            project_id: default_project_id(),
            email: default_email(),
            password: default_password(),
            collection: default_collection(),
            document_id: default_document_id(),
            role_field: default_role_field(),
            role_value: default_role_value(),
        }
    }
}

impl AdminProfile {
    /// Credentials as shown on the final login hint: `email / password`
    pub fn login_credentials(&self) -> String {
        format!("{} / {}", self.email, self.password)
    }

    /// Role assignment as entered in Firestore: `role = "admin"`
    pub fn role_assignment(&self) -> String {
        format!("{} = \"{}\"", self.role_field, self.role_value)
    }
}
