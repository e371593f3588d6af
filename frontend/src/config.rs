pub const SITE_NAME: &str = "CodByt";

#[cfg(debug_assertions)]
pub fn site_url() -> &'static str {
    "http://localhost:8080"  // Trunk dev server
}

#[cfg(not(debug_assertions))]
pub fn site_url() -> &'static str {
    "https://codbyt.com"
}

pub fn form_endpoint() -> &'static str {
    "https://api.web3forms.com/submit"
}

/// Public intake key; web3forms expects it in every submission.
pub fn form_access_key() -> &'static str {
    "8ccb4900-0144-4d68-bb99-df979e63c45e"
}

pub const CONTACT_EMAIL: &str = "hello@codbyt.com";
pub const SUPPORT_EMAIL: &str = "support@codbyt.com";
