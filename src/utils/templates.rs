//! Email templates.

use crate::domain::User;

/// Subject and plain text body of the welcome email.
pub fn welcome_email(user: &User, app_name: &str, app_url: &str) -> (String, String) {
    let subject = format!("Welcome to {}!", app_name);
    let body = format!(
        "Hello {name},\n\
         \n\
         Thank you for registering with {app_name}. Your account for {email} is ready.\n\
         \n\
         Get started: {app_url}\n\
         \n\
         Regards,\n\
         The {app_name} team",
        name = user.name,
        email = user.email,
        app_name = app_name,
        app_url = app_url,
    );

    (subject, body)
}
