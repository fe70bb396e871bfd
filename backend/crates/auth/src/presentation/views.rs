//! Inline HTML views for the auth forms
//!
//! Pages are small enough that a template engine would be overhead; the
//! markup lives next to the handlers that serve it.

use platform::html::escape;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Mini Blog</title>
</head>
<body>
<nav><a href="/posts">Posts</a> | <a href="/login">Log in</a> | <a href="/register">Register</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>"#,
        title = escape(title),
        body = body,
    )
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape(message)),
        None => String::new(),
    }
}

/// Registration form, optionally with an error banner
pub fn register_page(error: Option<&str>) -> String {
    let body = format!(
        r#"{error}
<form method="post" action="/register">
<label>Username <input type="text" name="username"></label>
<label>Email <input type="email" name="email"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Register</button>
</form>
<p>Already have an account? <a href="/login">Log in</a></p>"#,
        error = error_banner(error),
    );

    page("Register", &body)
}

/// Login form, optionally with an error banner
pub fn login_page(error: Option<&str>) -> String {
    let body = format!(
        r#"{error}
<form method="post" action="/login">
<label>Email <input type="email" name="email"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Log in</button>
</form>
<p>New here? <a href="/register">Register</a></p>"#,
        error = error_banner(error),
    );

    page("Log in", &body)
}
