// Session cookie formatting and parsing.
//
// The cookie is HttpOnly and SameSite=Strict but not Secure: this design
// assumes same-host plaintext transport, a documented hardening gap for
// production targets.

use axum::http::{header, HeaderMap};

/// Build the Set-Cookie value establishing a session.
pub fn session_cookie(name: &str, session_id: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        name, session_id, max_age_secs
    )
}

/// Build the Set-Cookie value clearing the session cookie.
pub fn clear_cookie(name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0", name)
}

/// Extract a cookie value from the request's Cookie header(s).
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        let Ok(cookies) = header_value.to_str() else {
            continue;
        };

        for pair in cookies.split(';') {
            let pair = pair.trim();
            if let Some((key, value)) = pair.split_once('=') {
                if key == name {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}
