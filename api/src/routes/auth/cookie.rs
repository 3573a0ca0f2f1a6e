//! Session cookie construction

use actix_web::cookie::{time::Duration, Cookie, SameSite};

use scribe_shared::config::SessionCookieConfig;

fn same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

/// `HttpOnly` cookie carrying the session token for `max_age_secs`
pub fn session_cookie(config: &SessionCookieConfig, token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build(config.name.clone(), token)
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(&config.same_site))
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

/// Expired, empty cookie that makes the browser drop the session
pub fn removal_cookie(config: &SessionCookieConfig) -> Cookie<'static> {
    Cookie::build(config.name.clone(), "")
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(&config.same_site))
        .max_age(Duration::ZERO)
        .finish()
}
