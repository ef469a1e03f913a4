//! Cookie builders for access and refresh tokens.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::token::{ACCESS_TOKEN_EXP, REFRESH_TOKEN_EXP};

/// Cookie name for the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Cookie name for the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

fn token_cookie(
    name: &'static str,
    value: String,
    max_age: Duration,
    domain: Option<&str>,
) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax);
    if let Some(domain) = domain {
        builder = builder.domain(domain.to_owned());
    }
    builder.build()
}

/// Set the access-token cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use moviestream_auth_types::cookie::{set_access_token_cookie, ACCESS_TOKEN_COOKIE};
///
/// let jar = set_access_token_cookie(CookieJar::new(), "token_value".to_string(), Some("example.com"));
/// let cookie = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(86400)));
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn set_access_token_cookie(jar: CookieJar, value: String, domain: Option<&str>) -> CookieJar {
    jar.add(token_cookie(
        ACCESS_TOKEN_COOKIE,
        value,
        Duration::seconds(ACCESS_TOKEN_EXP as i64),
        domain,
    ))
}

/// Set the refresh-token cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use moviestream_auth_types::cookie::{set_refresh_token_cookie, REFRESH_TOKEN_COOKIE};
///
/// let jar = set_refresh_token_cookie(CookieJar::new(), "refresh_value".to_string(), None);
/// let cookie = jar.get(REFRESH_TOKEN_COOKIE).unwrap();
/// assert_eq!(cookie.domain(), None);
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_refresh_token_cookie(jar: CookieJar, value: String, domain: Option<&str>) -> CookieJar {
    jar.add(token_cookie(
        REFRESH_TOKEN_COOKIE,
        value,
        Duration::seconds(REFRESH_TOKEN_EXP as i64),
        domain,
    ))
}

/// Clear both token cookies by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use moviestream_auth_types::cookie::{
///     clear_cookies, set_access_token_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE,
/// };
///
/// let jar = set_access_token_cookie(CookieJar::new(), "a".to_string(), None);
/// let jar = clear_cookies(jar, None);
/// assert_eq!(jar.get(ACCESS_TOKEN_COOKIE).unwrap().max_age(), Some(time::Duration::ZERO));
/// assert_eq!(jar.get(REFRESH_TOKEN_COOKIE).unwrap().value(), "");
/// ```
pub fn clear_cookies(jar: CookieJar, domain: Option<&str>) -> CookieJar {
    jar.add(token_cookie(
        ACCESS_TOKEN_COOKIE,
        String::new(),
        Duration::ZERO,
        domain,
    ))
    .add(token_cookie(
        REFRESH_TOKEN_COOKIE,
        String::new(),
        Duration::ZERO,
        domain,
    ))
}
