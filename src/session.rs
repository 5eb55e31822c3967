//! Session and flash cookies
//!
//! The session is a signed token (HS256) carried in an HTTP-only cookie;
//! the server keeps no per-session state. The flash cookie carries the
//! one-shot notice deposited next to a failed-login redirect.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::models::{Flash, SessionClaims};

pub const SESSION_COOKIE: &str = "dash_session";
pub const FLASH_COOKIE: &str = "dash_flash";

const SESSION_HOURS: i64 = 24;

pub fn create_session(username: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(SESSION_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = SessionClaims {
        sub: username.to_owned(),
        exp: expiration,
        jti: Uuid::new_v4(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn validate_session(
    token: &str,
    secret: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Username carried by the request's session cookie, if the cookie is
/// present, untampered and unexpired.
pub fn authenticated_user(req: &HttpRequest, secret: &str) -> Option<String> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    let claims = validate_session(cookie.value(), secret).ok()?;
    if claims.sub.is_empty() {
        return None;
    }
    Some(claims.sub)
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(SESSION_HOURS))
        .finish()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

/// Builds the one-shot cookie the failing handler deposits next to its
/// redirect. The payload is JSON so the message survives cookie-value
/// character rules intact.
pub fn flash_cookie(message: &str) -> Cookie<'static> {
    let flash = Flash {
        message: message.to_owned(),
    };
    // serializing a plain string field cannot fail
    let payload = serde_json::to_string(&flash).unwrap_or_default();
    Cookie::build(FLASH_COOKIE, URL_SAFE_NO_PAD.encode(payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Reads the flash message off a request. The caller clears the cookie on
/// the response it renders the message into.
pub fn take_flash(req: &HttpRequest) -> Option<String> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    let bytes = URL_SAFE_NO_PAD.decode(cookie.value()).ok()?;
    let flash: Flash = serde_json::from_slice(&bytes).ok()?;
    Some(flash.message)
}

pub fn clear_flash_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(FLASH_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}
