use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::{error, info, warn};

use crate::models::LoginForm;
use crate::session;
use crate::AppState;

/// Render the login form, showing a queued flash message at most once.
#[get("/login")]
pub async fn login_form(req: HttpRequest) -> impl Responder {
    let flash = session::take_flash(&req);

    let mut response = HttpResponse::Ok();
    response.content_type("text/html; charset=utf-8");
    if flash.is_some() {
        response.cookie(session::clear_flash_cookie());
    }
    response.body(login_page(flash.as_deref()))
}

#[post("/login")]
pub async fn login_submit(
    form: web::Form<LoginForm>,
    state: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    if state.credentials.verify(&form.username, &form.password) {
        let token = match session::create_session(&form.username, &state.session_secret) {
            Ok(token) => token,
            Err(err) => {
                error!("Failed to sign session token: {}", err);
                return HttpResponse::InternalServerError().finish();
            }
        };
        info!("User {:?} logged in", form.username);
        HttpResponse::Found()
            .insert_header((header::LOCATION, "/dashboard"))
            .cookie(session::session_cookie(token))
            .finish()
    } else {
        // wrong password and unknown username take the same path, so the
        // response never reveals which one it was
        warn!("Failed login attempt for {:?}", form.username);
        HttpResponse::Found()
            .insert_header((header::LOCATION, "/login"))
            .cookie(session::flash_cookie("Invalid username or password"))
            .finish()
    }
}

#[get("/dashboard")]
pub async fn dashboard(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    match session::authenticated_user(&req, &state.session_secret) {
        Some(username) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(dashboard_page(&username)),
        None => HttpResponse::Found()
            .insert_header((header::LOCATION, "/login"))
            .finish(),
    }
}

/// Drop the session cookie and send the client back to the login form.
#[get("/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/login"))
        .cookie(session::clear_session_cookie())
        .finish()
}

fn login_page(flash: Option<&str>) -> String {
    let notice = flash
        .map(|message| format!(r#"<p class="notice">{}</p>"#, html_escape(message)))
        .unwrap_or_default();

    format!(
        r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Control Dashboard Login</title>
        <style>
            body {{
                background-color: #0d0d0d;
                color: #00ffcc;
                font-family: monospace;
                padding: 40px;
            }}
            h1 {{
                color: #ff00ff;
            }}
            .notice {{
                color: #ffcc00;
                border: 1px solid #ffcc00;
                padding: 8px;
                max-width: 320px;
            }}
            label {{
                display: block;
                margin-top: 12px;
            }}
            input {{
                background: #1a1a1a;
                border: 1px solid #00ffcc;
                color: #00ffcc;
                padding: 6px;
                font-family: monospace;
            }}
            button {{
                margin-top: 16px;
                background: #1a1a1a;
                border: 1px solid #ff00ff;
                color: #ff00ff;
                padding: 6px 18px;
                font-family: monospace;
            }}
        </style>
    </head>
    <body>
        <h1>Control Dashboard</h1>
        <p>Sign in to continue.</p>
        {notice}
        <form method="POST" action="/login">
            <label for="username">Username</label>
            <input type="text" id="username" name="username" autofocus>
            <label for="password">Password</label>
            <input type="password" id="password" name="password">
            <button type="submit">Sign In</button>
        </form>
    </body>
    </html>
    "#,
        notice = notice
    )
}

fn dashboard_page(username: &str) -> String {
    format!(
        r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Control Dashboard</title>
        <style>
            body {{
                background-color: #0d0d0d;
                color: #00ffcc;
                font-family: monospace;
                padding: 40px;
            }}
            h1 {{
                color: #ff00ff;
            }}
            a {{
                color: #00ffcc;
            }}
        </style>
    </head>
    <body>
        <h1>Welcome {username}! This is the control dashboard.</h1>
        <p><a href="/logout">Log out</a></p>
    </body>
    </html>
    "#,
        username = html_escape(username)
    )
}

/// Minimal HTML escape for values interpolated into pages
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
