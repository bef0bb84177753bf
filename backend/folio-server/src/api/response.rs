//! Handler outcomes: a rendered page or a `303 See Other` redirect.

use crate::api::cookies::{expired_flash_cookie, flash_cookie};
use crate::{ApiResult, Flash, IncomingFlash, Templates};

use axum::{
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use minijinja::{Value, context};

/// A rendered HTML view
#[derive(Debug)]
pub struct Page {
    html: String,
    clear_flash: bool,
}

impl Page {
    /// Render `template` with `data`, consuming the incoming flash.
    /// Every view also sees `flash`.
    pub fn render(
        templates: &Templates,
        template: &str,
        incoming: IncomingFlash,
        data: Value,
    ) -> ApiResult<Self> {
        let html = templates.render(
            template,
            context! {
                flash => incoming.flash,
                ..data
            },
        )?;

        Ok(Self {
            html,
            clear_flash: incoming.from_cookie,
        })
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        if self.clear_flash {
            append_cookie(&mut headers, &expired_flash_cookie());
        }

        (headers, Html(self.html)).into_response()
    }
}

/// Redirect the browser with GET to another page
#[derive(Debug)]
pub struct SeeOther {
    location: String,
    cookies: Vec<String>,
}

impl SeeOther {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            cookies: Vec::new(),
        }
    }

    /// Show `flash` on the page the browser lands on
    pub fn with_flash(self, flash: Flash) -> Self {
        self.with_cookie(flash_cookie(&flash))
    }

    /// Attach a raw `Set-Cookie` value
    pub fn with_cookie(mut self, cookie: String) -> Self {
        self.cookies.push(cookie);
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl IntoResponse for SeeOther {
    fn into_response(self) -> Response {
        let location = match HeaderValue::from_str(&self.location) {
            Ok(location) => location,
            Err(e) => {
                log::error!("Invalid redirect target '{}': {}", self.location, e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(header::LOCATION, location);
        for cookie in &self.cookies {
            append_cookie(&mut headers, cookie);
        }

        (StatusCode::SEE_OTHER, headers).into_response()
    }
}

fn append_cookie(headers: &mut HeaderMap, cookie: &str) {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => log::error!("Dropping unencodable cookie: {}", e),
    }
}
