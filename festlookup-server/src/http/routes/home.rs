//! Home page - static HTML form for manual lookups
//!
//! Pure presentation; submits to the lookup endpoint via query params.

use axum::response::Html;
use axum::{routing::get, Router};

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Festival Lookup</title>
    </head>
    <body style="font-family: Arial; margin: 40px;">
        <h2>Festival Lookup</h2>
        <form action="/festivals/" method="get">
            <label for="holidaydate">Enter date (YYYY-MM-DD):</label><br><br>
            <input type="text" id="holidaydate" name="holidaydate" placeholder="e.g., 2025-12-25" required>
            <br><br>
            <label for="district">Enter district name:</label><br><br>
            <input type="text" id="district" name="district" placeholder="e.g., Nellore" required>
            <br><br>
            <button type="submit" style="padding: 5px 15px;">Get Festivals</button>
        </form>
        <p>Example: <code>/festivals/?holidaydate=2025-12-25&district=Nellore</code></p>
    </body>
</html>
"#;

/// GET /
async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn home_serves_lookup_form() {
        let Html(body) = home().await;
        assert!(body.contains(r#"form action="/festivals/""#));
        assert!(body.contains(r#"name="holidaydate""#));
        assert!(body.contains(r#"name="district""#));
    }
}
