use chrono::{Local, NaiveDate};

/// Wrap the ranked digest text in the fixed HTML email shell, stamped with
/// today's date.
pub fn render(digest: &str) -> String {
    render_with_date(digest, Local::now().date_naive())
}

/// Deterministic core of [`render`]. The digest text is trusted to be
/// well-formed and is interpolated verbatim, not sanitized.
pub fn render_with_date(digest: &str, date: NaiveDate) -> String {
    format!(
        r#"
    <html>
    <head>
        <style>
            body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
            h1 {{ color: #0060df; }}
            h2 {{ color: #003d99; border-bottom: 2px solid #e0e0e0; padding-bottom: 5px; }}
            .paper {{ margin: 20px 0; padding: 15px; background-color: #f8f9fa; border-radius: 5px; }}
            .meta {{ color: #666; font-size: 0.9em; }}
            a {{ color: #0060df; text-decoration: none; }}
        </style>
    </head>
    <body>
        <h1>Your Research Digest</h1>
        <p class="meta">Generated: {date}</p>

        {digest}

        <hr>
        <p style="color: #666; font-size: 0.9em;">
            Generated automatically by your personal research digest.
            <br>To modify preferences, edit config.yaml in your repository.
        </p>
    </body>
    </html>
    "#,
        date = date.format("%Y-%m-%d"),
        digest = digest
    )
}
