use std::io::Write;

use rand::Rng;

use crate::domain::page::{Accent, GenerationEvent, Page};
use crate::error::{AppError, Result};
use crate::services::clock::Clock;

/// Captures a fresh event and renders it.
pub fn generate_page<C, R>(clock: &C, rng: &mut R, accent: Accent) -> Page
where
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    let event = GenerationEvent::capture(clock, rng);
    let html = render(&event, accent);
    Page { event, html }
}

/// Generates one page and writes the bare document to `out`.
pub fn write_page_to<W, C, R>(out: &mut W, clock: &C, rng: &mut R, accent: Accent) -> Result<GenerationEvent>
where
    W: Write + ?Sized,
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    let page = generate_page(clock, rng, accent);
    out.write_all(page.html.as_bytes()).map_err(AppError::Output)?;
    out.flush().map_err(AppError::Output)?;
    Ok(page.event)
}

/// Renders the page for `event`. Everything outside the timestamp and the random number is
/// fixed for a given accent.
pub fn render(event: &GenerationEvent, accent: Accent) -> String {
    let ts = event.display_timestamp();
    let n = event.random_value;
    let color = accent.as_str();
    format!(
        r#"<!DOCTYPE html>
<!-- Auto-generated HTML at {ts} -->
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Auto-Generated Page</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            background-color: {color};
            margin: 0;
            padding: 20px;
        }}
        .container {{
            max-width: 800px;
            margin: 0 auto;
            background: white;
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1);
        }}
        h1 {{
            color: {color};
            text-align: center;
        }}
        .random-number {{
            font-size: 24px;
            font-weight: bold;
            text-align: center;
            margin: 20px 0;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Auto-Generated HTML Page</h1>
        <p>This page was automatically generated at {ts}.</p>
        <div class="random-number">Random Number: {n}</div>
        <p>Generated with love by the Auto Code Generator!</p>
    </div>
</body>
</html>"#
    )
}
