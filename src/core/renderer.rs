//! HTML fragments for the result area.
//!
//! Both `render_result` and `show_message` produce the complete new contents of the
//! `#result` region; callers replace, never append.

use crate::domain::model::{MuhuratResponse, MuhuratWindow, Severity};

pub const RANGE_WARNING: &str = "Please select a valid date range";
pub const COMPUTE_FAILED: &str = "AI could not compute muhurat at this moment. Please try again.";

/// Successful response: heading, one card per window in received order, PDF link.
pub fn render_result(response: &MuhuratResponse) -> String {
    let mut html = format!(
        r#"
    <div class="mb-6">
      <h2 class="text-2xl font-bold bg-gradient-to-r from-amber-400 to-orange-500 bg-clip-text text-transparent">
        Recommended Muhurats
      </h2>
      <p class="text-sm text-gray-400 mt-1 capitalize">
        Event Type: {}
      </p>
    </div>
  "#,
        html_escape(&humanize_request_type(&response.request_type))
    );

    for window in &response.recommended_muhurats {
        html.push_str(&window_card(window));
    }

    html.push_str(&format!(
        r#"
    <div class="mt-6 text-center">
      <a
        href="{}"
        target="_blank"
        class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-gradient-to-r from-green-400 to-emerald-600 text-black font-semibold hover:scale-105 transition"
      >
        📄 Download Detailed PDF
      </a>
    </div>
  "#,
        html_escape(&response.pdf_url)
    ));

    html
}

/// A single centered line colored by severity.
pub fn show_message(message: &str, severity: &Severity) -> String {
    format!(
        r#"
    <div class="mt-6 text-center {}">
      {}
    </div>
  "#,
        html_escape(severity.color_class()),
        html_escape(message)
    )
}

/// Standalone document holding the two page regions.
pub fn render_page(loading_visible: bool, result_html: &str) -> String {
    let loading_class = if loading_visible { "" } else { " hidden" };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>AI Muhurat</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="min-h-screen bg-gray-950 text-white">
  <main class="max-w-2xl mx-auto p-6">
    <div id="loading" class="text-center text-amber-400{}">Consulting the stars…</div>
    <div id="result">{}</div>
  </main>
</body>
</html>
"#,
        loading_class, result_html
    )
}

pub fn humanize_request_type(request_type: &str) -> String {
    request_type.replace('_', " ")
}

fn window_card(window: &MuhuratWindow) -> String {
    let explanation = match window.explanation.as_deref() {
        Some(text) if !text.is_empty() => format!(
            r#"<p class="text-xs text-gray-400 mt-3 leading-relaxed">
                 {}
               </p>"#,
            html_escape(text)
        ),
        _ => String::new(),
    };

    format!(
        r#"
      <div class="relative mb-4 p-5 rounded-xl border border-white/10 bg-black/30 backdrop-blur-md hover:border-amber-400/40 transition">

        <span class="absolute -top-3 right-4 px-3 py-1 text-xs rounded-full bg-amber-400 text-black font-semibold">
          {}
        </span>

        <p class="text-sm text-gray-300 mt-2">
          🕒 {} – {}
        </p>

        {}
      </div>
    "#,
        html_escape(&window.nakshatra),
        html_escape(&window.start),
        html_escape(&window.end),
        explanation
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
