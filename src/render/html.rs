//! HTML renderer — standalone page with a sidebar table of contents.
//!
//! The Markdown produced by [`super::markdown`] is converted with comrak;
//! the TOC goes into a fixed sidebar that collapses behind a burger button
//! on narrow screens.

use crate::locale::Labels;
use crate::model::Project;
use crate::render::markdown;
use crate::render::Renderer;
use comrak::{markdown_to_html, Options};

pub struct HtmlRenderer;

const STYLE: &str = r#"<style>
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    background-color: #0d1117;
    color: #c9d1d9;
    display: flex;
}
.header { display: none; }
.sidebar {
    background-color: #161b22;
    width: 250px;
    padding: 20px;
    position: fixed;
    top: 0;
    left: 0;
    height: 100%;
    overflow-y: auto;
    transition: transform 0.3s ease;
}
.content { margin-left: 300px; padding: 20px; flex: 1; }
a { color: #58a6ff; text-decoration: none; }
a:hover { text-decoration: underline; }
pre, code { background-color: #161b22; border-radius: 4px; padding: 4px; }
@media (max-width: 768px) {
    .header {
        display: flex;
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 50px;
        background-color: #161b22;
        align-items: center;
        padding: 0 15px;
        z-index: 1000;
    }
    .burger { cursor: pointer; font-size: 24px; }
    .sidebar {
        height: calc(100% - 50px);
        top: 50px;
        transform: translateX(-100%);
        z-index: 999;
    }
    .sidebar.active { transform: translateX(0); }
    .content { margin-left: 0; padding: 70px 20px 20px 20px; }
}
</style>"#;

const SCRIPT: &str = r#"<script>
function toggleSidebar() {
    document.getElementById('sidebar').classList.toggle('active');
}
document.addEventListener("DOMContentLoaded", function () {
    document.querySelectorAll(".sidebar a").forEach(function (link) {
        link.addEventListener("click", function () {
            if (window.innerWidth <= 768) {
                document.getElementById('sidebar').classList.remove('active');
            }
        });
    });
});
</script>"#;

impl Renderer for HtmlRenderer {
    fn render(&self, project: &Project, labels: &Labels) -> String {
        let anchors = markdown::assign_anchors(project);
        let toc_html = to_html(&markdown::render_toc(project, labels, &anchors));
        let content_html = to_html(&markdown::render_body(project, labels, &anchors));
        let title = html_escape(&project.title);

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", title));
        out.push_str(STYLE);
        out.push_str("\n</head>\n<body>\n");
        out.push_str("<div class=\"header\">\n");
        out.push_str("<span class=\"burger\" onclick=\"toggleSidebar()\">&#9776;</span>\n");
        out.push_str(&format!(
            "<div class=\"title\" style=\"flex: 1; text-align: center; font-size: 18px;\">{}</div>\n",
            title
        ));
        out.push_str("</div>\n");
        out.push_str(&format!("<div class=\"sidebar\" id=\"sidebar\">\n{}</div>\n", toc_html));
        out.push_str(&format!("<div class=\"content\">\n{}</div>\n", content_html));
        out.push_str(SCRIPT);
        out.push_str("\n</body>\n</html>\n");
        out
    }

    fn file_name(&self) -> &str {
        "documentation.html"
    }
}

/// Markdown → HTML with tables, hard line breaks, and the raw `<a name>`
/// anchors kept.
fn to_html(md: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.render.hardbreaks = true;
    options.render.unsafe_ = true;
    markdown_to_html(md, &options)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
