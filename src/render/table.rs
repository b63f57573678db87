// src/render/table.rs
// =============================================================================
// Builds the contributors document.
//
// Layout:
//
//   <!-- generated-file banner -->
//   # Contributors
//   <table>
//   <tr>
//     <td>avatar + name</td> ... `columns` cells per row
//   </tr>
//   ...
//   </table>
//   <sub>footer naming the threshold</sub>
//
// GitHub renders raw HTML tables inside markdown, which is the only way to get
// a fixed-width avatar grid. Users are emitted in the order given; sorting is
// the caller's business.
// =============================================================================

use crate::config;
use crate::github::UserDetail;

const PREAMBLE: &str = "\
<!-- This file is generated by contributors-table. Do not edit it by hand; rerun the tool instead. -->

# Contributors

Thank you to everyone who has helped build this project!
";

/// Knobs for the table's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Cells per row, at least 1
    pub columns: usize,
    /// Avatar width/height in pixels
    pub avatar_size: u32,
    /// Only shown in the footer
    pub threshold: u64,
}

impl Default for TableLayout {
    fn default() -> Self {
        TableLayout {
            columns: config::COLUMNS,
            avatar_size: config::AVATAR_SIZE,
            threshold: config::CONTRIBUTION_THRESHOLD,
        }
    }
}

/// Renders the full document for `users`.
///
/// Every `<tr>` gets exactly one matching `</tr>`, and an empty user list
/// produces an empty `<table></table>` with the usual header and footer.
pub fn render_table(users: &[UserDetail], layout: &TableLayout) -> String {
    let columns = layout.columns.max(1);
    let mut out = String::from(PREAMBLE);

    out.push_str("\n<table>\n");

    for (index, user) in users.iter().enumerate() {
        if index % columns == 0 {
            if index > 0 {
                out.push_str("</tr>\n");
            }
            out.push_str("<tr>\n");
        }
        out.push_str(&render_cell(user, layout.avatar_size));
    }

    if !users.is_empty() {
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n");
    out.push_str(&format!(
        "\n<sub>Everyone with at least {} contributions is listed here. Bots are excluded. \
         This table is regenerated automatically.</sub>\n",
        layout.threshold
    ));

    out
}

fn render_cell(user: &UserDetail, avatar_size: u32) -> String {
    let login = escape_html(user.login.as_deref().unwrap_or_default());
    let label = escape_html(user.label());

    format!(
        "  <td align=\"center\" valign=\"top\"><a href=\"{href}\"><img src=\"{src}\" width=\"{size}\" height=\"{size}\" alt=\"{login}\" /><br /><sub><b>{label}</b></sub></a></td>\n",
        href = escape_html(&user.html_url),
        src = escape_html(&sized_avatar_url(&user.avatar_url, avatar_size)),
        size = avatar_size,
        login = login,
        label = label,
    )
}

// GitHub avatar URLs usually already carry "?v=4", so append with the right
// separator. `s` is the size parameter avatars.githubusercontent.com honours.
fn sized_avatar_url(avatar_url: &str, size: u32) -> String {
    let separator = if avatar_url.contains('?') { '&' } else { '?' };
    format!("{}{}s={}", avatar_url, separator, size)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
