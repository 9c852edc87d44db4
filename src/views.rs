//! Server-rendered HTML for the index and editor pages.
//!
//! No template engine: the two pages are small enough to build with
//! `format!`. Page names are escaped in text positions and in the
//! inline event handlers that carry them back into script calls.

use crate::pages::file_ops::PageEntry;

/// Escape a string for HTML text and attribute positions.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string for embedding inside a single-quoted JS string literal.
pub fn escape_js(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the main page: add-page form plus one row per page with
/// editor link, last-modified time, and rename/delete actions.
pub fn render_index(pages: &[PageEntry]) -> String {
    let page_links: String = pages
        .iter()
        .map(|page| {
            let text = escape_html(&page.name);
            // The href is a URL path segment, not HTML text
            let href = urlencoding::encode(&page.name);
            // Name travels through an HTML attribute into a JS call:
            // JS-escape first, then HTML-escape the result.
            let arg = escape_html(&escape_js(&page.name));
            let modified = page.modified.as_deref().unwrap_or("");
            format!(
                r#"
                <div class="page-item">
                    <a href="/page/{href}" target="_blank">{text}</a>
                    <span class="modified">{modified}</span>
                    <div class="actions">
                        <button onclick="renamePage('{arg}')">Rename</button>
                        <button onclick="confirmDelete('{arg}')">Delete</button>
                    </div>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Notepad - Main Page</title>
    <style>
        body {{
            background-color: black;
            color: white;
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
            display: flex;
            flex-direction: column;
            justify-content: flex-start;
            align-items: flex-start;
        }}
        .add-page {{
            margin-bottom: 20px;
            display: flex;
            align-items: center;
        }}
        .add-page input {{
            height: 40px;
            font-size: 16px;
            padding: 0 10px;
            margin-right: 10px;
        }}
        .add-page button {{
            height: 40px;
            padding: 0 15px;
            font-size: 16px;
            cursor: pointer;
        }}
        .page-list {{
            display: flex;
            flex-direction: column;
            gap: 15px;
            width: 60%;
        }}
        .page-item {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 10px;
            background-color: #444;
            border-radius: 10px;
            width: 100%;
        }}
        .page-item a {{
            color: white;
            text-decoration: none;
            font-weight: bold;
            flex-grow: 1;
        }}
        .modified {{
            color: #aaa;
            font-size: 13px;
            margin-right: 15px;
        }}
        .actions {{
            display: flex;
            gap: 10px;
        }}
        button {{
            background-color: #f44336;
            color: white;
            border: none;
            padding: 10px;
            cursor: pointer;
            border-radius: 5px;
        }}
        button:hover {{
            background-color: #d32f2f;
        }}
    </style>
</head>
<body>
    <div class="add-page">
        <input type="text" id="newPageName" placeholder="New Page Name" />
        <button onclick="addPage()">Add Page</button>
    </div>
    <div class="page-list">{page_links}
    </div>

    <script>
        function addPage() {{
            const pageName = document.getElementById('newPageName').value;
            if (pageName) {{
                fetch('/addPage', {{
                    method: 'POST',
                    headers: {{ 'Content-Type': 'application/json' }},
                    body: JSON.stringify({{ pageName }})
                }})
                .then(response => {{
                    if (!response.ok) {{
                        throw new Error('Error adding page');
                    }}
                    return response.text();
                }})
                .then(() => window.location.reload())
                .catch(error => console.error(error));
            }}
        }}

        function confirmDelete(pageName) {{
            const confirmed = confirm("Are you sure you want to delete this page?");
            if (confirmed) {{
                removePage(pageName);
            }}
        }}

        function removePage(pageName) {{
            fetch('/removePage/' + encodeURIComponent(pageName), {{ method: 'DELETE' }})
                .then(() => window.location.reload())
                .catch(error => console.error('Error:', error));
        }}

        function renamePage(pageName) {{
            const newName = prompt("Enter new name for the page:", pageName);
            if (newName && newName !== pageName) {{
                fetch('/renamePage', {{
                    method: 'POST',
                    headers: {{ 'Content-Type': 'application/json' }},
                    body: JSON.stringify({{ oldName: pageName, newName: newName }})
                }})
                .then(() => window.location.reload())
                .catch(error => console.error('Error:', error));
            }}
        }}
    </script>
</body>
</html>"#
    )
}

/// Render the per-page editor: read-only textarea populated by a client
/// fetch of the raw note file, with edit/save/export/back controls.
pub fn render_editor(page_name: &str) -> String {
    let title = escape_html(page_name);
    let js_name = escape_js(page_name);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body, html {{
            height: 100%;
            font-family: Arial, sans-serif;
            display: flex;
            flex-direction: column;
        }}
        .buttons {{
            display: flex;
            justify-content: flex-start;
            padding: 10px;
            background-color: #f0f0f0;
        }}
        button {{
            padding: 10px 20px;
            margin-right: 10px;
            font-size: 16px;
            cursor: pointer;
        }}
        textarea {{
            flex-grow: 1;
            border: 2px solid gray;
            padding: 10px;
            font-size: 16px;
            width: 100%;
            resize: none;
            outline: none;
            box-sizing: border-box;
        }}
    </style>
</head>
<body>
    <div class="buttons">
        <button id="editButton" onclick="editNote()">Edit</button>
        <button id="saveButton" onclick="saveNote()">Save</button>
        <button onclick="exportNote()">Export</button>
        <button onclick="window.location.href='/'">Back</button>
    </div>

    <textarea id="notepad" readonly></textarea>

    <script>
        const pageName = '{js_name}';

        fetch('/notes/' + encodeURIComponent(pageName) + '.txt')
            .then(response => response.text())
            .then(data => {{ document.getElementById('notepad').value = data; }});

        function editNote() {{
            document.getElementById('notepad').removeAttribute('readonly');
            document.getElementById('editButton').disabled = true;
        }}

        function saveNote() {{
            const note = document.getElementById('notepad').value;
            fetch('/save/' + encodeURIComponent(pageName), {{
                method: 'POST',
                headers: {{ 'Content-Type': 'application/json' }},
                body: JSON.stringify({{ content: note }})
            }}).then(() => {{
                document.getElementById('notepad').setAttribute('readonly', 'true');
                document.getElementById('editButton').disabled = false;
                alert('Note saved!');
            }});
        }}

        function exportNote() {{
            const note = document.getElementById('notepad').value;
            const blob = new Blob([note], {{ type: 'text/plain' }});
            const link = document.createElement('a');
            link.href = URL.createObjectURL(blob);
            link.download = pageName + '.txt';
            link.click();
        }}
    </script>
</body>
</html>"#
    )
}
