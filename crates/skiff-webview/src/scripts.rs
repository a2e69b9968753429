//! Synthesized Page Scripts
//!
//! The engine's navigation primitive cannot carry a request body, so POST
//! dispatch injects a same-origin script that rebuilds the form and
//! resubmits it.

use url::form_urlencoded;
use url::Url;

/// Build a script that POSTs a urlencoded body to a URL
pub fn send_post_data(url: &Url, body: &[u8]) -> String {
    let mut fields = String::new();
    for (name, value) in form_urlencoded::parse(body) {
        fields.push_str(&format!(
            "    field = document.createElement('input');\n\
             field.setAttribute('type', 'hidden');\n\
             field.setAttribute('name', '{}');\n\
             field.setAttribute('value', '{}');\n\
             form.appendChild(field);\n",
            escape_js(&name),
            escape_js(&value),
        ));
    }

    format!(
        "(function() {{\n\
         var form = document.createElement('form');\n\
         form.setAttribute('method', 'POST');\n\
         form.setAttribute('action', '{}');\n\
         var field;\n\
         {fields}\
         document.body.appendChild(form);\n\
         form.submit();\n\
         }})()",
        escape_js(url.as_str()),
    )
}

/// Escape text for embedding in a single-quoted JS string literal
fn escape_js(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
