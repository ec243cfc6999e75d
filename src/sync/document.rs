//! The initial HTML document a surface loads before any patch arrives.

use crate::widget::markup::{escape_attr, escape_text};

use super::patch::STYLESHEET_LINK_ID;

/// Icon font used by [`Icon`](crate::widgets::Icon).
pub const ICON_FONT_HREF: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";

/// Page-side half of the callback bridge. Widgets call `handleClick(name)`
/// (or `handleClickOnTap(name, index)` for list items); the request travels
/// as JSON through the host's IPC channel and is decoded by
/// [`BridgeRequest`](crate::bridge::BridgeRequest).
pub const BRIDGE_SCRIPT: &str = r#"function weftSend(callback, args) {
  var message = JSON.stringify({ callback: callback, args: args });
  if (window.ipc && window.ipc.postMessage) {
    window.ipc.postMessage(message);
  } else {
    console.error('weft: no ipc channel for ' + message);
  }
}
function handleClick(callback) { weftSend(callback, []); }
function handleClickOnTap(callback, index) { weftSend(callback, [index]); }"#;

/// A complete HTML document around `body`.
pub fn html_document(title: &str, stylesheet_href: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"{ICON_FONT_HREF}\">\n\
         <link id=\"{STYLESHEET_LINK_ID}\" type=\"text/css\" rel=\"stylesheet\" href=\"{href}\">\n\
         <script>\n{BRIDGE_SCRIPT}\n</script>\n\
         </head>\n\
         <body style=\"margin: 0;\">\n{body}\n</body>\n\
         </html>\n",
        title = escape_text(title),
        href = escape_attr(stylesheet_href),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_links_versioned_stylesheet() {
        let doc = html_document("Demo <1>", "styles.css?v=1", "<p id='id_1'>hi</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Demo &lt;1&gt;</title>"));
        assert!(doc.contains(
            "<link id=\"weft-stylesheet\" type=\"text/css\" rel=\"stylesheet\" href=\"styles.css?v=1\">"
        ));
        assert!(doc.contains("font-awesome/4.7.0"));
        assert!(doc.contains("function handleClick(callback)"));
        assert!(doc.contains("<p id='id_1'>hi</p>"));
    }
}
