//! Snapshot tests for the token stream produced by the scanner.

use markup_scanner::{ScanErrorKind, Scanner, TokenKind};

fn describe(source: &str) -> String {
    let mut scanner = Scanner::new(source);
    let mut lines = Vec::new();
    loop {
        let kind = scanner.next_kind().expect("scan failed");
        let line = match kind {
            TokenKind::Eof => break,
            TokenKind::Text | TokenKind::Comment | TokenKind::Doctype => {
                format!("{:?} {:?}", kind, scanner.text())
            }
            TokenKind::StartTag | TokenKind::SelfClosingTag => {
                let name = scanner.tag_name().clone();
                format!("{:?} {} {:?}", kind, name, scanner.take_attributes())
            }
            TokenKind::EndTag => format!("{:?} {}", kind, scanner.tag_name()),
        };
        lines.push(line);
    }
    lines.join("\n")
}

fn scan_snapshot(name: &str, source: &str) {
    let output = format!("Source:\n{}\n\nTokens:\n{}", source, describe(source));
    insta::assert_snapshot!(name, output);
}

#[test]
fn test_snapshot_document_tokens() {
    scan_snapshot(
        "document_tokens",
        r#"<!DOCTYPE html>
<body>
  <!-- greeting -->
  <h1 class="title big">Hello &amp; welcome</h1>
  <input type=checkbox checked>
  <button @click="Save">Go</button>
  <script type="application/x-go">
func init() {}
</script>
</body>"#,
    );
}

#[test]
fn test_every_start_tag_is_closed() {
    let source = r#"<div><ul><li>a</li><li>b<br></li></ul><p>x<img src="a.png"></p></div>"#;
    let mut scanner = Scanner::new(source);
    let mut depth = 0i32;
    loop {
        match scanner.next_kind().expect("scan failed") {
            TokenKind::StartTag => depth += 1,
            TokenKind::EndTag => depth -= 1,
            TokenKind::Eof => break,
            _ => {}
        }
        assert!(depth >= 0);
    }
    assert_eq!(depth, 0);
}

#[test]
fn test_error_reports_span() {
    let source = "<div>\n  <p class=\"x>\n</div>";
    let mut scanner = Scanner::new(source);
    assert_eq!(scanner.next_kind(), Ok(TokenKind::StartTag));
    assert_eq!(scanner.next_kind(), Ok(TokenKind::Text));
    let error = scanner.next_kind().unwrap_err();
    assert_eq!(
        error.kind,
        ScanErrorKind::UnterminatedAttributeValue {
            attribute: "class".to_string()
        }
    );
    assert_eq!(u32::from(error.span.start()), 17);
    assert_eq!(usize::from(error.span.end()), source.len());
}
