use crate::domain::model::{ProbeOutcome, ProbeView, RawResponse, ServiceRegistry};
use std::io::{self, Write};

pub const PROBLEM_MARKER: &str = "problem";
pub const DONE_MARKER: &str = "DONE.";

/// 以 bytes literal 形式呈現原始 body。
///
/// 預設用 `'` 包起來；body 含 `'` 但不含 `"` 時改用 `"`。只跳脫反斜線、
/// 外層引號、`\t` `\n` `\r`，其餘不可列印的位元組寫成 `\xNN`。
pub fn bytes_literal(body: &[u8]) -> String {
    let quote = if body.contains(&b'\'') && !body.contains(&b'"') {
        '"'
    } else {
        '\''
    };

    let mut literal = String::with_capacity(body.len() + 3);
    literal.push('b');
    literal.push(quote);
    for &byte in body {
        match byte {
            b'\\' => literal.push_str("\\\\"),
            b'\t' => literal.push_str("\\t"),
            b'\n' => literal.push_str("\\n"),
            b'\r' => literal.push_str("\\r"),
            b if b as char == quote => {
                literal.push('\\');
                literal.push(quote);
            }
            0x20..=0x7e => literal.push(byte as char),
            _ => literal.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    literal.push(quote);
    literal
}

pub fn write_header<W: Write>(out: &mut W, registry: &ServiceRegistry) -> io::Result<()> {
    for (service, url) in registry.entries() {
        writeln!(out, "{}={}", service.label(), url)?;
    }
    writeln!(out)
}

pub fn write_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))
}

fn write_response<W: Write>(
    out: &mut W,
    url: &str,
    response: &RawResponse,
    text: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "url={}", url)?;
    writeln!(out, "data.status_code={}", response.status)?;
    writeln!(out, "{}", bytes_literal(&response.body))?;
    if let Some(text) = text {
        writeln!(out, "data.text={}", text)?;
    }
    Ok(())
}

pub fn write_outcome<W: Write>(
    out: &mut W,
    view: ProbeView,
    outcome: &ProbeOutcome,
) -> io::Result<()> {
    match outcome {
        ProbeOutcome::Completed(result) => {
            let text = view.text.then_some(result.text.as_str());
            write_response(out, &result.url, &result.response, text)?;
            if let Some(payload) = &result.payload {
                writeln!(out, "{}", payload)?;
            }
        }
        ProbeOutcome::Failed {
            url,
            response,
            error,
        } => {
            if let Some(response) = response {
                let text = view.text.then(|| response.text());
                write_response(out, url, response, text.as_deref())?;
            }
            writeln!(out, "{}", PROBLEM_MARKER)?;
            writeln!(out, "{}", error)?;
        }
    }

    // 每個區段後空兩行
    writeln!(out)?;
    writeln!(out)
}

pub fn write_done<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", DONE_MARKER)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProbeResult;
    use crate::utils::error::ProbeError;

    fn render(view: ProbeView, outcome: &ProbeOutcome) -> String {
        let mut out = Vec::new();
        write_outcome(&mut out, view, outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bytes_literal_escapes() {
        assert_eq!(bytes_literal(br#"{"ok":true}"#), r#"b'{"ok":true}'"#);
        assert_eq!(bytes_literal(b"a\nb\r\t"), r"b'a\nb\r\t'");
        assert_eq!(bytes_literal(br"C:\tmp"), r"b'C:\\tmp'");
        assert_eq!(bytes_literal(&[0xc3, 0xa9, 0x00, 0x7f]), r"b'\xc3\xa9\x00\x7f'");
        assert_eq!(bytes_literal(b""), "b''");
    }

    #[test]
    fn test_bytes_literal_quote_selection() {
        // 只有單引號時改用雙引號包起來
        assert_eq!(bytes_literal(b"it's"), r#"b"it's""#);
        // 兩種引號都有時維持單引號並跳脫單引號
        assert_eq!(bytes_literal(br#"it's "ok""#), r#"b'it\'s "ok"'"#);
    }

    #[test]
    fn test_header_lists_registry() {
        let mut out = Vec::new();
        write_header(&mut out, &ServiceRegistry::uniform("http://x")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a=http://x\nb=http://x\nc=http://x\nd=http://x\n\n"
        );
    }

    #[test]
    fn test_title_underline_matches_length() {
        let mut out = Vec::new();
        write_title(&mut out, "testing adding cost item").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "testing adding cost item\n------------------------\n"
        );
    }

    #[test]
    fn test_completed_with_json() {
        let outcome = ProbeOutcome::Completed(ProbeResult {
            url: "http://x/api/about/".to_string(),
            response: RawResponse::new(200, b"[]".to_vec()),
            text: "[]".to_string(),
            payload: Some(serde_json::json!([])),
        });

        assert_eq!(
            render(ProbeView::JSON, &outcome),
            "url=http://x/api/about/\ndata.status_code=200\nb'[]'\ndata.text=[]\n[]\n\n\n"
        );
    }

    #[test]
    fn test_raw_view_skips_text() {
        let outcome = ProbeOutcome::Completed(ProbeResult {
            url: "http://x/api/add/".to_string(),
            response: RawResponse::new(201, b"{}".to_vec()),
            text: "{}".to_string(),
            payload: None,
        });

        let rendered = render(ProbeView::RAW, &outcome);
        assert!(rendered.contains("data.status_code=201\n"));
        assert!(!rendered.contains("data.text="));
    }

    #[test]
    fn test_failure_without_response() {
        let outcome = ProbeOutcome::Failed {
            url: "http://x/api/report/".to_string(),
            response: None,
            error: ProbeError::transport("connection refused"),
        };

        assert_eq!(
            render(ProbeView::TEXT, &outcome),
            "problem\nTransport error: connection refused\n\n\n"
        );
    }

    #[test]
    fn test_decode_failure_prints_response_first() {
        let error = serde_json::from_slice::<serde_json::Value>(b"<html>").unwrap_err();
        let outcome = ProbeOutcome::Failed {
            url: "http://x/api/about/".to_string(),
            response: Some(RawResponse::new(502, b"<html>".to_vec())),
            error: ProbeError::Json(error),
        };

        let rendered = render(ProbeView::JSON, &outcome);
        let status_at = rendered.find("data.status_code=502").unwrap();
        let text_at = rendered.find("data.text=<html>").unwrap();
        let problem_at = rendered.find("problem\nJSON decode error").unwrap();
        assert!(status_at < text_at && text_at < problem_at);
    }
}
