// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Types ---------------- */

/// One decoded data line: header name → cell value, in header order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    /// Value under `header`. First match wins when a header repeats.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    /// Cell values only, in header order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }
}

/// A whole decoded file: ordered headers plus one `RawRow` per data line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
}

/* ---------------- Decoding ---------------- */

/// Decode comma-separated text. See [`decode_with`].
pub fn decode(text: &str) -> RawTable {
    decode_with(text, ',')
}

/// Line-oriented decoder with quote awareness.
///
/// - a leading UTF-8 byte-order mark is dropped
/// - blank lines are skipped; the first remaining line is the header row
/// - `sep` inside a `"…"` span does not split; `""` inside quotes is a literal quote
/// - short rows are padded with "", long rows are cut at the header count
/// - an unterminated quote is closed at end of line
pub fn decode_with(text: &str, sep: char) -> RawTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return RawTable::default();
    };
    let headers = split_line(header_line, sep);

    let rows = lines
        .map(|line| {
            let mut cells = split_line(line, sep).into_iter();
            let fields = headers
                .iter()
                .map(|h| (h.clone(), cells.next().unwrap_or_default()))
                .collect();
            RawRow { fields }
        })
        .collect();

    RawTable { headers, rows }
}

/// Split one line into trimmed fields (quote-toggle state machine).
pub fn split_line(line: &str, sep: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                out.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(ch),
        }
    }

    // End of line closes any open quote.
    out.push(take(&mut field).trim().to_string());
    out
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows (optionally with a header line) as CSV/TSV.
pub fn rows_to_string<S: AsRef<str>>(headers: Option<&[S]>, rows: &[Vec<S>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_line_handles_escaped_quotes() {
        assert_eq!(split_line(r#"a,"say ""hi""",c"#, ','), vec!["a", r#"say "hi""#, "c"]);
    }

    #[test]
    fn split_line_closes_unterminated_quote() {
        assert_eq!(split_line(r#"a,"b,c"#, ','), vec!["a", "b,c"]);
    }

    #[test]
    fn split_line_tab_separator() {
        assert_eq!(split_line("a\t b ,c\td", '\t'), vec!["a", "b ,c", "d"]);
    }

    #[test]
    fn write_row_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "with,comma", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"with,comma\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn rows_to_string_round_trips_through_decode() {
        let headers = ["x", "y"];
        let rows = vec![vec!["1", "a,b"], vec!["2", "c"]];
        let text = rows_to_string(Some(&headers[..]), &rows, ',');
        let table = decode(&text);
        assert_eq!(table.headers, vec!["x", "y"]);
        assert_eq!(table.rows[0].get("y"), Some("a,b"));
        assert_eq!(table.rows[1].get("x"), Some("2"));
    }
}
