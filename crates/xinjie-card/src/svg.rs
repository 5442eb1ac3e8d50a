//! Minimal SVG document model and serializer.
//!
//! Output is self-contained (no external references) and deterministic:
//! coordinates are rounded to two decimals and elements are written in
//! insertion order.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: String,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: String,
        stroke_width: f32,
    },
    Text(Text),
}

/// A single horizontally centered text run
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub font_family: &'static str,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

impl SvgDocument {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (num(self.width), num(self.height));

        writeln!(f, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;

        for element in &self.elements {
            match element {
                Element::Rect {
                    x,
                    y,
                    width,
                    height,
                    fill,
                } => writeln!(
                    f,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" />"#,
                    num(*x),
                    num(*y),
                    num(*width),
                    num(*height),
                    escape(fill)
                )?,
                Element::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    stroke,
                    stroke_width,
                } => writeln!(
                    f,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" />"#,
                    num(*x1),
                    num(*y1),
                    num(*x2),
                    num(*y2),
                    escape(stroke),
                    num(*stroke_width)
                )?,
                Element::Text(text) => writeln!(
                    f,
                    r#"<text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}" style="font-family: {};">{}</text>"#,
                    num(text.x),
                    num(text.y),
                    num(text.font_size),
                    escape(&text.fill),
                    escape(text.font_family),
                    escape(&text.content)
                )?,
            }
        }

        f.write_str("</svg>\n")
    }
}

/// Round to two decimals and drop a trailing `.0`
fn num(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Normalize -0 so identical layouts serialize identically.
    format!("{}", rounded + 0.0)
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Not representable in XML 1.0, even as character references.
            c if c.is_control() && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(300.0), "300");
        assert_eq!(num(8.3871), "8.39");
        assert_eq!(num(-0.0), "0");
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;"
        );
        assert_eq!(escape("汉语新解"), "汉语新解");
    }

    #[test]
    fn test_document_serialization() {
        let mut doc = SvgDocument::new(400.0, 600.0);
        doc.push(Element::Rect {
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 600.0,
            fill: "#F5F1EA".to_string(),
        });
        doc.push(Element::Text(Text {
            content: "会议 & 团建".to_string(),
            x: 200.0,
            y: 60.0,
            font_size: 28.0,
            font_family: "'Times New Roman'",
            fill: "#2C2C2C".to_string(),
        }));

        let svg = doc.to_string();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 400 600""#));
        assert!(svg.contains(r##"<rect x="0" y="0" width="400" height="600" fill="#F5F1EA" />"##));
        assert!(svg.contains(">会议 &amp; 团建</text>"));
        assert!(svg.contains("font-family: &apos;Times New Roman&apos;;"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(doc.texts().count(), 1);
    }
}
