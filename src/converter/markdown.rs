use scraper::{ElementRef, Node};

pub const DEFAULT_WIDTH: usize = 80;

/// Markdown rendering of puzzle HTML: ATX headings, wrapped paragraphs,
/// fenced code blocks and backslash line breaks.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    width: usize,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl MarkdownRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn render(&self, element: ElementRef) -> String {
        let mut blocks = Vec::new();
        self.blocks(element, &mut blocks);
        blocks.join("\n\n")
    }

    fn blocks(&self, element: ElementRef, out: &mut Vec<String>) {
        let mut pending = String::new();

        for child in element.children() {
            match child.value() {
                Node::Text(text) => pending.push_str(&collapse(text)),
                Node::Element(_) => {
                    let Some(child) = ElementRef::wrap(child) else {
                        continue;
                    };
                    let name = child.value().name();
                    if is_block(name) {
                        self.flush(&mut pending, out);
                        self.block(child, out);
                    } else {
                        pending.push_str(&inline(child));
                    }
                }
                _ => {}
            }
        }

        self.flush(&mut pending, out);
    }

    fn block(&self, element: ElementRef, out: &mut Vec<String>) {
        let name = element.value().name();
        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name[1..].parse::<usize>().unwrap_or(1);
                let text = inline(element);
                out.push(format!("{} {}", "#".repeat(level), text.split_whitespace().collect::<Vec<_>>().join(" ")));
            }
            "p" => {
                let text = wrap(&inline(element), self.width, "");
                if !text.is_empty() {
                    out.push(text);
                }
            }
            "pre" => {
                let code: String = element.text().collect();
                out.push(format!("```\n{}\n```", code.trim_end_matches('\n')));
            }
            "ul" | "ol" => {
                let ordered = name == "ol";
                let items: Vec<String> = element
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|li| li.value().name() == "li")
                    .enumerate()
                    .map(|(i, li)| {
                        let marker = if ordered {
                            format!("{}. ", i + 1)
                        } else {
                            "- ".to_string()
                        };
                        let indent = " ".repeat(marker.len());
                        let body = wrap(&inline(li), self.width.saturating_sub(marker.len()), &indent);
                        format!("{}{}", marker, body)
                    })
                    .collect();
                if !items.is_empty() {
                    out.push(items.join("\n"));
                }
            }
            "blockquote" => {
                let inner = self.render(element);
                let quoted = inner
                    .lines()
                    .map(|line| if line.is_empty() { ">".to_string() } else { format!("> {}", line) })
                    .collect::<Vec<_>>()
                    .join("\n");
                out.push(quoted);
            }
            "hr" => out.push("---".to_string()),
            "script" | "style" => {}
            _ => self.blocks(element, out),
        }
    }

    fn flush(&self, pending: &mut String, out: &mut Vec<String>) {
        let text = wrap(pending, self.width, "");
        if !text.is_empty() {
            out.push(text);
        }
        pending.clear();
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "h1" | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "p"
            | "pre"
            | "ul"
            | "ol"
            | "blockquote"
            | "hr"
            | "div"
            | "section"
            | "article"
            | "main"
            | "script"
            | "style"
    )
}

fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            space = true;
        } else {
            if space {
                out.push(' ');
                space = false;
            }
            out.push(c);
        }
    }
    if space {
        out.push(' ');
    }
    out
}

/// Inline markdown for the children of `element`.
fn inline(element: ElementRef) -> String {
    let mut out = String::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&collapse(text)),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    out.push_str(&inline_element(child));
                }
            }
            _ => {}
        }
    }
    out
}

fn inline_element(element: ElementRef) -> String {
    match element.value().name() {
        "code" => {
            let code: String = element.text().collect();
            if code.is_empty() {
                String::new()
            } else if code.contains('`') {
                format!("`` {} ``", code)
            } else {
                format!("`{}`", code)
            }
        }
        "em" | "i" => surround(&inline(element), "*"),
        "strong" | "b" => surround(&inline(element), "**"),
        "a" => {
            let text = inline(element);
            match element.value().attr("href") {
                Some(href) if !text.trim().is_empty() => format!("[{}]({})", text.trim(), href),
                _ => text,
            }
        }
        "br" => "\\\n".to_string(),
        "script" | "style" => String::new(),
        _ => inline(element),
    }
}

/// Wrap `text` in emphasis markers, keeping surrounding spaces outside.
fn surround(text: &str, marker: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return text.to_string();
    }
    let lead = if text.starts_with(' ') { " " } else { "" };
    let trail = if text.ends_with(' ') { " " } else { "" };
    format!("{}{}{}{}{}", lead, marker, trimmed, marker, trail)
}

/// Greedy word wrap. Hard breaks (`\` + newline) are kept; continuation
/// lines get `indent`.
fn wrap(text: &str, width: usize, indent: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    let segments: Vec<&str> = text.split("\\\n").collect();
    let last = segments.len().saturating_sub(1);
    for (i, segment) in segments.iter().enumerate() {
        let mut line = String::new();
        for word in segment.split_whitespace() {
            if !line.is_empty() && line.len() + 1 + word.len() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if i < last {
            line.push('\\');
        }
        if !line.is_empty() || i < last {
            lines.push(line);
        }
    }

    lines.join(&format!("\n{}", indent)).trim().to_string()
}
