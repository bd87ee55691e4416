//! Highlight-language inference from tab labels.

/// Map a tab label to the syntax-highlighting language for its pane.
///
/// Labels are free text (`curl`, `PHP`, `Node.js`), matched
/// case-insensitively against a fixed table. Unrecognized labels fall back to
/// the lower-cased label itself, which lets authors use a language name
/// directly as the label.
#[must_use]
pub fn language_for_label(label: &str) -> String {
    let lower = label.trim().to_lowercase();
    let mapped = match lower.as_str() {
        "curl" | "shell" | "sh" | "bash" => "bash",
        "js" | "javascript" | "node" | "nodejs" | "node.js" => "javascript",
        "ts" | "typescript" => "typescript",
        "py" | "python" => "python",
        "rb" | "ruby" => "ruby",
        "golang" => "go",
        "c#" | "csharp" | ".net" | "dotnet" => "csharp",
        "query" | "mutation" | "graphql" => "graphql",
        "response" | "json" => "json",
        "flutter" | "dart" => "dart",
        "http" | "request" => "http",
        _ => return lower,
    };
    mapped.to_owned()
}
