//! Terminal highlighting for generated commands

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const BOLD_YELLOW: &str = "\x1b[1;33m";

/// Format curl command with syntax highlighting for terminal
///
/// `curl` is bold yellow, flags are cyan and quoted arguments are green.
/// Removing the escape codes gives back the input unchanged.
pub fn format_curl_pretty(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() * 2);
    let mut rest = cmd;

    if let Some(tail) = cmd.strip_prefix("curl") {
        result.push_str(BOLD_YELLOW);
        result.push_str("curl");
        result.push_str(RESET);
        rest = tail;
    }

    let mut chars = rest.chars().peekable();
    let mut at_token_start = true;

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' if at_token_start => {
                // Quoted argument; inside double quotes a backslash escapes the next char
                result.push_str(GREEN);
                result.push(c);
                while let Some(inner) = chars.next() {
                    result.push(inner);
                    if c == '"' && inner == '\\' {
                        if let Some(escaped) = chars.next() {
                            result.push(escaped);
                        }
                    } else if inner == c {
                        break;
                    }
                }
                result.push_str(RESET);
                at_token_start = false;
            }
            '-' if at_token_start => {
                result.push_str(CYAN);
                result.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '-' || next == '.' {
                        result.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                result.push_str(RESET);
                at_token_start = false;
            }
            c if c.is_whitespace() => {
                result.push(c);
                at_token_start = true;
            }
            _ => {
                result.push(c);
                at_token_start = false;
            }
        }
    }

    result
}
