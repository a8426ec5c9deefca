//! Reader for the `name = value` assignments embedded in GMX `code` fields.
//
//  Grammar (informal, scanned not tokenised):
//
//      assignment ::= Ident WS* '=' WS* Value
//      Ident      ::= [A-Za-z0-9_]+
//      Value      ::= anything up to the next CR / LF
//
//  Anything between assignments is ignored. Nothing here can fail: a value
//  that is not a number is kept as its trimmed text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{CodeValue, CodeVars};

static ASSIGN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*=\s*([^\r\n]+)").expect("valid regex"));

/// Undo the double escaping of line breaks found in exported GMX files.
pub fn unescape(code: &str) -> String {
    code.replace("&#13;", "\r").replace("&#10;", "\n")
}

/// Coerce one trimmed value: dotted text is a float, otherwise an integer,
/// falling back to the text itself.
pub fn coerce(value: &str) -> CodeValue {
    let value = value.trim();
    if value.contains('.') {
        value
            .parse::<f64>()
            .map(CodeValue::Float)
            .unwrap_or_else(|_| CodeValue::Str(value.to_string()))
    } else {
        value
            .parse::<i64>()
            .map(CodeValue::Int)
            .unwrap_or_else(|_| CodeValue::Str(value.to_string()))
    }
}

/// Collect every assignment in `code`. Empty or missing input yields an
/// empty map; the last assignment to a name wins.
pub fn parse_code_vars(code: Option<&str>) -> CodeVars {
    let mut vars = CodeVars::new();
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return vars;
    };

    let code = unescape(code);
    for caps in ASSIGN_RE.captures_iter(&code) {
        let name = caps[1].trim().to_string();
        vars.insert(name, coerce(&caps[2]));
    }
    vars
}
