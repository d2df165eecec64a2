//! Identifier case conversion used when naming endpoints.
//!
//! Both conversions insert a separator before an ASCII capital that starts a
//! capitalized word (`getHTTPResponse` -> `get-http-response`, `v1.Foo` ->
//! `v1.-foo`) and between an ASCII lower-case letter or digit and an ASCII
//! capital. Spaces, hyphens and underscores all become the separator, runs of
//! it collapse to one, and the result is lower-cased. Non-ASCII letters never
//! mark a word boundary (`getÉtat` -> `getétat`).

/// Convert an identifier to kebab case (`get_output` -> `get-output`).
pub fn to_kebab_case(ident: &str) -> String {
    convert(ident, '-')
}

/// Convert an identifier to snake case (`get-output` -> `get_output`).
pub fn to_snake_case(ident: &str) -> String {
    convert(ident, '_')
}

fn convert(ident: &str, sep: char) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' || c == '-' || c == '_' {
            push_sep(&mut out, sep);
            continue;
        }

        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let starts_word = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let after_word = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            if starts_word || after_word {
                push_sep(&mut out, sep);
            }
        }

        out.extend(c.to_lowercase());
    }

    out
}

/// Push `sep` unless the output already ends with one.
fn push_sep(out: &mut String, sep: char) {
    if !out.ends_with(sep) {
        out.push(sep);
    }
}
