//! Decomposition of demangled Rust symbol paths.
//!
//! Symbols arrive with the hash suffix already removed (alternate `Display` of
//! [`backtrace::SymbolName`]), for example:
//!
//! - `app::net::connect`
//! - `app::net::Server::start`
//! - `<app::net::Server as app::Service>::call`
//! - `alloc::vec::Vec<T,A>::push`
//! - `app::net::connect::{{closure}}`

/// Module path, `Self` type and function name recovered from a symbol.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct SymbolPath {
    pub(crate) module: Vec<String>,
    pub(crate) type_name: Option<String>,
    pub(crate) function: Option<String>,
}

impl SymbolPath {
    pub(crate) fn parse(symbol: &str) -> Self {
        let mut segments: Vec<&str> = split_top_level(symbol.trim(), "::")
            .into_iter()
            .filter(|segment| !segment.is_empty() && !is_anonymous_scope(segment))
            .collect();

        let Some(function) = segments.pop() else {
            return Self::default();
        };
        let function = if is_qualified(function) {
            None
        } else {
            Some(strip_generics(function).to_owned())
        };

        if let Some(first) = segments.first().copied().filter(|s| is_qualified(s)) {
            let (module, type_name) = split_self_type(first);
            return Self {
                module,
                type_name,
                function,
            };
        }

        let type_name = segments
            .last()
            .map(|segment| strip_generics(segment))
            .filter(|segment| looks_like_type(segment))
            .map(str::to_owned);
        if type_name.is_some() {
            segments.pop();
        }

        Self {
            module: segments
                .into_iter()
                .map(|segment| strip_generics(segment).to_owned())
                .collect(),
            type_name,
            function,
        }
    }
}

/// `{{closure}}`, `{{constant}}`, `{closure#0}` and similar compiler-generated
/// scopes that are not named functions.
fn is_anonymous_scope(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

fn is_qualified(segment: &str) -> bool {
    segment.starts_with('<') && segment.ends_with('>')
}

/// UpperCamelCase segments name types; modules and functions are snake_case.
fn looks_like_type(segment: &str) -> bool {
    segment.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

fn strip_generics(segment: &str) -> &str {
    if segment.starts_with('<') {
        return segment;
    }
    segment.find('<').map_or(segment, |index| &segment[..index])
}

/// Splits `<path::Type as path::Trait>` (or `<path::Type>`) into the module
/// path and type name of the `Self` type.
fn split_self_type(qualified: &str) -> (Vec<String>, Option<String>) {
    let inner = &qualified[1..qualified.len() - 1];
    let self_ty = split_top_level(inner, " as ")
        .into_iter()
        .next()
        .unwrap_or(inner);
    let self_ty = self_ty
        .trim_start_matches(['&', '*'])
        .trim_start_matches("mut ")
        .trim_start_matches("const ")
        .trim_start_matches("dyn ")
        .trim_start_matches("impl ")
        .trim();

    if !self_ty.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        return (Vec::new(), None);
    }

    let mut path: Vec<String> = split_top_level(self_ty, "::")
        .into_iter()
        .map(|segment| strip_generics(segment).to_owned())
        .collect();
    let type_name = path.pop();
    (path, type_name)
}

/// Splits `text` on `separator` wherever it appears outside `<...>`, `(...)`
/// and `[...]` groups.
fn split_top_level<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut previous = '\0';
    let mut skip_until = 0;

    for (index, c) in text.char_indices() {
        if index < skip_until {
            previous = c;
            continue;
        }
        match c {
            '<' | '(' | '[' => depth += 1,
            // `->` in function pointer types is not a closing bracket.
            '>' if previous == '-' => {}
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 && text[index..].starts_with(separator) => {
                parts.push(&text[start..index]);
                start = index + separator.len();
                skip_until = start;
            }
            _ => {}
        }
        previous = c;
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(module: &[&str], type_name: Option<&str>, function: Option<&str>) -> SymbolPath {
        SymbolPath {
            module: module.iter().map(ToString::to_string).collect(),
            type_name: type_name.map(str::to_owned),
            function: function.map(str::to_owned),
        }
    }

    #[test]
    fn free_function() {
        assert_eq!(
            SymbolPath::parse("app::net::connect"),
            expected(&["app", "net"], None, Some("connect"))
        );
    }

    #[test]
    fn inherent_method() {
        assert_eq!(
            SymbolPath::parse("app::net::Server::start"),
            expected(&["app", "net"], Some("Server"), Some("start"))
        );
    }

    #[test]
    fn trait_method_uses_self_type() {
        assert_eq!(
            SymbolPath::parse("<app::net::Server as app::Service>::call"),
            expected(&["app", "net"], Some("Server"), Some("call"))
        );
    }

    #[test]
    fn qualified_inherent_method() {
        assert_eq!(
            SymbolPath::parse("<app::Widget>::render"),
            expected(&["app"], Some("Widget"), Some("render"))
        );
    }

    #[test]
    fn generic_arguments_are_stripped() {
        assert_eq!(
            SymbolPath::parse("alloc::vec::Vec<T,A>::push"),
            expected(&["alloc", "vec"], Some("Vec"), Some("push"))
        );
        assert_eq!(
            SymbolPath::parse("<app::Wrapper<alloc::string::String> as core::fmt::Display>::fmt"),
            expected(&["app"], Some("Wrapper"), Some("fmt"))
        );
    }

    #[test]
    fn closures_are_attributed_to_enclosing_function() {
        assert_eq!(
            SymbolPath::parse("app::net::connect::{{closure}}::{{closure}}"),
            expected(&["app", "net"], None, Some("connect"))
        );
        assert_eq!(
            SymbolPath::parse("app::Server::start::{closure#0}"),
            expected(&["app"], Some("Server"), Some("start"))
        );
    }

    #[test]
    fn non_function_scope_has_no_function_name() {
        assert_eq!(SymbolPath::parse("{{constant}}"), expected(&[], None, None));
    }

    #[test]
    fn bare_symbol_has_no_module() {
        assert_eq!(SymbolPath::parse("main"), expected(&[], None, Some("main")));
    }

    #[test]
    fn reference_self_types_are_unwrapped() {
        assert_eq!(
            SymbolPath::parse("<&app::Widget as core::fmt::Debug>::fmt"),
            expected(&["app"], Some("Widget"), Some("fmt"))
        );
    }

    #[test]
    fn non_path_self_types_have_no_module_or_type() {
        assert_eq!(
            SymbolPath::parse("<[u8] as core::fmt::Debug>::fmt"),
            expected(&[], None, Some("fmt"))
        );
    }

    #[test]
    fn function_pointer_arrows_do_not_close_groups() {
        assert_eq!(
            split_top_level("<fn() -> u8 as app::Call>::call", "::"),
            ["<fn() -> u8 as app::Call>", "call"]
        );
    }

    #[test]
    fn empty_symbol_yields_nothing() {
        assert_eq!(SymbolPath::parse(""), SymbolPath::default());
    }
}
