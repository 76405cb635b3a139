//! Client method naming.

/// Suffix of server-side asynchronous actions, meaningless over HTTP.
const ASYNC_SUFFIX: &str = "Async";

/// Lower-case the first character of a name.
pub fn to_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive a client method name from a server action name.
///
/// Optionally camel-cases the name, then drops a trailing `Async`. A name
/// that is nothing but the suffix is kept.
pub fn client_method_name(action: &str, camel_case: bool) -> String {
    let name = if camel_case {
        to_camel_case(action)
    } else {
        action.to_string()
    };

    match name.strip_suffix(ASYNC_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("GetHero"), "getHero");
        assert_eq!(to_camel_case("getHero"), "getHero");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_client_method_name() {
        assert_eq!(client_method_name("GetAsync", true), "get");
        assert_eq!(client_method_name("GetAsync", false), "Get");
        assert_eq!(client_method_name("PostHero", true), "postHero");
        assert_eq!(client_method_name("Async", false), "Async");
        assert_eq!(client_method_name("Async", true), "async");
    }
}
