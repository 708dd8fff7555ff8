//! Conversion between CSS kebab-case property names and the camelCase keys
//! used in style maps.

/// `flex-direction` -> `flexDirection`, `-webkit-box-flex` -> `WebkitBoxFlex`.
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// `flexDirection` -> `flex-direction`, `WebkitBoxFlex` -> `-webkit-box-flex`,
/// `msFlex` -> `-ms-flex`.
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_to_camel() {
        assert_eq!(kebab_to_camel("flex-direction"), "flexDirection");
        assert_eq!(kebab_to_camel("border-top-width"), "borderTopWidth");
        assert_eq!(kebab_to_camel("width"), "width");
        assert_eq!(kebab_to_camel("-webkit-box-flex"), "WebkitBoxFlex");
    }

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("flexDirection"), "flex-direction");
        assert_eq!(camel_to_kebab("borderTopWidth"), "border-top-width");
        assert_eq!(camel_to_kebab("WebkitBoxFlex"), "-webkit-box-flex");
        assert_eq!(camel_to_kebab("msFlex"), "-ms-flex");
    }

    #[test]
    fn test_inverse_for_standard_names() {
        for name in ["align-self", "row-gap", "aspect-ratio", "top"] {
            assert_eq!(camel_to_kebab(&kebab_to_camel(name)), name);
        }
    }
}
