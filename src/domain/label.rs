//! Raw key to display label formatting.

/// Turn a raw key (editor name, feature name) into a human-readable title.
///
/// The first character and every character immediately following a hyphen or
/// underscore is capitalized; separator runs collapse into a single space;
/// leading separators are dropped without emitting a space. All other casing
/// is left untouched, so keys like `CoC` or `nvim-lspconfig` keep their
/// interior shape. No locale awareness.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_boundary = true;

    for c in raw.chars() {
        if c == '-' || c == '_' {
            if !out.is_empty() && !at_boundary {
                out.push(' ');
            }
            at_boundary = true;
        } else if at_boundary {
            out.extend(c.to_uppercase());
            at_boundary = false;
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("in_editor_configuration", "In Editor Configuration")]
    #[case("-foo_bar", "Foo Bar")]
    #[case("auto_installer", "Auto Installer")]
    #[case("official", "Official")]
    #[case("Visual Studio Code", "Visual Studio Code")]
    #[case("CoC", "CoC")]
    #[case("nvim-lspconfig", "Nvim Lspconfig")]
    #[case("a__b--c", "A B C")]
    #[case("", "")]
    #[case("___", "")]
    fn given_raw_key_when_title_casing_then_matches_expected(
        #[case] raw: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(title_case(raw), expected);
    }
}
