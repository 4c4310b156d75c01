//! Identifier mangling for the generated C.

/// Maps a source identifier to a valid, collision-resistant C identifier.
///
/// Any byte outside `[A-Za-z0-9_]` is replaced by `__u<codepoint>`; the
/// sentinel prefixes `__u` and `__i` occurring in the source name are
/// themselves escaped to `__uE`/`__iE` first, so a hand-written `__u1234`
/// can never collide with an escape this function produces. `main` is
/// reserved for the generated entry point and maps to `__smain`.
pub fn mangle(name: &str) -> String {
    if name == "main" {
        return "__smain".to_string();
    }

    let escaped = name.replace("__u", "__uE").replace("__i", "__iE");

    let mut out = String::with_capacity(escaped.len());
    for (i, c) in escaped.chars().enumerate() {
        let plain = c.is_ascii_alphanumeric() || c == '_';
        if plain && !(i == 0 && c.is_ascii_digit()) {
            out.push(c);
        } else {
            out.push_str(&format!("__u{}", c as u32));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifier_is_untouched() {
        assert_eq!(mangle("helper"), "helper");
    }

    #[test]
    fn main_is_reserved() {
        assert_eq!(mangle("main"), "__smain");
    }

    #[test]
    fn non_ascii_operator_is_escaped() {
        assert_eq!(mangle("+"), "__u43");
    }

    #[test]
    fn leading_digit_is_escaped() {
        assert_eq!(mangle("1x"), "__u49x");
    }

    #[test]
    fn existing_sentinel_prefix_is_escaped_to_avoid_collision() {
        // Without the escape this would read identically to the mangling
        // of a name containing the character with codepoint 1.
        assert_eq!(mangle("__u1"), "__uE1");
        assert_ne!(mangle("__u1"), mangle("\u{1}"));
    }
}
