pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Joins list-valued header entries the way browsers print them, skipping blanks.
pub(crate) fn join_header_values<S: AsRef<str>>(values: &[S]) -> Option<String> {
    let entries = values
        .iter()
        .map(|value| value.as_ref().trim())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>();

    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
