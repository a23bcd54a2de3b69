//! Name derivation for action-type strings.

/// Upper snake case: `helloThere` → `HELLO_THERE`, `JSONViewer` → `JSON_VIEWER`.
///
/// Word boundaries are separators (anything not alphanumeric), lower-to-upper
/// transitions, the last capital of an acronym run followed by a lowercase
/// letter, and letter/digit transitions.
pub fn snake_case(name: &str) -> String {
    words(name)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Default plural: the name with an `s` appended, unless overridden.
pub fn plural_form(name: &str, override_form: Option<&str>) -> String {
    match override_form {
        Some(plural) => plural.to_string(),
        None => format!("{name}s"),
    }
}

fn words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (index, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(index + 1).copied();
            let boundary = (prev.is_lowercase() && ch.is_uppercase())
                || (prev.is_uppercase()
                    && ch.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()))
                || (prev.is_alphabetic() && ch.is_numeric())
                || (prev.is_numeric() && ch.is_alphabetic());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
