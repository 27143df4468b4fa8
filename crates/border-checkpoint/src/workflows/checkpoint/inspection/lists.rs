/// Split a bulletin list such as `"Antegria, Impor and Kolechia"` into trimmed entries.
///
/// The standalone word `and` acts as a separator, and a separator followed only by
/// whitespace and another separator (`"A, and B"`) collapses into one. Entries are not
/// otherwise validated: `"A,,B"` keeps its empty middle entry.
pub fn parse_list(list: &str) -> Vec<String> {
    collapse_separators(&replace_conjunctions(list))
        .split(',')
        .map(|entry| entry.trim().to_string())
        .collect()
}

fn replace_conjunctions(list: &str) -> String {
    let mut out = String::with_capacity(list.len());
    let mut cursor = 0;

    for (index, word) in list.match_indices("and") {
        let end = index + word.len();
        let standalone = !list[..index]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric)
            && !list[end..].chars().next().is_some_and(char::is_alphanumeric);

        if standalone {
            out.push_str(&list[cursor..index]);
            out.push(',');
            cursor = end;
        }
    }

    out.push_str(&list[cursor..]);
    out
}

fn collapse_separators(list: &str) -> String {
    let mut out = String::with_capacity(list.len());
    let mut rest = list;

    while let Some(index) = rest.find(',') {
        out.push_str(&rest[..=index]);
        let after = &rest[index + 1..];
        let gap = after.len() - after.trim_start().len();
        rest = if gap > 0 && after[gap..].starts_with(',') {
            &after[gap + 1..]
        } else {
            after
        };
    }

    out.push_str(rest);
    out
}
