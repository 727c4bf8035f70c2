//! Merging of utility class lists.
//!
//! Later classes win over earlier ones that style the same property, so a
//! caller can pass `w-24` to replace a component's own `w-20`.

use std::collections::HashSet;

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
    "table",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

/// Prefixes whose value alone decides the property: `w-20` and `w-24`
/// conflict, whatever the value. Longer prefixes come first.
const PLAIN_PREFIXES: &[&str] = &[
    "min-w", "max-w", "min-h", "max-h", "w", "h", "size", "px", "py", "pt", "pr", "pb", "pl", "p",
    "mx", "my", "mt", "mr", "mb", "ml", "m", "gap-x", "gap-y", "gap", "inset-x", "inset-y", "inset",
    "top", "right", "bottom", "left", "z", "opacity", "bg-clip", "bg-origin", "bg", "items",
    "justify-items", "justify-self", "justify", "rotate", "duration", "ease",
];

const ROUNDED_SIDES: &[&str] = &[
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded-tl",
    "rounded-tr",
    "rounded-br",
    "rounded-bl",
];

const BG_SIZE: &[&str] = &["auto", "cover", "contain"];
const BG_POSITION: &[&str] = &[
    "center",
    "top",
    "bottom",
    "left",
    "right",
    "left-top",
    "left-bottom",
    "right-top",
    "right-bottom",
];
const BG_REPEAT: &[&str] = &["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"];
const BG_ATTACHMENT: &[&str] = &["fixed", "local", "scroll"];

fn is_numeric_value(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '/')
}

fn is_arbitrary_length(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']') && value[1..].starts_with(|c: char| c.is_ascii_digit())
}

fn rounded_group(utility: &str) -> Option<&'static str> {
    let rest = utility.strip_prefix("rounded")?;
    if rest.is_empty() {
        return Some("rounded");
    }
    let value = rest.strip_prefix('-')?;
    let side = value.split('-').next().unwrap_or(value);
    let side_group = ROUNDED_SIDES
        .iter()
        .find(|group| group.strip_prefix("rounded-") == Some(side));
    Some(side_group.copied().unwrap_or("rounded"))
}

fn bg_group(value: &str) -> &'static str {
    if value == "none" || value.starts_with("gradient-") {
        "bg-image"
    } else if BG_SIZE.contains(&value) {
        "bg-size"
    } else if BG_POSITION.contains(&value) {
        "bg-position"
    } else if BG_REPEAT.contains(&value) {
        "bg-repeat"
    } else if BG_ATTACHMENT.contains(&value) {
        "bg-attachment"
    } else {
        "bg"
    }
}

/// Conflict group of a utility class with variants and `!` already removed.
fn class_group(utility: &str) -> Option<&'static str> {
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    if utility == "transition" || utility.starts_with("transition-") {
        return Some("transition");
    }
    if let Some(group) = rounded_group(utility) {
        return Some(group);
    }
    if let Some(value) = utility.strip_prefix("text-") {
        let group = if TEXT_SIZES.contains(&value) || is_arbitrary_length(value) {
            "text-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else {
            "text-color"
        };
        return Some(group);
    }
    if let Some(value) = utility.strip_prefix("font-") {
        let group = if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        };
        return Some(group);
    }
    if let Some(value) = utility.strip_prefix("stroke-") {
        let group = if is_numeric_value(value) || is_arbitrary_length(value) {
            "stroke-width"
        } else {
            "stroke-color"
        };
        return Some(group);
    }

    let prefix = PLAIN_PREFIXES.iter().copied().find(|prefix| {
        utility
            .strip_prefix(*prefix)
            .is_some_and(|rest| rest.starts_with('-'))
    })?;
    match prefix {
        "bg" => Some(bg_group(&utility["bg-".len()..])),
        prefix => Some(prefix),
    }
}

/// Groups a class of `group` overrides besides its own: a shorthand beats
/// the per-side classes it covers.
fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "size" => &["w", "h"],
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "rounded" => ROUNDED_SIDES,
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        _ => &[],
    }
}

/// Splits `md:hover:!p-2` into its modifier part `md:hover:!` and the
/// utility `p-2`.
fn split_modifiers(class: &str) -> (&str, &str) {
    let base = match class.rfind(':') {
        Some(idx) => &class[idx + 1..],
        None => class,
    };
    let utility = base.strip_prefix('!').unwrap_or(base);
    class.split_at(class.len() - utility.len())
}

/// Joins class lists into one space-separated string.
///
/// `None` entries are skipped, which lets callers include classes
/// conditionally. Duplicates collapse and conflicting utilities resolve in
/// favour of the later one; survivors keep the order of their last
/// occurrence.
pub fn merge_classes<'a, I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<Option<&'a str>>,
{
    let classes: Vec<&str> = tokens
        .into_iter()
        .filter_map(|token| -> Option<&'a str> { token.into() })
        .flat_map(str::split_whitespace)
        .collect();

    // walk backwards: a class survives unless a later one already claimed
    // its group under the same modifiers
    let mut claimed_groups = HashSet::new();
    let mut seen_classes = HashSet::new();
    let mut kept = Vec::with_capacity(classes.len());
    for class in classes.iter().rev() {
        let (modifiers, utility) = split_modifiers(class);
        match class_group(utility) {
            Some(group) => {
                if !claimed_groups.insert(format!("{}{}", modifiers, group)) {
                    continue;
                }
                for covered in conflicting_groups(group) {
                    claimed_groups.insert(format!("{}{}", modifiers, covered));
                }
            }
            None => {
                if !seen_classes.insert(*class) {
                    continue;
                }
            }
        }
        kept.push(*class);
    }
    kept.reverse();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_and_skips_missing_entries() {
        let merged = merge_classes([Some("relative flex"), None, Some("  p-2  ")]);
        assert_eq!(merged, "relative flex p-2");
    }

    #[test]
    fn accepts_plain_strings() {
        assert_eq!(merge_classes(["a", "b"]), "a b");
        assert_eq!(merge_classes(Vec::<&str>::new()), "");
    }

    #[test]
    fn duplicates_collapse_to_last_position() {
        assert_eq!(merge_classes(["card shadow", "border card"]), "shadow border card");
    }

    #[test]
    fn later_utility_overrides_earlier() {
        assert_eq!(merge_classes(["w-20 h-20", "w-24"]), "h-20 w-24");
        assert_eq!(merge_classes(["inline-flex items-center", "block"]), "items-center block");
        assert_eq!(merge_classes(["relative", "absolute"]), "absolute");
        assert_eq!(merge_classes(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merge_classes(["-rotate-90", "rotate-45"]), "rotate-45");
    }

    #[test]
    fn later_shorthand_overrides_sides() {
        assert_eq!(merge_classes(["px-2", "p-4"]), "p-4");
        assert_eq!(merge_classes(["mt-1 mx-2", "m-0"]), "m-0");
        assert_eq!(merge_classes(["pt-1 pl-3", "py-2"]), "pl-3 py-2");
        assert_eq!(merge_classes(["gap-x-2", "gap-4"]), "gap-4");
        assert_eq!(merge_classes(["inset-x-0 top-2", "inset-4"]), "inset-4");
        assert_eq!(merge_classes(["size-8", "w-10"]), "size-8 w-10");
        assert_eq!(merge_classes(["w-10 h-10", "size-8"]), "size-8");
        assert_eq!(merge_classes(["md:px-2", "p-4"]), "md:px-2 p-4");
    }

    #[test]
    fn rounded_corners_are_separate_groups() {
        assert_eq!(merge_classes(["rounded-lg", "rounded-t-none"]), "rounded-lg rounded-t-none");
        assert_eq!(merge_classes(["rounded-t-none", "rounded-lg"]), "rounded-lg");
        assert_eq!(merge_classes(["rounded", "rounded-md"]), "rounded-md");
        assert_eq!(
            merge_classes(["rounded-tl-md rounded-br-md", "rounded-t-lg"]),
            "rounded-br-md rounded-t-lg"
        );
        assert_eq!(merge_classes(["rounded-tl-md", "rounded-tr-md"]), "rounded-tl-md rounded-tr-md");
    }

    #[test]
    fn justify_and_background_subgroups() {
        assert_eq!(
            merge_classes(["justify-center", "justify-items-center justify-self-end"]),
            "justify-center justify-items-center justify-self-end"
        );
        assert_eq!(merge_classes(["justify-start", "justify-end"]), "justify-end");
        assert_eq!(
            merge_classes(["bg-red-500", "bg-gradient-to-r"]),
            "bg-red-500 bg-gradient-to-r"
        );
        assert_eq!(merge_classes(["bg-cover bg-red-500", "bg-contain bg-blue-500"]), "bg-contain bg-blue-500");
        assert_eq!(merge_classes(["bg-clip-text", "bg-center bg-no-repeat"]), "bg-clip-text bg-center bg-no-repeat");
    }

    #[test]
    fn text_size_and_colour_are_separate_groups() {
        assert_eq!(
            merge_classes(["text-sm text-gray-700", "text-red-500"]),
            "text-sm text-red-500"
        );
        assert_eq!(merge_classes(["text-sm", "text-lg text-center"]), "text-lg text-center");
    }

    #[test]
    fn font_weight_and_family_are_separate_groups() {
        assert_eq!(
            merge_classes(["font-medium font-sans", "font-bold"]),
            "font-sans font-bold"
        );
    }

    #[test]
    fn stroke_width_and_colour_are_separate_groups() {
        assert_eq!(
            merge_classes(["stroke-2 stroke-blue-500", "stroke-4"]),
            "stroke-blue-500 stroke-4"
        );
    }

    #[test]
    fn variants_and_importance_scope_conflicts() {
        assert_eq!(merge_classes(["w-10 md:w-20", "w-12"]), "md:w-20 w-12");
        assert_eq!(merge_classes(["hover:bg-red-500", "hover:bg-blue-500"]), "hover:bg-blue-500");
        assert_eq!(merge_classes(["!p-2", "p-4"]), "!p-2 p-4");
    }

    #[test]
    fn unknown_classes_never_conflict() {
        assert_eq!(merge_classes(["ring-widget", "ring-label"]), "ring-widget ring-label");
    }

    #[test]
    fn output_is_deterministic() {
        let input = ["relative inline-flex items-center", "text-sm w-20", "w-24 text-lg"];
        assert_eq!(merge_classes(input), merge_classes(input));
    }
}
