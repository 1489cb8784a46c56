use leptos::logging::debug_warn;

pub const GRID_COLUMNS: u8 = 12;

pub const LABEL_CLASS: &str = match option_env!("FORM_LABEL_CLASS") {
    Some(c) => c,
    None => "block text-xs font-bold text-gray-700 dark:text-white uppercase tracking-wide",
};

pub const INPUT_CLASS: &str = match option_env!("FORM_INPUT_CLASS") {
    Some(c) => c,
    None => "mt-2 block w-full border border-gray-300 dark:border-gray-700 dark:bg-gray-800 dark:text-white rounded-md shadow-sm py-2 px-3 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm",
};

pub const ERROR_CLASS: &str = match option_env!("FORM_ERROR_CLASS") {
    Some(c) => c,
    None => "text-red mt-2",
};

/// Joins the present, non-empty class tokens with single spaces.
pub fn class_names<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .flatten()
        .filter(|t| !t.as_ref().trim().is_empty())
        .map(|t| t.as_ref().trim().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Grid span class for a field. Full width when `columns` is `None` or 0.
///
/// Out-of-range spans are not clamped; the browser ignores classes it
/// has no rule for.
pub fn col_span_class(columns: Option<u8>) -> String {
    let span = columns.filter(|c| *c != 0).unwrap_or(GRID_COLUMNS);
    if !(1..=GRID_COLUMNS).contains(&span) {
        debug_warn!("column span {} is outside 1..={}", span, GRID_COLUMNS);
    }
    format!("col-span-{}", span)
}
