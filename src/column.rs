/// Width of a tab stop, in columns.
pub const TAB_WIDTH: usize = 8;

/// Returns the column reached after consuming `character` at `column`.
///
/// A newline resets to zero. A tab moves to the next tab stop, always
/// advancing at least one column, so a tab at column 8 lands on 16.
pub fn advance(column: usize, character: char) -> usize {
    match character {
        '\n' => 0,
        '\t' => next_tab_stop(column),
        _ => column + 1,
    }
}

/// Column advance used inside string literals, where a newline does not
/// reset the column.
pub(crate) fn advance_in_literal(column: usize, character: char) -> usize {
    match character {
        '\t' => next_tab_stop(column),
        _ => column + 1,
    }
}

fn next_tab_stop(column: usize) -> usize {
    (column / TAB_WIDTH + 1) * TAB_WIDTH
}
