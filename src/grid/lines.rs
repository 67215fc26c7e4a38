//! Naive line-splitting CSV loader.

use crate::grid::Grid;

/// Parse CSV text by splitting on newlines and commas.
///
/// Rules:
///
/// - Empty lines are dropped.
/// - Each remaining line is split on `,`.
/// - Surrounding whitespace is trimmed from every cell.
/// - No quote handling: quotes and embedded commas inside quotes are NOT
///   interpreted, so `"a,b"` becomes two cells. Use [`crate::grid::quoted`]
///   when the input relies on quoting.
pub fn parse(text: &str) -> Grid {
    let rows = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(|cell| cell.trim().to_owned()).collect())
        .collect();
    Grid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn trims_cells_and_skips_empty_lines() {
        let grid = parse("a , b\n\n c ,d\n");
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.row(0).unwrap(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(grid.cell(1, 0).unwrap(), "c");
    }

    #[test]
    fn does_not_interpret_quotes() {
        let grid = parse("\"a,b\",c\n");
        assert_eq!(
            grid.row(0).unwrap(),
            vec!["\"a".to_string(), "b\"".to_string(), "c".to_string()]
        );
    }
}
