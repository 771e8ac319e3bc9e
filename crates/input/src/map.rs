//! Line mapping from typed menu numbers to menu actions.

use crate::types::MenuAction;

/// Map a line of input to a menu action.
///
/// Surrounding whitespace is ignored. Anything that is not one of the menu
/// numbers yields `None`.
pub fn parse_menu_line(line: &str) -> Option<MenuAction> {
    let option: u8 = line.trim().parse().ok()?;
    MenuAction::from_option(option)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(parse_menu_line("1"), Some(MenuAction::Play));
        assert_eq!(parse_menu_line("2"), Some(MenuAction::Reserve));
        assert_eq!(parse_menu_line("3"), Some(MenuAction::UseReserved));
        assert_eq!(parse_menu_line("4"), Some(MenuAction::SwapOne));
        assert_eq!(parse_menu_line("5"), Some(MenuAction::SwapThree));
        assert_eq!(parse_menu_line("0"), Some(MenuAction::Quit));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(parse_menu_line("  4\n"), Some(MenuAction::SwapOne));
        assert_eq!(parse_menu_line("\t0\r\n"), Some(MenuAction::Quit));
    }

    #[test]
    fn test_invalid_lines() {
        assert_eq!(parse_menu_line(""), None);
        assert_eq!(parse_menu_line("6"), None);
        assert_eq!(parse_menu_line("-1"), None);
        assert_eq!(parse_menu_line("play"), None);
        assert_eq!(parse_menu_line("1 2"), None);
        assert_eq!(parse_menu_line("300"), None);
    }
}
