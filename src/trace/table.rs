// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Dir, LABEL_SYMBOL};

/// What the tracer must do upon entering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Continue in the given direction, back on the normal layer.
    Move(Dir),
    /// Keep direction, drop to the under layer for this cell.
    Under,
    /// Turn toward the single other occupied neighbor.
    Check,
    /// Adopt the label text attached to this cell as the lead name.
    Rename,
    /// End the lead without including this cell.
    Stop,
    /// End the lead, including this cell as its final step.
    Terminate,
    /// The pairing is explicitly rejected.
    Invalid,
}

/// The transition table, keyed by (cell symbol, heading on entry).
///
/// `Dir::Still` is the "just starting" column; it can only pair with a
/// head's own cell and never occurs mid-walk. `None` means the symbol has
/// no row for this heading at all (an unrecognized pairing), as opposed to
/// an explicit [`Action::Invalid`] entry.
///
/// Straight segments (`-` `|`) and the direction markers that can be
/// entered sideways (`V` `>` `<`) turn perpendicular arrivals into
/// underpasses; the diagonals (`/` `\`) reflect; `+` re-resolves the
/// direction; `O` and digits are endpoints and terminate arriving strands.
pub(crate) fn action_for(symbol: char, heading: Dir) -> Option<Action> {
    use Dir::{Down, Left, Right, Still, Up};

    Some(match (symbol, heading) {
        ('O', Still) => Action::Check,
        ('O' | '0'..='9', _) => Action::Terminate,

        ('.', Still) => Action::Invalid,
        ('.', _) => Action::Stop,

        ('V' | 'v', Still | Down) => Action::Move(Down),
        ('V' | 'v', Up) => Action::Invalid,
        ('V' | 'v', Right | Left) => Action::Under,

        ('>', Still | Right) => Action::Move(Right),
        ('>', Up | Down) => Action::Under,
        ('>', Left) => Action::Invalid,

        ('<', Still | Left) => Action::Move(Left),
        ('<', Up | Down) => Action::Under,
        ('<', Right) => Action::Invalid,

        ('-', Right) => Action::Move(Right),
        ('-', Left) => Action::Move(Left),
        ('-', Up | Down) => Action::Under,
        ('-', Still) => Action::Invalid,

        ('|', Up) => Action::Move(Up),
        ('|', Down) => Action::Move(Down),
        ('|', Right | Left) => Action::Under,
        ('|', Still) => Action::Invalid,

        ('/', Up) => Action::Move(Right),
        ('/', Down) => Action::Move(Left),
        ('/', Right) => Action::Move(Up),
        ('/', Left) => Action::Move(Down),
        ('/', Still) => Action::Invalid,

        ('\\', Up) => Action::Move(Left),
        ('\\', Down) => Action::Move(Right),
        ('\\', Right) => Action::Move(Down),
        ('\\', Left) => Action::Move(Up),
        ('\\', Still) => Action::Invalid,

        ('+', Still) => Action::Invalid,
        ('+', _) => Action::Check,

        (LABEL_SYMBOL, Still) => Action::Invalid,
        (LABEL_SYMBOL, _) => Action::Rename,

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{action_for, Action};
    use crate::model::Dir;

    #[rstest]
    #[case('-', Dir::Right, Action::Move(Dir::Right))]
    #[case('-', Dir::Left, Action::Move(Dir::Left))]
    #[case('-', Dir::Up, Action::Under)]
    #[case('-', Dir::Down, Action::Under)]
    #[case('|', Dir::Up, Action::Move(Dir::Up))]
    #[case('|', Dir::Down, Action::Move(Dir::Down))]
    #[case('|', Dir::Right, Action::Under)]
    #[case('/', Dir::Up, Action::Move(Dir::Right))]
    #[case('/', Dir::Down, Action::Move(Dir::Left))]
    #[case('/', Dir::Right, Action::Move(Dir::Up))]
    #[case('/', Dir::Left, Action::Move(Dir::Down))]
    #[case('\\', Dir::Up, Action::Move(Dir::Left))]
    #[case('\\', Dir::Down, Action::Move(Dir::Right))]
    #[case('\\', Dir::Right, Action::Move(Dir::Down))]
    #[case('\\', Dir::Left, Action::Move(Dir::Up))]
    #[case('V', Dir::Down, Action::Move(Dir::Down))]
    #[case('v', Dir::Left, Action::Under)]
    #[case('>', Dir::Right, Action::Move(Dir::Right))]
    #[case('>', Dir::Up, Action::Under)]
    #[case('<', Dir::Down, Action::Under)]
    #[case('+', Dir::Down, Action::Check)]
    #[case('.', Dir::Right, Action::Stop)]
    #[case('L', Dir::Up, Action::Rename)]
    #[case('O', Dir::Still, Action::Check)]
    #[case('O', Dir::Right, Action::Terminate)]
    #[case('7', Dir::Down, Action::Terminate)]
    fn table_entries(#[case] symbol: char, #[case] heading: Dir, #[case] expected: Action) {
        assert_eq!(action_for(symbol, heading), Some(expected));
    }

    #[rstest]
    #[case('V', Dir::Up)]
    #[case('>', Dir::Left)]
    #[case('<', Dir::Right)]
    #[case('-', Dir::Still)]
    #[case('.', Dir::Still)]
    fn explicitly_invalid_entries(#[case] symbol: char, #[case] heading: Dir) {
        assert_eq!(action_for(symbol, heading), Some(Action::Invalid));
    }

    #[rstest]
    #[case('a', Dir::Right)]
    #[case('^', Dir::Up)]
    #[case('*', Dir::Down)]
    fn unmapped_symbols_have_no_entry(#[case] symbol: char, #[case] heading: Dir) {
        assert_eq!(action_for(symbol, heading), None);
    }
}
