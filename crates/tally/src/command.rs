// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands that can be issued to a counter.

use std::fmt;

use crate::config::Config;

/// One of the three state transitions a counter supports.
///
/// Every command is total: it is defined for every count and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `count - 1`
    Decrease,
    /// `0`
    Reset,
    /// `count + 1`
    Increase,
}

impl Command {
    /// All commands, in the order their controls appear on the page.
    pub const ALL: [Command; 3] = [Command::Decrease, Command::Reset, Command::Increase];

    /// Compute the count following this command.
    ///
    /// ```
    /// use tally::Command;
    ///
    /// assert_eq!(Command::Increase.apply(41), 42);
    /// assert_eq!(Command::Decrease.apply(0), -1);
    /// assert_eq!(Command::Reset.apply(-7), 0);
    /// ```
    ///
    /// Arithmetic wraps at the `i64` boundaries, so `Increase` and
    /// `Decrease` remain exact inverses of each other there too.
    #[inline]
    pub const fn apply(self, count: i64) -> i64 {
        match self {
            Command::Decrease => count.wrapping_sub(1),
            Command::Reset => 0,
            Command::Increase => count.wrapping_add(1),
        }
    }

    /// Name of the control role this command is bound to.
    pub const fn role(self) -> &'static str {
        match self {
            Command::Decrease => "decrease",
            Command::Reset => "reset",
            Command::Increase => "increase",
        }
    }

    /// Element id of the control bound to this command.
    pub fn control_id(self, config: &Config) -> &str {
        match self {
            Command::Decrease => &config.decrease,
            Command::Reset => &config.reset,
            Command::Increase => &config.increase,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_counts_up() {
        let count = (0..5).fold(0, |count, _| Command::Increase.apply(count));

        assert_eq!(count, 5);
    }

    #[test]
    fn decrease_goes_negative() {
        let count = (0..3).fold(0, |count, _| Command::Decrease.apply(count));

        assert_eq!(count, -3);
    }

    #[test]
    fn reset_is_idempotent() {
        for count in [i64::MIN, -12, 0, 1, 9001, i64::MAX] {
            let once = Command::Reset.apply(count);

            assert_eq!(once, 0);
            assert_eq!(Command::Reset.apply(once), 0);
        }
    }

    #[test]
    fn increase_and_decrease_are_inverses() {
        let sequence = [
            Command::Increase,
            Command::Decrease,
            Command::Decrease,
            Command::Increase,
            Command::Increase,
            Command::Decrease,
        ];

        for start in [-3, 0, 17] {
            let end = sequence.iter().fold(start, |count, cmd| cmd.apply(count));

            assert_eq!(end, start);
        }
    }

    #[test]
    fn boundaries_wrap_without_panicking() {
        assert_eq!(Command::Increase.apply(i64::MAX), i64::MIN);
        assert_eq!(Command::Decrease.apply(i64::MIN), i64::MAX);
        assert_eq!(Command::Decrease.apply(Command::Increase.apply(i64::MAX)), i64::MAX);
    }

    #[test]
    fn control_ids_follow_config() {
        let config = Config::default().with_reset("zero");

        assert_eq!(Command::Decrease.control_id(&config), "decreaseBtn");
        assert_eq!(Command::Reset.control_id(&config), "zero");
        assert_eq!(Command::Increase.control_id(&config), "increaseBtn");
    }

    #[test]
    fn display_uses_role() {
        let roles: Vec<String> = Command::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(roles, ["decrease", "reset", "increase"]);
    }
}
