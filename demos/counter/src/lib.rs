tally::start!();
