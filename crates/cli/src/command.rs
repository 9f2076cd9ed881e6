//! Parsing of session input lines.

/// A line entered at the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `show` - print the menu again
    ShowMenu,
    /// `cart`
    Cart,
    /// `remove` - asks which item to remove
    Remove,
    /// `done` - checkout
    Checkout,
    /// `history`
    History,
    /// `view <n>` with a 1-based receipt number
    View(usize),
    /// Anything else starting with `view`
    ViewUsage,
    /// `chart`
    Chart,
    /// `quit`
    Quit,
    /// Anything else is an item to add to the cart.
    Add(String),
}

impl Command {
    /// Parse one input line. Keywords are matched case-insensitively.
    ///
    /// Returns `None` for blank input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let lowered = input.to_lowercase();

        // Any input starting with "view" is a view request, so `view2` and
        // `viewpoint salad` get the usage hint rather than a menu lookup.
        if lowered.starts_with("view") {
            let words: Vec<&str> = input.split_whitespace().collect();
            return Some(match words.as_slice() {
                [_, n] if n.bytes().all(|b| b.is_ascii_digit()) => {
                    // Numbers too large for usize cannot match a receipt either way.
                    Self::View(n.parse().unwrap_or(usize::MAX))
                }
                _ => Self::ViewUsage,
            });
        }

        let command = match lowered.as_str() {
            "help" => Self::Help,
            "show" => Self::ShowMenu,
            "cart" => Self::Cart,
            "remove" => Self::Remove,
            "done" => Self::Checkout,
            "history" => Self::History,
            "chart" => Self::Chart,
            "quit" => Self::Quit,
            _ => Self::Add(input.to_owned()),
        };
        Some(command)
    }
}
