use blackjack::{Player, TableIo};
use std::io::{self, BufRead, Write};

/// Line-oriented table front end over stdin/stdout. Unparseable answers are
/// re-prompted here and never reach the engine.
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Console
    }

    /// Print the question and read one trimmed line. `None` on end of input.
    fn ask(&mut self, question: &str) -> Option<String> {
        println!("{question}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Yes/no question, asked again until the answer parses. End of input
    /// counts as a no.
    pub fn confirm(&mut self, question: &str) -> bool {
        loop {
            let Some(answer) = self.ask(question) else {
                return false;
            };
            match parse_yes_no(&answer) {
                Some(choice) => return choice,
                None => println!("Please provide a valid answer."),
            }
        }
    }
}

impl TableIo for Console {
    fn hit_or_stand(&mut self, player: &Player) -> bool {
        loop {
            let question = format!("{}, do you [h]it or [s]tand?", player.name);
            let Some(answer) = self.ask(&question) else {
                return false;
            };
            match parse_hit_or_stand(&answer) {
                Some(choice) => return choice,
                None => println!("Please answer with h or s."),
            }
        }
    }

    fn show_status(&mut self, player: &Player) {
        println!(
            "{}'s score is {}: {}",
            player.name,
            player.points(),
            player.hand.to_display()
        );
    }
}

fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" | "yup" => Some(true),
        "n" | "no" | "nope" => Some(false),
        _ => None,
    }
}

fn parse_hit_or_stand(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "h" => Some(true),
        "s" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no_accepted_words() {
        for yes in ["y", "yes", "yup", "YES", "Yup"] {
            assert_eq!(parse_yes_no(yes), Some(true));
        }
        for no in ["n", "no", "nope", "NO", "Nope"] {
            assert_eq!(parse_yes_no(no), Some(false));
        }
    }

    #[test]
    fn test_parse_yes_no_rejects_everything_else() {
        for bad in ["", "maybe", "yess", "21", "hi"] {
            assert_eq!(parse_yes_no(bad), None);
        }
    }

    #[test]
    fn test_parse_yes_no_trims_whitespace() {
        assert_eq!(parse_yes_no("  yes \n"), Some(true));
    }

    #[test]
    fn test_parse_hit_or_stand() {
        assert_eq!(parse_hit_or_stand("h"), Some(true));
        assert_eq!(parse_hit_or_stand("H"), Some(true));
        assert_eq!(parse_hit_or_stand("s"), Some(false));
        assert_eq!(parse_hit_or_stand("S"), Some(false));
        assert_eq!(parse_hit_or_stand("hit"), None);
        assert_eq!(parse_hit_or_stand(""), None);
    }
}
