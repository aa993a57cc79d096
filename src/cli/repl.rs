//! The interactive café loop
//!
//! [`Shell`] reads one command per line from any `BufRead`, talks to a
//! [`CafeSession`] and renders the result to any `Write`. End of input is
//! treated like `exit`.

use super::render;
use crate::menu::Menu;
use crate::order::parse_quantity;
use crate::session::CafeSession;
use crate::{Result, SipError};
use std::io::{BufRead, Write};
use tracing::{debug, error};

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Exit,
    Help,
    Menu,
    Cart,
    Checkout,
    /// `mood <text>`; text keeps the user's casing
    Mood(String),
    /// Anything else: a drink name, `suggest`, bare `mood` or an unknown
    /// command. Drink names win, so it is resolved against the menu.
    Text(String),
    Blank,
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Input::Blank;
        }

        let lower = line.to_lowercase();
        match lower.as_str() {
            "exit" | "quit" => return Input::Exit,
            "help" => return Input::Help,
            "menu" => return Input::Menu,
            "cart" => return Input::Cart,
            "checkout" => return Input::Checkout,
            _ => {}
        }

        if line.is_char_boundary(5) && line[..5].eq_ignore_ascii_case("mood ") {
            return Input::Mood(line[5..].trim().to_string());
        }

        Input::Text(line.to_string())
    }
}

/// Whether the loop should keep prompting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'m, R, W> {
    session: CafeSession<'m>,
    input: R,
    out: W,
}

impl<'m, R: BufRead, W: Write> Shell<'m, R, W> {
    pub fn new(menu: &'m Menu, input: R, out: W) -> Self {
        Self {
            session: CafeSession::new(menu),
            input,
            out,
        }
    }

    pub fn session(&self) -> &CafeSession<'m> {
        &self.session
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> Result<()> {
        let cafe_name = self.session.menu().cafe_name.clone();

        render::header(&mut self.out, &cafe_name)?;
        writeln!(
            self.out,
            "Welcome! The menu is always available. 🍃✨"
        )?;
        writeln!(
            self.out,
            "Type a drink name to add it to cart, or use the commands below."
        )?;
        render::help(&mut self.out)?;
        render::menu(&mut self.out, &self.session.list_catalog_entries())?;

        loop {
            let line = match self.prompt("\nYour sip choice: ")? {
                Some(line) => line,
                None => break,
            };

            let result = self.handle(Input::parse(&line));
            if self.recover(result)? == Flow::Quit {
                break;
            }
        }

        render::goodbye(&mut self.out, &cafe_name)?;
        self.out.flush()?;
        debug!(served = self.session.served(), "Shell closed");
        Ok(())
    }

    fn handle(&mut self, input: Input) -> Result<Flow> {
        debug!(?input, "Handling input");
        match input {
            Input::Exit => return Ok(Flow::Quit),
            Input::Blank => {}
            Input::Help => render::help(&mut self.out)?,
            Input::Menu => render::menu(&mut self.out, &self.session.list_catalog_entries())?,
            Input::Cart => render::cart(&mut self.out, &self.session.view_cart())?,
            Input::Checkout => return self.checkout_flow(),
            Input::Mood(mood) => return self.mood_flow(&mood),
            Input::Text(text) => {
                if let Some(entry) = self.session.resolve_drink_by_name(&text) {
                    return self.direct_order_flow(&entry.key);
                }
                if text.eq_ignore_ascii_case("suggest") || text.eq_ignore_ascii_case("mood") {
                    return self.suggest_flow();
                }
                writeln!(
                    self.out,
                    "Unknown command or drink. Type 'help' to see commands or 'menu' to view drinks."
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Show a failed command and keep going; I/O failures still end the loop
    fn recover(&mut self, result: Result<Flow>) -> Result<Flow> {
        match result {
            Err(e) if e.is_recoverable() => {
                error!(error = %e, "Command failed");
                writeln!(self.out, "An unexpected error occurred: {}", e)?;
                Ok(Flow::Continue)
            }
            other => other,
        }
    }

    fn suggest_flow(&mut self) -> Result<Flow> {
        match self.prompt("How are you feeling? > ")? {
            Some(mood) => self.mood_flow(&mood),
            None => Ok(Flow::Quit),
        }
    }

    fn mood_flow(&mut self, mood: &str) -> Result<Flow> {
        let suggestion = match self.session.suggest_by_mood(mood) {
            Ok(suggestion) => suggestion,
            Err(e @ SipError::MoodNotFound { .. }) => {
                render::unknown_mood(&mut self.out, &e.to_string(), &self.session.list_moods())?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };

        render::mood_card(&mut self.out, &suggestion)?;
        render::brew(&mut self.out, &suggestion.drink)?;
        render::serve(&mut self.out, &suggestion.drink)?;
        writeln!(self.out, "Price: {}", suggestion.price)?;

        self.offer(
            suggestion.key,
            &suggestion.drink.name,
            "\nAdd this to cart? (yes/no) > ",
            "No problem — enjoy the moment ✨",
        )
    }

    fn direct_order_flow(&mut self, key: &str) -> Result<Flow> {
        let menu = self.session.menu();
        let Some(entry) = menu.catalog.get(key) else {
            return Ok(Flow::Continue);
        };
        let drink = self.session.preview(key);
        render::preview(&mut self.out, entry, &drink)?;

        self.offer(
            key,
            &drink.name,
            "Add to cart? (yes/no) > ",
            "Alright — let the cup wait for another day.",
        )
    }

    /// Ask whether to add a drink and how many
    fn offer(&mut self, key: &str, name: &str, question: &str, declined: &str) -> Result<Flow> {
        let answer = match self.prompt(question)? {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        };

        if answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y") {
            let quantity = match self.prompt("Quantity > ")? {
                Some(text) => parse_quantity(&text),
                None => return Ok(Flow::Quit),
            };
            self.session.add_to_cart(key, quantity);
            writeln!(self.out, "Added {} x {} to cart.", quantity, name)?;
        } else {
            writeln!(self.out, "{}", declined)?;
        }
        Ok(Flow::Continue)
    }

    fn checkout_flow(&mut self) -> Result<Flow> {
        if self.session.cart().is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "Your cart is empty. Add a drink first ✨")?;
            return Ok(Flow::Continue);
        }

        let name = match self.prompt("\nMay I have your name, please? ")? {
            Some(name) => name,
            None => return Ok(Flow::Quit),
        };

        if let Some(receipt) = self.session.checkout(&name) {
            let cafe_name = &self.session.menu().cafe_name;
            render::receipt(&mut self.out, &receipt, cafe_name)?;
        }
        Ok(Flow::Continue)
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;
    use crate::menu::Money;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_script(menu: &Menu, script: &str) -> (String, u32, Money) {
        let mut out = Vec::new();
        let mut shell = Shell::new(menu, Cursor::new(script.to_string()), &mut out);
        shell.run().unwrap();
        let served = shell.session().served();
        let pending = shell.session().view_cart().total;
        drop(shell);
        (String::from_utf8(out).unwrap(), served, pending)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("  EXIT "), Input::Exit);
        assert_eq!(Input::parse("quit"), Input::Exit);
        assert_eq!(Input::parse("Menu"), Input::Menu);
        assert_eq!(Input::parse("cart"), Input::Cart);
        assert_eq!(Input::parse("checkout"), Input::Checkout);
        assert_eq!(Input::parse("Suggest"), Input::Text("Suggest".to_string()));
        assert_eq!(Input::parse("mood"), Input::Text("mood".to_string()));
        assert_eq!(Input::parse("MOOD  Anxious "), Input::Mood("Anxious".to_string()));
        assert_eq!(Input::parse(""), Input::Blank);
        assert_eq!(
            Input::parse("Autumn Chai Calm"),
            Input::Text("Autumn Chai Calm".to_string())
        );
        assert_eq!(Input::parse("moody"), Input::Text("moody".to_string()));
    }

    #[test]
    fn test_mood_order_and_checkout() {
        let menu = Menu::house().unwrap();
        let (out, served, pending) =
            run_script(&menu, "mood anxious\nyes\n2\ncart\ncheckout\n\nexit\n");

        assert!(out.contains("ANXIOUS"));
        assert!(out.contains("Added 2 x Lavender Serenity Latte to cart."));
        assert!(out.contains("TOTAL: ₱300.00"));
        assert!(out.contains("Customer: Guest"));
        assert!(out.contains("₱300.00"));
        assert_eq!(served, 1);
        assert_eq!(pending, Money::ZERO);
    }

    #[test]
    fn test_unknown_mood_shows_hint() {
        let menu = Menu::house().unwrap();
        let (out, _, _) = run_script(&menu, "mood Hangry\nexit\n");

        assert!(out.contains("I don't recognize the mood 'Hangry'."));
        assert!(out.contains("Try one of: distracted, sleepy, cranky"));
    }

    #[test]
    fn test_drink_name_orders_directly_with_bad_quantity() {
        let menu = Menu::house().unwrap();
        let (out, _, pending) = run_script(&menu, "honey warmth milk\ny\nlots\n");

        assert!(out.contains("DRINK PREVIEW"));
        assert!(out.contains("Added 1 x Honey Warmth Milk to cart."));
        assert_eq!(pending, Money::from_whole(135));
    }

    #[test]
    fn test_declining_and_unknown_commands() {
        let menu = Menu::house().unwrap();
        let (out, _, pending) = run_script(&menu, "suggest\nbored\nno\nespresso please\ncheckout\n");

        assert!(out.contains("Mocha Mystery Mix"));
        assert!(out.contains("No problem — enjoy the moment ✨"));
        assert!(out.contains("Unknown command or drink."));
        assert!(out.contains("Your cart is empty. Add a drink first"));
        assert_eq!(pending, Money::ZERO);
    }

    #[test]
    fn test_drink_named_like_a_command_can_be_ordered() {
        let yaml = r#"
cafe_name: Corner Café
drinks:
  - key: suggest_special
    name: Suggest
    price: 120
    category: tea
    ingredients: [hibiscus]
moods:
  - mood: curious
    drink: suggest_special
    quote: "ask the cup"
"#;
        let menu = Menu::from_config(&MenuConfig::from_yaml(yaml).unwrap()).unwrap();
        let (out, _, pending) = run_script(&menu, "Suggest\ny\n1\n");

        assert!(out.contains("DRINK PREVIEW"));
        assert!(!out.contains("How are you feeling?"));
        assert!(out.contains("Added 1 x Suggest to cart."));
        assert_eq!(pending, Money::from_whole(120));

        let (out, _, _) = run_script(&menu, "mood\ncurious\nno\n");
        assert!(out.contains("How are you feeling?"));
        assert!(out.contains("CURIOUS"));
    }

    #[test]
    fn test_recoverable_error_keeps_loop_running() {
        let menu = Menu::house().unwrap();
        let mut out = Vec::new();
        let mut shell = Shell::new(&menu, Cursor::new(String::new()), &mut out);

        let flow = shell
            .recover(Err(SipError::Menu("kettle offline".to_string())))
            .unwrap();
        assert_eq!(flow, Flow::Continue);

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(shell.recover(Err(SipError::Io(io))).is_err());
        assert_eq!(shell.recover(Ok(Flow::Quit)).unwrap(), Flow::Quit);
        drop(shell);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("An unexpected error occurred"));
        assert!(text.contains("kettle offline"));
    }

    #[test]
    fn test_end_of_input_says_goodbye() {
        let menu = Menu::house().unwrap();
        let (out, served, _) = run_script(&menu, "");
        assert!(out.contains("come back when your mood seeks another flavor"));
        assert_eq!(served, 0);
    }
}
