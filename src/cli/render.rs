//! Console rendering for the café shell
//!
//! Everything that decides how the café looks on a terminal lives here:
//! borders, emoji and prompt wording. Functions write to any `Write` sink so
//! the shell can be driven from tests.

use crate::menu::{CatalogEntry, Drink};
use crate::order::{CartSummary, PricedLine, Receipt};
use crate::session::{MenuRow, Suggestion};
use std::io::{self, Write};

const RULE: &str = "─────────────────────────────────────────";
const DASHES: &str = "-----------------------------------------";
const TAGLINE: &str = "        🌙  Where moods turn into warm brews  ☕";

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn header<W: Write>(out: &mut W, cafe_name: &str) -> io::Result<()> {
    let title = format!(" {} ", cafe_name.to_uppercase());
    let side = "═".repeat(18);
    let inner = title.chars().count() + 36;
    // The moon and the cup each take two terminal columns
    let pad = inner.saturating_sub(TAGLINE.chars().count() + 2);

    writeln!(out, "╔{side}{title}{side}╗")?;
    writeln!(out, "║{}{}║", TAGLINE, " ".repeat(pad))?;
    writeln!(out, "╚{}╝", "═".repeat(inner))
}

pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  menu        Show the full drink menu")?;
    writeln!(out, "  mood <mood> Ask by mood (e.g., mood anxious)")?;
    writeln!(out, "  suggest     Let the café ask how you're feeling and suggest")?;
    writeln!(out, "  <drink>     Type a drink name exactly to add it to cart")?;
    writeln!(out, "  cart        View your cart")?;
    writeln!(out, "  checkout    Finish and pay")?;
    writeln!(out, "  help        Show this help")?;
    writeln!(out, "  exit        Exit the café")
}

pub fn goodbye<W: Write>(out: &mut W, cafe_name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "\"May your days stay warm, and your heart stay full.\"")?;
    writeln!(
        out,
        "🌙 {} — come back when your mood seeks another flavor.",
        cafe_name
    )
}

pub fn menu<W: Write>(out: &mut W, rows: &[MenuRow<'_>]) -> io::Result<()> {
    let name_width = rows
        .iter()
        .map(|r| r.entry.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    writeln!(out)?;
    writeln!(out, "╔══════════ ✧ DRINK MENU ✧ ══════════╗")?;
    for row in rows {
        let mood = row.mood.map(capitalize).unwrap_or_default();
        writeln!(
            out,
            "  {:<13} — {:<width$} {} {}",
            mood,
            row.entry.name,
            row.entry.price,
            row.entry.emoji,
            width = name_width
        )?;
    }
    writeln!(out, "╚══════════════════════════════════════╝")
}

pub fn mood_card<W: Write>(out: &mut W, suggestion: &Suggestion<'_>) -> io::Result<()> {
    let border = "────────── ✧ Mood Detected ✧ ──────────";
    let mood = suggestion.mood;
    writeln!(out)?;
    writeln!(out, "{}", border)?;
    writeln!(
        out,
        "        {} {} {}",
        mood.emoji,
        mood.mood.to_uppercase(),
        mood.emoji
    )?;
    writeln!(out, "\"{}\"", mood.quote)?;
    writeln!(out, "{}", border)
}

pub fn unknown_mood<W: Write>(out: &mut W, message: &str, moods: &[&str]) -> io::Result<()> {
    writeln!(out, "💬 {}", message)?;
    writeln!(out, "Try one of: {}", moods.join(", "))
}

pub fn brew<W: Write>(out: &mut W, drink: &Drink) -> io::Result<()> {
    let mut lines = drink.brew_narration().into_iter();
    writeln!(out)?;
    if let Some(opening) = lines.next() {
        writeln!(out, "{}", opening)?;
    }
    writeln!(out, "{}", DASHES)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn serve<W: Write>(out: &mut W, drink: &Drink) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Your drink is ready!")?;
    writeln!(out, "{}", drink.serve_title())?;
    writeln!(out, "\"{}\"", drink.description)?;
    writeln!(out, "Ingredients: {}", drink.ingredients.join(", "))
}

pub fn preview<W: Write>(out: &mut W, entry: &CatalogEntry, drink: &Drink) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "────────── ✧ DRINK PREVIEW ✧ ──────────")?;
    writeln!(out, "   {} {}", drink.name, entry.emoji)?;
    writeln!(out, "\"{}\"", drink.description)?;
    writeln!(out, "Ingredients: {}", drink.ingredients.join(", "))?;
    writeln!(out, "Price: {}", entry.price)?;
    writeln!(out, "───────────────────────────────────────")
}

fn priced_lines<W: Write>(out: &mut W, lines: &[PricedLine]) -> io::Result<()> {
    for line in lines {
        let label = format!("{} {}", line.name, line.emoji);
        writeln!(
            out,
            "{:<28} x{}    {}",
            label.trim_end(),
            line.quantity,
            line.subtotal
        )?;
    }
    Ok(())
}

pub fn cart<W: Write>(out: &mut W, summary: &CartSummary) -> io::Result<()> {
    if summary.is_empty() {
        writeln!(out)?;
        return writeln!(out, "Your cart is empty ✨");
    }
    writeln!(out)?;
    writeln!(out, "────────── ✧ CURRENT CART ✧ ──────────")?;
    priced_lines(out, &summary.lines)?;
    writeln!(out, "{}", DASHES)?;
    writeln!(out, "TOTAL: {}", summary.total)?;
    writeln!(out, "{}", RULE)
}

pub fn receipt<W: Write>(out: &mut W, receipt: &Receipt, cafe_name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "────────── ✧ FINAL RECEIPT ✧ ──────────")?;
    writeln!(out, "Customer: {} ⭐", receipt.customer)?;
    writeln!(
        out,
        "Receipt #{}  {}",
        receipt.number.simple(),
        receipt.issued_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    priced_lines(out, &receipt.lines)?;
    writeln!(out, "{}", DASHES)?;
    writeln!(out, "Cups: {}", receipt.item_count())?;
    writeln!(out, "TOTAL                         {}", receipt.total)?;
    writeln!(out, "{}", DASHES)?;
    writeln!(
        out,
        "\"Thank you, {}! Your presence warmed {} 🌙\"",
        receipt.customer, cafe_name
    )?;
    writeln!(out, "Enjoy your brews — see you again ✨")?;
    writeln!(out, "{}", RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;
    use crate::session::CafeSession;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("anxious"), "Anxious");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_header_box_is_closed() {
        let text = render(|out| header(out, "Sip Happens Café"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert!(lines[1].starts_with('║') && lines[1].ends_with('║'));
        assert!(lines[2].starts_with('╚') && lines[2].ends_with('╝'));
        assert!(lines[0].contains("SIP HAPPENS CAFÉ"));
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn test_menu_lists_moods_names_and_prices() {
        let menu = Menu::house().unwrap();
        let session = CafeSession::new(&menu);
        let text = render(|out| super::menu(out, &session.list_catalog_entries()));

        assert!(text.contains("DRINK MENU"));
        assert!(text.contains("Anxious"));
        assert!(text.contains("Lavender Serenity Latte"));
        assert!(text.contains("₱150.00"));
    }

    #[test]
    fn test_mood_card_and_brew() {
        let menu = Menu::house().unwrap();
        let session = CafeSession::new(&menu);
        let suggestion = session.suggest_by_mood("reflective").unwrap();

        let card = render(|out| mood_card(out, &suggestion));
        assert!(card.contains("REFLECTIVE"));
        assert!(card.contains("some thoughts are best brewed in silence"));

        let brewed = render(|out| brew(out, &suggestion.drink));
        assert!(brewed.contains("🍵 Brewing your Autumn Chai Calm..."));
        assert!(brewed.contains("🌿 Steeping nutmeg..."));
    }

    #[test]
    fn test_empty_cart_message() {
        let summary = CartSummary::from_lines(Vec::new());
        assert!(render(|out| cart(out, &summary)).contains("Your cart is empty"));
    }

    #[test]
    fn test_receipt_shows_customer_and_total() {
        let menu = Menu::house().unwrap();
        let mut session = CafeSession::new(&menu);
        session.add_to_cart("honey_warmth_milk", 2);
        let receipt = session.checkout("Ana").unwrap();

        let text = render(|out| super::receipt(out, &receipt, &menu.cafe_name));
        assert!(text.contains("Customer: Ana"));
        assert!(text.contains("Honey Warmth Milk"));
        assert!(text.contains("x2"));
        assert!(text.contains("Cups: 2"));
        assert!(text.contains("₱270.00"));
    }
}
