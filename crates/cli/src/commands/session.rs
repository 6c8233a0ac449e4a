//! Interactive shopping session.
//!
//! Reads one command per line from stdin. The catalog is fetched once on
//! start; `reload` fetches it again. Failures are reported and the session
//! carries on with its current state.

use online_shop_core::ProductId;
use online_shop_storefront::{
    LoadOutcome, ProductApiClient, Session, StorefrontConfig, StorefrontError,
};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

const HELP: &str = "\
Commands:
  list                 show the catalog
  reload               fetch the catalog again
  add <id>             add a catalog product to the cart
  remove <id>          remove every cart entry with that id
  cart                 show the cart
  name <text>          set the draft name
  description <text>   set the draft description
  image <url>          set the draft image URL
  price <number>       set the draft price
  weight <number>      set the draft weight
  draft                show the draft
  submit               create the drafted product
  help                 show this help
  quit                 end the session";

/// Errors parsing a session command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("Invalid product id: {0}")]
    InvalidId(String),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Reload,
    Add(ProductId),
    Remove(ProductId),
    Cart,
    Name(String),
    Description(String),
    Image(String),
    Price(String),
    Weight(String),
    Draft,
    Submit,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` for unknown verbs, missing arguments, or
    /// malformed product ids.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let command = match verb {
            "list" | "ls" => Self::List,
            "reload" => Self::Reload,
            "add" => Self::Add(parse_id("add", rest)?),
            "remove" | "rm" => Self::Remove(parse_id("remove", rest)?),
            "cart" => Self::Cart,
            "name" => Self::Name(rest.to_string()),
            "description" | "desc" => Self::Description(rest.to_string()),
            "image" => Self::Image(rest.to_string()),
            "price" => Self::Price(rest.to_string()),
            "weight" => Self::Weight(rest.to_string()),
            "draft" => Self::Draft,
            "submit" => Self::Submit,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(verb: &'static str, arg: &str) -> Result<ProductId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(verb));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

/// Run the session loop until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if the client cannot be built or stdin fails.
/// Catalog and submit failures are reported inline instead.
pub async fn run(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let session = super::connect(config)?;

    report_load(session.start().await.map_err(StorefrontError::from));
    render::message("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        render::prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(&session, command).await,
            Ok(None) => {}
            Err(e) => render::message(&e.to_string()),
        }
    }
    Ok(())
}

async fn execute(session: &Session<ProductApiClient>, command: Command) {
    match command {
        Command::List => render::catalog(&session.catalog_view()),
        Command::Reload => report_load(session.reload().await.map_err(StorefrontError::from)),
        Command::Add(id) => match session.add_to_cart_by_id(id) {
            Ok(entry) => render::message(&format!("Added {} to cart", entry.name)),
            Err(e) => render::message(&e.to_string()),
        },
        Command::Remove(id) => {
            let removed = session.remove_from_cart(id);
            render::message(&format!("Removed {removed} item(s)"));
        }
        Command::Cart => render::cart(&session.cart_view()),
        Command::Name(name) => session.edit_draft(|draft| draft.name = name),
        Command::Description(text) => session.edit_draft(|draft| draft.description = text),
        Command::Image(url) => session.edit_draft(|draft| draft.image_url = url),
        Command::Price(raw) => session.edit_draft(|draft| draft.set_price_input(&raw)),
        Command::Weight(raw) => session.edit_draft(|draft| draft.set_weight_input(&raw)),
        Command::Draft => render::draft(&session.creation().draft()),
        Command::Submit => match session.submit().await {
            Ok(product) => render::created(&product),
            Err(e) => render::message(&format!("{e}. Your draft was kept.")),
        },
        Command::Help => render::message(HELP),
        Command::Quit => {}
    }
}

fn report_load(result: Result<LoadOutcome, StorefrontError>) {
    match result {
        Ok(LoadOutcome::Replaced { count }) => {
            render::message(&format!("Loaded {count} product(s)"));
        }
        Ok(LoadOutcome::Stale) => {}
        Err(e) => render::message(&e.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_cart_commands() {
        assert_eq!(
            Command::parse("add 3").unwrap(),
            Some(Command::Add(ProductId::new(3)))
        );
        assert_eq!(
            Command::parse("rm  12 ").unwrap(),
            Some(Command::Remove(ProductId::new(12)))
        );
    }

    #[test]
    fn test_parse_draft_text_keeps_spaces() {
        assert_eq!(
            Command::parse("description Blue ink, fine tip").unwrap(),
            Some(Command::Description("Blue ink, fine tip".to_string()))
        );
    }

    #[test]
    fn test_parse_price_is_left_raw() {
        assert_eq!(
            Command::parse("price two").unwrap(),
            Some(Command::Price("two".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("add").unwrap_err(),
            CommandError::MissingArgument("add")
        );
        assert_eq!(
            Command::parse("add mug").unwrap_err(),
            CommandError::InvalidId("mug".to_string())
        );
        assert_eq!(
            Command::parse("checkout").unwrap_err(),
            CommandError::Unknown("checkout".to_string())
        );
    }
}
